//! Command handlers for executing commands.
//!
//! - [`navigation`] - Feed gestures, selection and overlay commands
//! - [`editing`] - Text input in the comment draft and compose sheet

pub mod editing;
pub mod navigation;

pub use editing::*;
pub use navigation::*;
