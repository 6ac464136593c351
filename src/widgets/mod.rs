//! Input widgets shared by the overlays.

pub mod text_input;

pub use text_input::TextInput;
