//! Color theme constants for the Stride UI
//!
//! Minimal dark palette with a single accent.

use ratatui::style::Color;

// ============================================================================
// Base
// ============================================================================

/// Card and dialog borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the selected card
pub const COLOR_SELECTED: Color = Color::White;

/// Accent for the brand, author names and calls to action
pub const COLOR_ACCENT: Color = Color::Rgb(252, 82, 0);

/// Header text
pub const COLOR_HEADER: Color = Color::White;

/// Secondary text (handles, timestamps, hints)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 25);

// ============================================================================
// Status
// ============================================================================

/// Liked heart
pub const COLOR_LIKED: Color = Color::Rgb(230, 60, 90);

/// Workout summary line
pub const COLOR_WORKOUT: Color = Color::Cyan;

/// Spinners and in-flight markers
pub const COLOR_PENDING: Color = Color::Gray;

/// Error status line and destructive prompts
pub const COLOR_ERROR: Color = Color::Red;
