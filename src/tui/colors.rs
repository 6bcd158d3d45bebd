//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Used for the selected project row and the task cursor.
pub const HOT_PINK: Color = Color::Rgb(255, 95, 175);
/// Used for the task-pane project header.
pub const STEEL_BLUE: Color = Color::Rgb(175, 175, 215);
