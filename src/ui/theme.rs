//! Color theme constants for the chama UI
//!
//! A small dark palette with a green accent for money and success.

use ratatui::style::Color;

// ============================================================================
// Base Palette
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the selected tab
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info (dates, help text)
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for input areas
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

// ============================================================================
// Content Colors
// ============================================================================

/// Amounts of money
pub const COLOR_AMOUNT: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Spinners and refresh indicators
pub const COLOR_BUSY: Color = Color::Yellow;

/// Success alerts
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error alerts and inline validation errors
pub const COLOR_ERROR: Color = Color::Red;

/// Status and type badges
pub const COLOR_BADGE: Color = Color::Cyan;

// ============================================================================
// Dialog Colors
// ============================================================================

/// Background color for alert dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);
