//! Reusable UI Components
//!
//! ## Components
//!
//! - `TabSelector` - Horizontal tab bar with a `▶` marker
//! - `InputField` - Text input with focus handling, password masking, help and errors
//! - `StatusIndicator` - Spinner, success, and error indicators
//! - `DialogFrame` - Centered dialog overlay with rounded borders

mod dialog_frame;
mod input_field;
mod status_indicator;
mod tab_selector;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{calculate_input_field_height, render_input_field, InputFieldConfig};
pub use status_indicator::{
    get_spinner_char, render_status_indicator, spinner_frame_for_tick, StatusIndicatorType,
};
pub use tab_selector::{render_tab_selector, TabItem};
