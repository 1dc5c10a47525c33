pub mod form_state;
pub mod picker_state;

pub use form_state::{FormField, FormState, FIELD_WIDTH};
pub use picker_state::{PickerState, MENU_ROWS};
