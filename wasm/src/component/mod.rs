pub mod file_input;
pub mod form_guard;
pub mod materialize;
pub mod toast;
pub mod widgets;
