pub mod common;
pub mod confirm_dialog;
pub mod date_selector;
pub mod empty_state;
pub mod error;
pub mod guard;
pub mod layout;
