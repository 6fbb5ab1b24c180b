mod form;
mod grants;

pub use form::AssignmentForm;
pub use grants::GrantTable;
