mod form;
mod list;

pub use form::AllowanceTypeForm;
pub use list::AllowanceTypeList;
