mod panel;

pub use panel::{AdminPage, ADMIN_LINKS};
