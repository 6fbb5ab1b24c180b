pub mod admin;
pub mod admin_allowance_types;
pub mod admin_assign_allowance;
pub mod admin_clock_requests;
pub mod employee_detail;
pub mod employees;
pub mod login;

pub use admin::AdminPage;
pub use admin_allowance_types::AdminAllowanceTypesPage;
pub use admin_assign_allowance::AdminAssignAllowancePage;
pub use admin_clock_requests::AdminClockRequestsPage;
pub use employee_detail::EmployeeDetailPage;
pub use employees::EmployeesPage;
pub use login::LoginPage;
