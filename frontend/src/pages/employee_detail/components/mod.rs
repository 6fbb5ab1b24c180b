mod clock_request_dialog;
mod payroll;
mod time_clock_form;
mod time_clock_list;
mod work_records;

pub use clock_request_dialog::ClockRequestDialog;
pub use payroll::PayrollDisplay;
pub use time_clock_form::TimeClockForm;
pub use time_clock_list::TimeClockList;
pub use work_records::WorkRecordTable;
