mod table;

pub use table::ClockRequestTable;
