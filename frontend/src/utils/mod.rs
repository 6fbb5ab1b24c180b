pub mod navigation;
pub mod period;
pub mod rate;
pub mod task;
pub mod time;
