mod allowances;
mod auth;
mod clock_requests;
pub mod client;
mod employees;
mod time_clocks;
pub mod types;
mod work_records;

pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
