pub mod config;
pub mod errors;
pub mod features;
pub mod fetch;
pub mod host;
pub mod layout;
pub mod session;
pub mod utils;

pub use layout::{load, PageData, PageOptions, PAGE_OPTIONS};
pub use utils::{format_time, utc_to_hhmm};
