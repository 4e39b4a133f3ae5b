#![forbid(unsafe_code)]

pub mod content;
pub mod format;
pub mod model;
pub mod page;
pub mod time;

pub use time::Clock;
