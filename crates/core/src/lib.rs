#![forbid(unsafe_code)]

pub mod factors;
pub mod model;
pub mod time;

pub use time::Clock;
