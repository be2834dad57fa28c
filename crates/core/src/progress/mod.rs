//! Progress calculation over the level ladder

pub mod level;
pub mod readable;

pub use level::level_of;
pub use readable::readable_time;
