//! Tracker service and its persistence port

pub mod ports;
pub mod service;

pub use service::TrackerService;
