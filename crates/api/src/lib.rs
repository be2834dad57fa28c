//! Hourglass HTTP API library.
//!
//! Exposes the building blocks (context, error handling, routes, logging
//! utilities) so integration tests and the binary entrypoint can both
//! access them.

pub mod context;
pub mod error;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
