//! Footprint Server - HTTP front end for the carbon footprint calculator
//!
//! - [`api`] - routes, handlers and shared state
//! - [`error`] - error records returned to clients and startup errors
//! - [`console`] - colored tracing output and startup banner
//! - [`server`] - middleware stack, binding and serving

pub mod api;
pub mod console;
pub mod error;
pub mod server;

pub use api::{router, AppState};
pub use error::{ApiError, ServerError};
pub use server::{app, run};
