//! HTTP API module for the payroll engine.
//!
//! This module exposes the engine over a small JSON API: `POST /calculate`
//! and `GET /health`.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
