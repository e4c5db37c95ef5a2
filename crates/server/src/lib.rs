//! HTTP resource API over app records.
//!
//! Stateless request handlers validate input, call the repository, and
//! translate domain failures into HTTP status codes.

pub mod error;
pub mod routes;
pub mod state;
pub mod validation;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
