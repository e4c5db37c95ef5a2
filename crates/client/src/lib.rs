//! Client-side access to the app catalog API.
//!
//! [`ApiClient`] is a typed gateway over the HTTP surface; [`AppStore`] is the
//! UI-facing state container mirroring server state. The store never performs
//! network calls itself; callers feed it from gateway results.

pub mod api_client;
pub mod store;

pub use api_client::{ApiClient, App, ClientError, CreateAppRequest, UpdateAppRequest};
pub use store::AppStore;
