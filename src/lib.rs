//! Students API: JSON CRUD over a single SQLite-backed student table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;
pub mod store;

pub use config::{Config, ConfigError, HttpServerConfig};
pub use error::AppError;
pub use model::{validator, Student, StudentPayload, ValidationErrors};
pub use response::{general_error, ErrorBody, STATUS_ERROR, STATUS_OK};
pub use routes::{common_routes, common_routes_with_ready, student_routes};
pub use server::{app, serve, shutdown_signal};
pub use state::AppState;
pub use store::{SqliteStore, Storage, StoreError};
