// Network layer: backend configuration, the REST client and its error type.
pub mod api_client;
pub mod config;
pub mod error;

// Re-export commonly used items
pub use api_client::{ApiClient, ApiResult};
pub use config::ApiConfig;
pub use error::ApiError;
