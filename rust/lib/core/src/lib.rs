pub mod auth;
pub mod config;
pub mod error;
pub mod types;

pub use auth::{AllowAll, Authenticator, PasskeyAuth};
pub use config::ServiceConfig;
pub use error::ServiceError;
pub use types::{new_id, now_rfc3339, today_utc};
