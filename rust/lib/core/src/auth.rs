//! Admin gate for destructive operations.
//!
//! This is a placeholder gate, not authentication: the caller supplies a
//! passkey and the configured authenticator decides whether the named
//! permission is granted. The concrete implementation is injected at
//! startup time.

use crate::ServiceError;

/// Pluggable authenticator consulted before admin-only operations such as
/// deleting a lab report.
pub trait Authenticator: Send + Sync + 'static {
    /// Check whether `passkey` grants `permission` (e.g. `"qc:report:delete"`).
    fn check(&self, passkey: &str, permission: &str) -> Result<(), ServiceError>;
}

/// Grants everything. Used for testing.
pub struct AllowAll;

impl Authenticator for AllowAll {
    fn check(&self, _passkey: &str, _permission: &str) -> Result<(), ServiceError> {
        Ok(())
    }
}

/// Compares the supplied passkey against a single shared secret.
pub struct PasskeyAuth {
    passkey: String,
}

impl PasskeyAuth {
    pub fn new(passkey: impl Into<String>) -> Self {
        Self {
            passkey: passkey.into(),
        }
    }
}

impl Authenticator for PasskeyAuth {
    fn check(&self, passkey: &str, permission: &str) -> Result<(), ServiceError> {
        if !self.passkey.is_empty() && passkey == self.passkey {
            Ok(())
        } else {
            Err(ServiceError::PermissionDenied(format!(
                "incorrect passkey for {}",
                permission
            )))
        }
    }
}
