use std::sync::Arc;

use crate::infrastructure::auth::JwtService;

/// Admin login input
pub struct AdminLoginInput {
    pub name: String,
    pub secret: String,
}

/// Admin login use case - exchanges the configured credentials for an
/// admin capability token
pub struct AdminLogin {
    admin_name: String,
    admin_secret: String,
    jwt_service: Arc<JwtService>,
}

impl AdminLogin {
    pub fn new(admin_name: &str, admin_secret: &str, jwt_service: Arc<JwtService>) -> Self {
        Self {
            admin_name: admin_name.to_string(),
            admin_secret: admin_secret.to_string(),
            jwt_service,
        }
    }

    pub fn execute(&self, input: AdminLoginInput) -> Result<String, AdminLoginError> {
        if input.name.trim() != self.admin_name || input.secret != self.admin_secret {
            tracing::warn!("Rejected admin login for '{}'", input.name.trim());
            return Err(AdminLoginError::InvalidCredentials);
        }

        tracing::info!("Admin logged in: {}", self.admin_name);
        self.jwt_service
            .sign_admin(&self.admin_name)
            .map_err(|e| AdminLoginError::Internal(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AdminLoginError {
    #[error("Invalid admin credentials")]
    InvalidCredentials,
    #[error("Internal error: {0}")]
    Internal(String),
}
