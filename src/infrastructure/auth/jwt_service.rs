use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims - the capabilities of the bearer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    /// Player id, absent for the admin
    #[serde(default)]
    pub player_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    pub exp: usize,
    pub iat: usize,
}

/// JWT service for capability tokens
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in_seconds: usize,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in_seconds: 2 * 24 * 60 * 60, // 2 days
        }
    }

    /// Token for a player who joined the game
    pub fn sign_player(&self, player_id: &str, name: &str) -> Result<String, JwtError> {
        self.sign(Some(player_id), name, false)
    }

    /// Token carrying the admin capability
    pub fn sign_admin(&self, name: &str) -> Result<String, JwtError> {
        self.sign(None, name, true)
    }

    fn sign(&self, player_id: Option<&str>, name: &str, is_admin: bool) -> Result<String, JwtError> {
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = Claims {
            player_id: player_id.map(str::to_string),
            name: name.to_string(),
            is_admin,
            exp: now + self.expires_in_seconds,
            iat: now,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::Sign(e.to_string()))
    }

    /// Verify and decode a JWT token
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidToken => JwtError::Invalid,
                _ => JwtError::Verify(e.to_string()),
            })
    }
}

/// JWT error types
#[derive(Debug, thiserror::Error)]
pub enum JwtError {
    #[error("Failed to sign token: {0}")]
    Sign(String),
    #[error("Token has expired")]
    Expired,
    #[error("Invalid token")]
    Invalid,
    #[error("Failed to verify token: {0}")]
    Verify(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_token_has_no_admin_capability() {
        let service = JwtService::new("test-secret");
        let token = service.sign_player("p1", "Al").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.player_id.as_deref(), Some("p1"));
        assert_eq!(claims.name, "Al");
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_admin_token() {
        let service = JwtService::new("test-secret");
        let claims = service.verify(&service.sign_admin("Boss").unwrap()).unwrap();
        assert!(claims.is_admin);
        assert!(claims.player_id.is_none());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let token = JwtService::new("one").sign_admin("Boss").unwrap();
        assert!(JwtService::new("two").verify(&token).is_err());
    }
}
