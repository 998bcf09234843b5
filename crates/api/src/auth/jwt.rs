//! Session-token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying the user's id, email, and role
//! name, with a fixed 8-hour expiry. Protected routes present them as
//! `Authorization: Bearer <token>`.

use almacen_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Fixed session lifetime.
const TOKEN_EXPIRY_HOURS: i64 = 8;

/// Development fallback used when `JWT_SECRET` is unset. Logged loudly.
const DEFAULT_SECRET: &str = "default-jwt-secret-change-in-production";

/// Claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's internal database id.
    pub id: DbId,
    pub email: String,
    /// The user's role name (e.g. `"Administrador"`).
    pub rol: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
}

impl JwtConfig {
    /// Load the signing secret from `JWT_SECRET`.
    ///
    /// Falls back to a development default with a warning, so a fresh
    /// checkout can log in without extra setup. Production deployments must
    /// set the variable.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(s) if !s.is_empty() => s,
            _ => {
                tracing::warn!(
                    "JWT_SECRET no configurado; usando el secreto por defecto. \
                     Configure JWT_SECRET en producción."
                );
                DEFAULT_SECRET.to_string()
            }
        };
        Self { secret }
    }
}

/// Generate a session token for the given user.
pub fn generate_token(
    id: DbId,
    email: &str,
    rol: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        id,
        email: email.to_string(),
        rol: rol.to_string(),
        iat: now,
        exp: now + TOKEN_EXPIRY_HOURS * 3600,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::EncodingKey;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
        }
    }

    #[test]
    fn generate_and_validate_round_trip() {
        let config = test_config();
        let token = generate_token(42, "ana@test.com", "Administrador", &config)
            .expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.email, "ana@test.com");
        assert_eq!(claims.rol, "Administrador");
        // Fixed 8-hour lifetime.
        assert_eq!(claims.exp - claims.iat, 8 * 3600);
    }

    #[test]
    fn expired_token_fails() {
        let config = test_config();

        // Manually create an already-expired token, well past the default
        // 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            id: 1,
            email: "x@test.com".to_string(),
            rol: "Operador".to_string(),
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(
            validate_token(&token, &config).is_err(),
            "expired token must fail validation"
        );
    }

    #[test]
    fn different_secret_fails() {
        let config_a = JwtConfig {
            secret: "secret-alpha".to_string(),
        };
        let config_b = JwtConfig {
            secret: "secret-bravo".to_string(),
        };

        let token = generate_token(1, "x@test.com", "Operador", &config_a)
            .expect("token generation should succeed");

        assert!(
            validate_token(&token, &config_b).is_err(),
            "token signed with a different secret must fail"
        );
    }
}
