use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::auth::claims::AccessClaims;
use crate::state::security_config::SecurityConfig;
use crate::TokenError;

/// Mint an HS512 JWT for the fixed analyst principal with a 1-hour TTL.
pub fn mint_access_token(
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, TokenError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::clock("Failed to get current time".to_string()))?
        .as_secs() as i64;

    let claims = AccessClaims::analyst(iat);

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::signing(format!("Failed to encode JWT: {e}")))
}
