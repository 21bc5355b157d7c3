//! Claims carried by locally minted analyst tokens.

use serde::{Deserialize, Serialize};

/// Fixed principal for the local token.
pub const SUBJECT: &str = "analyst";

/// Comma-joined authority names. The viewer splits this on commas; it is a
/// single string on the wire, not a list.
pub const AUTHORITIES: &str = "ROLE_KYC_ANALYST,MANAGE_CASES";

/// Token lifetime in seconds (1 hour).
pub const TOKEN_TTL_SECS: i64 = 3600;

/// Claims included in locally minted access tokens. Key names match what the
/// viewer's security filter expects.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccessClaims {
    /// Principal identifier
    pub sub: String,
    /// Comma-separated authorities
    pub auth: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

impl AccessClaims {
    /// Claims for the fixed analyst principal, valid for one hour from `iat`.
    pub fn analyst(iat: i64) -> Self {
        Self {
            sub: SUBJECT.to_string(),
            auth: AUTHORITIES.to_string(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        }
    }
}
