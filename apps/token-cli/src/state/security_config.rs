use jsonwebtoken::Algorithm;

/// Shared secret from the viewer's application.properties. Local development
/// only; HS512 needs at least 64 bytes of key material.
const LOCAL_JWT_SECRET: &[u8] = b"ThisIsA VeryLongAndComplexSecretKeyThatShouldBeEnoughForHS512AlgorithmMakeSureItIsAtLeast64BytesLongToSatisfyTheSecurityRequirement1234567890!_extra_padding_to_be_safe";

/// Configuration for JWT security settings
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS512)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS512,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(LOCAL_JWT_SECRET)
    }
}
