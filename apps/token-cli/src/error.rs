use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Clock error: {detail}")]
    Clock { detail: String },
    #[error("Signing error: {detail}")]
    Signing { detail: String },
}

impl TokenError {
    pub fn clock(detail: String) -> Self {
        Self::Clock { detail }
    }

    pub fn signing(detail: String) -> Self {
        Self::Signing { detail }
    }
}
