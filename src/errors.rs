// src/errors.rs
use thiserror::Error;

pub type SlugResult<T> = Result<T, SlugError>;

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("invalid slug options: {0}")]
    Configuration(String),
    #[error("exhausted {limit} suffix probes for base slug `{base}`")]
    SuffixesExhausted { base: String, limit: u64 },
}

impl SlugError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
