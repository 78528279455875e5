//! Crypto errors.

use thiserror::Error;

/// Crypto error.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Unsupported signature algorithm in '{header}'")]
    UnsupportedAlgorithm { header: String },
    #[error("Invalid signature format {sig}")]
    InvalidSignatureFormat { sig: String },
    #[error("Invalid HMAC secret key")]
    InvalidSecretKey,
}

/// Result alias for `CryptoError`.
pub type Result<T, E = CryptoError> = ::core::result::Result<T, E>;
