use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::errors::{CryptoError, Result};

type HmacSha1 = Hmac<Sha1>;

/// Prefix of the `X-Hub-Signature` header value.
pub const SIGNATURE_PREFIX: &str = "sha1=";

/// HMAC-SHA1 webhook signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Parse a `sha1=<hex>` header value.
    ///
    /// The prefix is matched case-insensitively, hex digits may be upper or lower case.
    pub fn from_header(header: &str) -> Result<Self> {
        let prefix = header.get(..SIGNATURE_PREFIX.len());
        match prefix {
            Some(prefix) if prefix.eq_ignore_ascii_case(SIGNATURE_PREFIX) => (),
            _ => {
                return Err(CryptoError::UnsupportedAlgorithm {
                    header: header.to_string(),
                })
            }
        }

        let digest = &header[SIGNATURE_PREFIX.len()..];
        hex::decode(digest)
            .map(Self)
            .map_err(|_| CryptoError::InvalidSignatureFormat {
                sig: digest.to_string(),
            })
    }

    /// Compute the signature of a body.
    pub fn compute(body: &[u8], secret: &str) -> Result<Self> {
        let mut hmac = new_hmac(secret)?;
        hmac.update(body);
        Ok(Self(hmac.finalize().into_bytes().to_vec()))
    }

    /// Check if the signature matches the body.
    ///
    /// Comparison is done in constant time.
    pub fn is_valid(&self, body: &[u8], secret: &str) -> Result<bool> {
        let mut hmac = new_hmac(secret)?;
        hmac.update(body);
        Ok(hmac.verify_slice(&self.0).is_ok())
    }

    /// Format as a header value.
    pub fn to_header(&self) -> String {
        format!("{}{}", SIGNATURE_PREFIX, hex::encode(&self.0))
    }
}

fn new_hmac(secret: &str) -> Result<HmacSha1> {
    HmacSha1::new_from_slice(secret.as_bytes()).map_err(|_| CryptoError::InvalidSecretKey)
}
