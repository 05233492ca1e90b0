//! Upload request signing.
//!
//! Parameters are sorted by name, joined as `k=v&k=v`, the API secret is
//! appended, and the digest is hex encoded. Empty values are left out.

use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

use crate::config::SignatureAlgorithm;

/// Builds the canonical string that gets signed.
pub fn string_to_sign(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

/// Signs `params` with the API secret.
pub fn sign(
    params: &BTreeMap<String, String>,
    api_secret: &str,
    algorithm: SignatureAlgorithm,
) -> String {
    let payload = format!("{}{}", string_to_sign(params), api_secret);
    match algorithm {
        SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(payload.as_bytes())),
    }
}
