use distr_core::errors::DistrError;
use distr_core::Distribution;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::serde::to_canonical_json_bytes;

/// Computes a stable SHA256 hash for the provided serializable value.
pub fn stable_hash_string<T: Serialize>(value: &T) -> Result<String, DistrError> {
    let bytes = to_canonical_json_bytes(value)?;
    let digest = Sha256::digest(&bytes);
    Ok(format!("{:x}", digest))
}

/// Content hash of a distribution (name, configuration, shape and every bin).
pub fn fingerprint(distr: &Distribution) -> Result<String, DistrError> {
    stable_hash_string(distr)
}
