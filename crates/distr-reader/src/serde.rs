use std::collections::BTreeMap;
use std::iter::FromIterator;

use distr_core::errors::{DistrError, ErrorInfo};
use distr_core::Distribution;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> DistrError {
    DistrError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, DistrError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON bytes.
pub fn from_json_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, DistrError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json_deserialize", err))
}

/// Deserializes a YAML payload into the requested type.
pub fn from_yaml_slice<T: DeserializeOwned>(data: &[u8]) -> Result<T, DistrError> {
    serde_yaml::from_slice(data).map_err(|err| serde_error("yaml_deserialize", err))
}

/// Serializes distributions into canonical JSON.
///
/// JSON has no representation for NaN or infinities, so a distribution with
/// a non-finite center or value is rejected instead of exported as `null`.
pub fn distributions_to_json(distrs: &[Distribution]) -> Result<Vec<u8>, DistrError> {
    for distr in distrs {
        for (idx, bin) in distr.bins().iter().enumerate() {
            let finite = bin.value().is_finite() && bin.centers().iter().all(|c| c.is_finite());
            if !finite {
                return Err(DistrError::Serde(
                    ErrorInfo::new("non_finite", "JSON cannot represent NaN or infinite bins")
                        .with_context("name", distr.name())
                        .with_context("pol_config", distr.pol_config())
                        .with_context("bin", idx),
                ));
            }
        }
    }
    to_canonical_json_bytes(&distrs)
}

/// Reads distributions back from JSON written by [`distributions_to_json`].
pub fn distributions_from_json(data: &[u8]) -> Result<Vec<Distribution>, DistrError> {
    from_json_slice(data)
}
