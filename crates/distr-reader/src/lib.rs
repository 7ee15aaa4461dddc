#![deny(missing_docs)]
#![doc = "Reads the distribution records embedded in simulation output files, and writes them back."]

use std::fs;
use std::path::Path;

use distr_core::errors::{DistrError, ErrorInfo};
use distr_core::Distribution;
use tracing::info;

/// Reader configuration and record markers.
pub mod config;
/// Record decoding.
pub mod decode;
/// Stable content hashes.
pub mod hash;
/// Canonical JSON and YAML helpers.
pub mod serde;
/// Record splitting.
pub mod split;
/// Text grammar writer.
pub mod write;

pub use config::{load_config, Markers, ReaderConfig, DISTR_BEGIN, DISTR_END};
pub use decode::decode_record;
pub use hash::{fingerprint, stable_hash_string};
pub use split::split_records;
pub use write::{format_distributions, write_distributions, write_file};

/// Reads every distribution in the file at `path` using the default markers.
pub fn read(path: impl AsRef<Path>) -> Result<Vec<Distribution>, DistrError> {
    read_with(path, &ReaderConfig::default())
}

/// Reads every distribution in the file at `path`.
///
/// The file is read completely and closed before any record is decoded. The
/// first malformed record fails the whole call.
pub fn read_with(
    path: impl AsRef<Path>,
    config: &ReaderConfig,
) -> Result<Vec<Distribution>, DistrError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|err| {
        DistrError::FileAccess(
            ErrorInfo::new("file_read", err.to_string())
                .with_context("path", path.display())
                .with_context("kind", format!("{:?}", err.kind())),
        )
    })?;
    let distrs = read_str(&text, config)?;
    info!(path = %path.display(), distributions = distrs.len(), "read distribution file");
    Ok(distrs)
}

/// Decodes every distribution contained in `text`.
pub fn read_str(text: &str, config: &ReaderConfig) -> Result<Vec<Distribution>, DistrError> {
    split_records(text.lines(), &config.markers)
        .iter()
        .enumerate()
        .map(|(record, lines)| decode_record(record, lines))
        .collect()
}
