use std::fs;
use std::path::Path;

use distr_core::errors::{DistrError, ErrorInfo};
use serde::{Deserialize, Serialize};

use crate::serde::from_yaml_slice;

/// Literal line opening a distribution record.
pub const DISTR_BEGIN: &str = "<=====DISTR-BEGIN=====>";
/// Literal line closing a distribution record.
pub const DISTR_END: &str = "<=====DISTR-END=======>";

fn config_error(code: &str, message: impl Into<String>) -> DistrError {
    DistrError::Config(ErrorInfo::new(code, message))
}

/// Marker lines delimiting records in the output file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    /// Line opening a record.
    #[serde(default = "Markers::default_begin")]
    pub begin: String,
    /// Line closing a record.
    #[serde(default = "Markers::default_end")]
    pub end: String,
}

impl Markers {
    fn default_begin() -> String {
        DISTR_BEGIN.to_string()
    }
    fn default_end() -> String {
        DISTR_END.to_string()
    }

    /// Checks that both markers can ever match a trimmed line and that they
    /// differ from each other.
    pub fn validate(&self) -> Result<(), DistrError> {
        for (field, marker) in [("begin", &self.begin), ("end", &self.end)] {
            if marker.is_empty() || marker.trim() != marker {
                return Err(DistrError::Config(
                    ErrorInfo::new("marker_untrimmed", "marker must be non-empty and trimmed")
                        .with_context("field", field)
                        .with_context("marker", format!("{marker:?}")),
                ));
            }
        }
        if self.begin == self.end {
            return Err(config_error(
                "marker_collision",
                "begin and end markers must differ",
            ));
        }
        Ok(())
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            begin: Self::default_begin(),
            end: Self::default_end(),
        }
    }
}

/// Reader configuration, loadable from YAML.
///
/// ```yaml
/// markers:
///   begin: "<=====DISTR-BEGIN=====>"
///   end: "<=====DISTR-END=======>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ReaderConfig {
    /// Record delimiters.
    #[serde(default)]
    pub markers: Markers,
}

impl ReaderConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), DistrError> {
        self.markers.validate()
    }
}

/// Loads and validates a YAML reader configuration.
pub fn load_config(path: &Path) -> Result<ReaderConfig, DistrError> {
    let bytes = fs::read(path).map_err(|err| {
        DistrError::Config(
            ErrorInfo::new("config_read", err.to_string())
                .with_context("path", path.display()),
        )
    })?;
    let config: ReaderConfig = from_yaml_slice(&bytes)
        .map_err(|err| DistrError::Config(err.info().clone().with_context("path", path.display())))?;
    config.validate()?;
    Ok(config)
}
