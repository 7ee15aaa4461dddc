use std::fs;
use std::io::Write;
use std::path::Path;

use distr_core::errors::{DistrError, ErrorInfo};
use distr_core::Distribution;
use tracing::info;

use crate::config::Markers;
use crate::decode::{KEY_DIM, KEY_NAME, KEY_N_BINS, KEY_POL_CONFIG, KEY_TABLE};

fn check_token(field: &str, distr: &Distribution, token: &str) -> Result<(), DistrError> {
    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(DistrError::Serde(
            ErrorInfo::new("invalid_token", "header value must be a single non-empty token")
                .with_context("field", field)
                .with_context("name", distr.name())
                .with_context("value", format!("{token:?}")),
        ));
    }
    Ok(())
}

fn render(distr: &Distribution, markers: &Markers, out: &mut String) -> Result<(), DistrError> {
    check_token("name", distr, distr.name())?;
    check_token("pol_config", distr, distr.pol_config())?;

    out.push_str(&markers.begin);
    out.push('\n');
    out.push_str(&format!("{KEY_NAME} {}\n", distr.name()));
    out.push_str(&format!("{KEY_POL_CONFIG} {}\n", distr.pol_config()));
    out.push_str(&format!("{KEY_N_BINS} {}\n", distr.n_bins()));
    out.push_str(&format!("{KEY_DIM} {}\n", distr.dim()));

    out.push_str(KEY_TABLE);
    out.push(' ');
    for axis in 0..distr.dim() {
        out.push_str(&format!("d{axis} "));
    }
    out.push_str(" val\n");

    for (idx, bin) in distr.bins().iter().enumerate() {
        out.push_str(&format!("B{idx} "));
        for center in bin.centers() {
            out.push_str(&format!("{center} "));
        }
        out.push_str(&format!("{}\n", bin.value()));
    }

    out.push_str(&markers.end);
    out.push_str("\n\n");
    Ok(())
}

/// Renders distributions in the record grammar understood by
/// [`crate::read_str`]. Floats use the shortest representation that parses
/// back to the same value.
pub fn format_distributions(
    distrs: &[Distribution],
    markers: &Markers,
) -> Result<String, DistrError> {
    let mut out = String::new();
    for distr in distrs {
        render(distr, markers, &mut out)?;
    }
    Ok(out)
}

/// Writes distributions to `writer` in the record grammar.
pub fn write_distributions<W: Write>(
    mut writer: W,
    distrs: &[Distribution],
    markers: &Markers,
) -> Result<(), DistrError> {
    let text = format_distributions(distrs, markers)?;
    writer
        .write_all(text.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|err| DistrError::FileAccess(ErrorInfo::new("write", err.to_string())))
}

/// Writes distributions to a file, replacing any previous content.
pub fn write_file(path: &Path, distrs: &[Distribution], markers: &Markers) -> Result<(), DistrError> {
    let text = format_distributions(distrs, markers)?;
    fs::write(path, text).map_err(|err| {
        DistrError::FileAccess(
            ErrorInfo::new("write", err.to_string()).with_context("path", path.display()),
        )
    })?;
    info!(path = %path.display(), distributions = distrs.len(), "wrote distribution file");
    Ok(())
}
