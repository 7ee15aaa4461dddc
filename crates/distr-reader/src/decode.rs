use std::str::FromStr;

use distr_core::errors::{DistrError, ErrorInfo};
use distr_core::{Bin, Distribution};
use tracing::debug;

/// Distribution name header key.
pub const KEY_NAME: &str = "Name:";
/// Polarisation configuration header key.
pub const KEY_POL_CONFIG: &str = "PolConfig:";
/// Declared bin count header key.
pub const KEY_N_BINS: &str = "NBins:";
/// Dimensionality header key.
pub const KEY_DIM: &str = "Dim:";
/// First token of the line opening the bin table.
pub const KEY_TABLE: &str = "Bin-ID";

/// Largest accepted `Dim:` value.
pub const MAX_DIM: usize = 1024;

/// Position of a line inside the input, used for error context.
#[derive(Debug, Clone, Copy)]
struct Location {
    record: usize,
    line: usize,
}

impl Location {
    fn error(self, code: &str, message: &str) -> ErrorInfo {
        ErrorInfo::new(code, message)
            .with_context("record", self.record)
            .with_context("line", self.line)
    }
}

/// Header fields collected while scanning a record.
#[derive(Debug, Clone, Default)]
struct DistributionBuilder {
    name: String,
    pol_config: String,
    n_bins: Option<usize>,
    dim: Option<usize>,
}

impl DistributionBuilder {
    fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    fn pol_config(&mut self, pol_config: impl Into<String>) -> &mut Self {
        self.pol_config = pol_config.into();
        self
    }

    fn n_bins(&mut self, n_bins: usize) -> &mut Self {
        self.n_bins = Some(n_bins);
        self
    }

    fn dim(&mut self, dim: usize) -> &mut Self {
        self.dim = Some(dim);
        self
    }

    /// Decodes exactly `n_bins` rows from `rows` and finalises the
    /// distribution. Rows past the declared count are not looked at.
    fn finish(self, rows: &[String], table_at: Location) -> Result<Distribution, DistrError> {
        let n_bins = self.n_bins.ok_or_else(|| {
            DistrError::MalformedRecord(
                table_at
                    .error("missing_n_bins", "NBins must be declared before the bin table")
                    .with_hint("expected a line `NBins: <int>`"),
            )
        })?;
        let dim = self.dim.ok_or_else(|| {
            DistrError::MalformedRecord(
                table_at
                    .error("missing_dim", "Dim must be declared before the bin table")
                    .with_hint("expected a line `Dim: <int>`"),
            )
        })?;
        if dim == 0 {
            return Err(DistrError::MalformedRecord(
                table_at.error("dim_zero", "distribution must have at least one axis"),
            ));
        }
        if dim > MAX_DIM {
            return Err(DistrError::MalformedRecord(
                table_at
                    .error("dim_too_large", "declared Dim exceeds the supported axis count")
                    .with_context("dim", dim)
                    .with_context("max", MAX_DIM),
            ));
        }
        if rows.len() < n_bins {
            return Err(DistrError::MalformedRecord(
                table_at
                    .error("table_truncated", "record ends before all declared bins")
                    .with_context("declared", n_bins)
                    .with_context("available", rows.len()),
            ));
        }

        let bins = rows[..n_bins]
            .iter()
            .enumerate()
            .map(|(offset, row)| {
                let at = Location {
                    record: table_at.record,
                    line: table_at.line + 1 + offset,
                };
                parse_row(row, dim, at)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Distribution::new(self.name, self.pol_config, dim, n_bins, bins)
    }
}

/// Decodes one record (already trimmed lines between the markers).
///
/// `record` is the zero based index of the record in the file and only
/// feeds error context and logs.
pub fn decode_record(record: usize, lines: &[String]) -> Result<Distribution, DistrError> {
    let mut builder = DistributionBuilder::default();

    for (line, text) in lines.iter().enumerate() {
        let at = Location { record, line };
        let mut tokens = text.split_whitespace();
        let Some(key) = tokens.next() else {
            continue;
        };
        match key {
            KEY_NAME => {
                builder.name(header_value(key, tokens.next(), at)?);
            }
            KEY_POL_CONFIG => {
                builder.pol_config(header_value(key, tokens.next(), at)?);
            }
            KEY_N_BINS => {
                builder.n_bins(parse_header_int(key, tokens.next(), at)?);
            }
            KEY_DIM => {
                builder.dim(parse_header_int(key, tokens.next(), at)?);
            }
            KEY_TABLE => {
                let distr = builder.finish(&lines[line + 1..], at)?;
                debug!(
                    record,
                    name = distr.name(),
                    pol_config = distr.pol_config(),
                    dim = distr.dim(),
                    n_bins = distr.n_bins(),
                    "decoded distribution"
                );
                return Ok(distr);
            }
            _ => {}
        }
    }

    Err(DistrError::MalformedRecord(
        ErrorInfo::new("missing_table", "record has no `Bin-ID` table header")
            .with_context("record", record),
    ))
}

fn header_value<'a>(key: &str, value: Option<&'a str>, at: Location) -> Result<&'a str, DistrError> {
    value.ok_or_else(|| {
        DistrError::MalformedRecord(
            at.error("missing_value", "header key has no value")
                .with_context("key", key),
        )
    })
}

fn parse_header_int(key: &str, value: Option<&str>, at: Location) -> Result<usize, DistrError> {
    let token = header_value(key, value, at)?;
    usize::from_str(token).map_err(|err| {
        DistrError::MalformedRecord(
            at.error("invalid_integer", "header value is not a non-negative integer")
                .with_context("key", key)
                .with_context("token", token)
                .with_context("reason", err),
        )
    })
}

fn parse_row(row: &str, dim: usize, at: Location) -> Result<Bin, DistrError> {
    let tokens: Vec<&str> = row.split_whitespace().collect();
    let width = dim.saturating_add(2);
    if tokens.len() < width {
        return Err(DistrError::MalformedRecord(
            at.error("row_too_short", "table row has too few columns")
                .with_context("expected", width)
                .with_context("found", tokens.len()),
        ));
    }
    let centers = tokens[1..=dim]
        .iter()
        .map(|token| parse_float(token, at))
        .collect::<Result<Vec<_>, _>>()?;
    let value = parse_float(tokens[dim + 1], at)?;
    Ok(Bin::new(centers, value))
}

fn parse_float(token: &str, at: Location) -> Result<f64, DistrError> {
    f64::from_str(token).map_err(|err| {
        DistrError::MalformedRecord(
            at.error("invalid_float", "table entry is not a floating-point number")
                .with_context("token", token)
                .with_context("reason", err),
        )
    })
}
