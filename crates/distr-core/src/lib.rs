#![deny(missing_docs)]
#![doc = "Core data model for binned distributions: bins, distributions, projections and integrals."]

mod distribution;
pub mod errors;
pub mod summary;

pub use distribution::{Bin, Distribution, Projection, DEFAULT_MIN_VALUE};
pub use errors::{DistrError, ErrorInfo};
pub use summary::{select, DistributionSummary};
