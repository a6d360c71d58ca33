//! CLI command implementations.

mod check;
mod coverage;
mod resolve;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use resolve::{run_resolve, ResolveArgs};
