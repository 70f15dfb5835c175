//! cppcheck XML report reading and writing.
//!
//! Input reports look like:
//!
//! ```text
//! <results version="2">
//!   <cppcheck version="2.13"/>
//!   <errors>
//!     <error id="misra-c2012-8.4" severity="style" msg="...">
//!       <location file="src/a.c" line="10" column="5"/>
//!     </error>
//!   </errors>
//! </results>
//! ```
//!
//! Kept `<error>` elements are written back out unchanged.

mod model;
mod parse;
mod write;

#[cfg(test)]
mod tests;

pub use model::{
    DEFAULT_RESULTS_VERSION, FilteredReport, Finding, Location, Report, UNKNOWN_SEVERITY,
};
pub use parse::parse_report;
pub use write::{render_report, write_report};

use crate::error::{FilterError, Result};
use std::path::Path;

/// Read and parse the report at `path`.
pub fn load_report(path: &Path) -> Result<Report> {
    let xml = std::fs::read_to_string(path).map_err(|e| FilterError::io(path, e))?;
    parse_report(&xml)
}
