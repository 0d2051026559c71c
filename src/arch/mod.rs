mod collect;
mod provider;
mod report;

use std::fmt;
use std::io;

pub use collect::{host, ArchitectureInfo, FactCollector};
pub use provider::{HostInfoProvider, OsInfoProvider, QueryUnavailable};
pub use report::Reporter;

/// Failure of the collect-and-report entry point.
#[derive(Debug)]
pub enum RunError {
    /// The platform metadata query failed.
    Query(QueryUnavailable),
    /// Writing the report to standard output failed.
    Io(io::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Query(err) => err.fmt(f),
            RunError::Io(err) => write!(f, "failed to write report: {}", err),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RunError::Query(err) => Some(err),
            RunError::Io(err) => Some(err),
        }
    }
}

impl From<QueryUnavailable> for RunError {
    fn from(err: QueryUnavailable) -> Self {
        RunError::Query(err)
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        RunError::Io(err)
    }
}

/// Collects the host facts and writes the labeled report to standard output.
pub fn run() -> Result<(), RunError> {
    let info = host()?;
    Reporter::stdout().report(&info)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #[test]
    fn run_reports_host_facts() {
        super::run().expect("run() should succeed on the test host");
    }
}
