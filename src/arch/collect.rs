use serde::Serialize;

use super::provider::{HostInfoProvider, OsInfoProvider, QueryUnavailable};

/// Architecture facts collected from a host.
///
/// Built fresh on every collection and immutable afterwards. Both fields are
/// whatever the platform reported, including its placeholder for an unknown
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureInfo {
    #[serde(rename = "architecture")]
    bitness: String,
    machine: String,
}

impl ArchitectureInfo {
    pub fn new(bitness: String, machine: String) -> Self {
        ArchitectureInfo { bitness, machine }
    }

    /// Pointer width descriptor of the process, e.g. `"64bit"`.
    pub fn bitness(&self) -> &str {
        &self.bitness
    }

    /// Instruction-set family label, e.g. `"x86_64"`.
    pub fn machine(&self) -> &str {
        &self.machine
    }
}

/// Collects architecture facts from an [`OsInfoProvider`].
pub struct FactCollector<P> {
    provider: P,
}

impl<P: OsInfoProvider> FactCollector<P> {
    pub fn new(provider: P) -> Self {
        FactCollector { provider }
    }

    /// Queries both facts and returns a freshly built record.
    ///
    /// Unknown values are reported as-is; only a failed platform query
    /// surfaces as an error.
    pub fn collect(&self) -> Result<ArchitectureInfo, QueryUnavailable> {
        let bitness = self.provider.query_bitness()?;
        let machine = self.provider.query_machine()?;
        Ok(ArchitectureInfo::new(bitness, machine))
    }
}

/// Collects the architecture facts of the current host.
pub fn host() -> Result<ArchitectureInfo, QueryUnavailable> {
    FactCollector::new(HostInfoProvider).collect()
}
