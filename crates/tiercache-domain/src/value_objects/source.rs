//! Read-resolution source

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a read was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheSource {
    /// In-process tier
    L1,
    /// Shared networked tier
    L2,
    /// Authoritative backing store
    #[serde(rename = "STORE")]
    Store,
}

impl CacheSource {
    /// Label used in logs and the `X-Cache-Source` header
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::L1 => "L1",
            Self::L2 => "L2",
            Self::Store => "STORE",
        }
    }
}

impl fmt::Display for CacheSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
