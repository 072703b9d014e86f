//! Per-address access list entries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How requests from an address are treated
///
/// Stored and exchanged as its numeric code: `-1`, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum IpStatus {
    /// No entry; the request follows the normal procedure
    None,
    /// Allowed without further checks
    Trusted,
    /// Rejected with `403 Forbidden`
    Blocked,
}

impl IpStatus {
    /// Numeric code used on the wire and in the store
    pub fn code(self) -> i8 {
        match self {
            IpStatus::None => -1,
            IpStatus::Trusted => 0,
            IpStatus::Blocked => 1,
        }
    }

    /// Lenient decoding for stored values; unknown codes mean no entry
    pub fn from_code(code: i8) -> Self {
        Self::try_from(code).unwrap_or(IpStatus::None)
    }

    pub fn is_blocked(self) -> bool {
        self == IpStatus::Blocked
    }
}

impl TryFrom<i8> for IpStatus {
    type Error = UnknownIpStatus;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        match code {
            -1 => Ok(IpStatus::None),
            0 => Ok(IpStatus::Trusted),
            1 => Ok(IpStatus::Blocked),
            other => Err(UnknownIpStatus(other)),
        }
    }
}

impl From<IpStatus> for i8 {
    fn from(status: IpStatus) -> Self {
        status.code()
    }
}

/// A status code outside `-1..=1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownIpStatus(pub i8);

impl fmt::Display for UnknownIpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown ip status {}, expected -1, 0 or 1", self.0)
    }
}

/// One address and its status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpStatusEntry {
    pub ip: String,
    pub status: IpStatus,
}

impl IpStatusEntry {
    pub fn new(ip: impl Into<String>, status: IpStatus) -> Self {
        Self {
            ip: ip.into(),
            status,
        }
    }
}
