//! Station code types.

use std::fmt;

use serde::{Serialize, Serializer};

/// Prefix shared by every national-rail stop point code.
pub const NATIONAL_RAIL_PREFIX: &str = "910";

/// Prefix shared by every urban-transit (Underground, DLR, ...) stop point code.
pub const URBAN_PREFIX: &str = "940";

/// Error returned when parsing a station code with no recognised network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code {code:?}: {reason}")]
pub struct InvalidStationCode {
    code: String,
    reason: &'static str,
}

impl InvalidStationCode {
    /// The rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }
}

/// The fare network a stop belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Network {
    /// Priced by the national-rail fare authority.
    NationalRail,
    /// Priced by the urban-transit fare authority.
    Urban,
}

impl Network {
    /// Identify the network from a code's prefix.
    pub fn from_code(code: &str) -> Option<Self> {
        if code.starts_with(NATIONAL_RAIL_PREFIX) {
            Some(Network::NationalRail)
        } else if code.starts_with(URBAN_PREFIX) {
            Some(Network::Urban)
        } else {
            None
        }
    }

    /// The code prefix for this network.
    pub fn prefix(self) -> &'static str {
        match self {
            Network::NationalRail => NATIONAL_RAIL_PREFIX,
            Network::Urban => URBAN_PREFIX,
        }
    }
}

/// A stop point code tagged with its fare network.
///
/// The network is determined once, at parse time, so downstream code
/// compares tags instead of re-checking string prefixes.
///
/// # Examples
///
/// ```
/// use fare_server::domain::{Network, StationCode};
///
/// let bond_street = StationCode::parse("940GZZLUBND").unwrap();
/// assert_eq!(bond_street.network(), Network::Urban);
///
/// let gatwick = StationCode::parse("910GGTWK").unwrap();
/// assert!(gatwick.is_national_rail());
///
/// // Bus stops and other networks are rejected
/// assert!(StationCode::parse("490000077E").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode {
    code: String,
    network: Network,
}

impl StationCode {
    /// Parse a station code, rejecting anything without a recognised prefix.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                code: String::new(),
                reason: "must not be empty",
            });
        }

        let network = Network::from_code(s).ok_or_else(|| InvalidStationCode {
            code: s.to_string(),
            reason: "must start with 910 (national rail) or 940 (urban)",
        })?;

        Ok(Self {
            code: s.to_string(),
            network,
        })
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the network this stop belongs to.
    pub fn network(&self) -> Network {
        self.network
    }

    pub fn is_urban(&self) -> bool {
        self.network == Network::Urban
    }

    pub fn is_national_rail(&self) -> bool {
        self.network == Network::NationalRail
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.code)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl Serialize for StationCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code)
    }
}
