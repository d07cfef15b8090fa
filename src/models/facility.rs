//! Collection point data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Waste categories a collection point can accept.
///
/// This is the closed tag domain used both on facilities and in the
/// filter dropdown. Anything outside it is an unrecognized filter value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WasteType {
    Plastic,
    Paper,
    Glass,
    Metal,
    Electronics,
    Batteries,
    Organic,
}

impl WasteType {
    /// Every waste type, in dropdown order.
    pub const ALL: [WasteType; 7] = [
        WasteType::Plastic,
        WasteType::Paper,
        WasteType::Glass,
        WasteType::Metal,
        WasteType::Electronics,
        WasteType::Batteries,
        WasteType::Organic,
    ];

    /// Display and form-value name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plastic => "Plastic",
            Self::Paper => "Paper",
            Self::Glass => "Glass",
            Self::Metal => "Metal",
            Self::Electronics => "Electronics",
            Self::Batteries => "Batteries",
            Self::Organic => "Organic",
        }
    }
}

impl fmt::Display for WasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`WasteType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWasteType(pub String);

impl fmt::Display for UnknownWasteType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown waste type '{}'", self.0)
    }
}

impl std::error::Error for UnknownWasteType {}

impl FromStr for WasteType {
    type Err = UnknownWasteType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownWasteType(s.to_string()))
    }
}

/// Stable facility identifier.
///
/// Selection and list keying compare facilities through this value only,
/// never through the rest of the record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(String);

impl FacilityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A waste collection point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub address: String,
    pub coordinates: Coordinate,
    pub operating_hours: String,
    /// Accepted categories, in badge display order. Never empty.
    pub waste_types: Vec<WasteType>,
    /// Pre-formatted distance label (e.g. "0.8 km"). Display only.
    pub distance: String,
}

impl Facility {
    /// Whether this point accepts the given waste type.
    pub fn accepts(&self, waste_type: WasteType) -> bool {
        self.waste_types.contains(&waste_type)
    }
}
