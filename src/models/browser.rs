//! Filter and selection state types for the collection point browser.

use std::fmt;

use super::{Facility, FacilityId, WasteType};

/// Form value of the "no filter" option.
pub const ALL_FILTER_VALUE: &str = "all";

/// Active category filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum WasteFilter {
    /// No constraint (default)
    #[default]
    All,
    /// Only points accepting this waste type
    Type(WasteType),
    /// A value outside the waste type domain; matches nothing
    Unrecognized(String),
}

impl WasteFilter {
    /// Parse a dropdown value. Never fails: unknown values are kept as
    /// [`WasteFilter::Unrecognized`] so they project to an empty list.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_FILTER_VALUE {
            return Self::All;
        }
        match value.parse::<WasteType>() {
            Ok(waste_type) => Self::Type(waste_type),
            Err(_) => Self::Unrecognized(value.to_string()),
        }
    }

    /// Dropdown value for this filter.
    pub fn as_value(&self) -> &str {
        match self {
            Self::All => ALL_FILTER_VALUE,
            Self::Type(waste_type) => waste_type.as_str(),
            Self::Unrecognized(value) => value,
        }
    }

    /// Whether a facility passes this filter.
    pub fn matches(&self, facility: &Facility) -> bool {
        match self {
            Self::All => true,
            Self::Type(waste_type) => facility.accepts(*waste_type),
            Self::Unrecognized(_) => false,
        }
    }
}

impl From<WasteType> for WasteFilter {
    fn from(waste_type: WasteType) -> Self {
        Self::Type(waste_type)
    }
}

impl fmt::Display for WasteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

/// Currently selected collection point, held by identifier.
///
/// Holding the id instead of a copy lets a refreshed facility list be
/// checked for stale selections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    None,
    Facility(FacilityId),
}

impl Selection {
    pub fn id(&self) -> Option<&FacilityId> {
        match self {
            Self::None => None,
            Self::Facility(id) => Some(id),
        }
    }

    /// Identifier comparison against a facility record.
    pub fn is(&self, facility: &Facility) -> bool {
        self.id() == Some(&facility.id)
    }
}
