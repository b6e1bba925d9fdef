//! Location record and the sort vocabulary of the table view.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One location entity as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier, assigned by the remote store on create
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub province: String,
}

impl Location {
    /// Value of the given sort column
    pub fn field(&self, key: SortKey) -> &str {
        match key {
            SortKey::Name => &self.name,
            SortKey::City => &self.city,
            SortKey::Country => &self.country,
            SortKey::Province => &self.province,
        }
    }

    /// Substring match against every field, including the id.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        [
            self.id.as_str(),
            self.name.as_str(),
            self.city.as_str(),
            self.country.as_str(),
            self.province.as_str(),
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
    }
}

/// A location without an id, used as create/update request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationDraft {
    pub name: String,
    pub city: String,
    pub country: String,
    pub province: String,
}

impl LocationDraft {
    pub fn new(
        name: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        province: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            city: city.into(),
            country: country.into(),
            province: province.into(),
        }
    }

    /// All four fields are required; fails on the first empty one.
    pub fn validate(&self) -> Result<(), Error> {
        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("country", &self.country),
            ("province", &self.province),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Validation { field });
            }
        }
        Ok(())
    }
}

impl From<Location> for LocationDraft {
    fn from(location: Location) -> Self {
        Self {
            name: location.name,
            city: location.city,
            country: location.country,
            province: location.province,
        }
    }
}

/// Sortable columns of the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    City,
    Country,
    Province,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::City => "city",
            SortKey::Country => "country",
            SortKey::Province => "province",
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "city" => Ok(SortKey::City),
            "country" => Ok(SortKey::Country),
            "province" => Ok(SortKey::Province),
            other => Err(Error::InvalidSortKey { key: other.to_string() }),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}
