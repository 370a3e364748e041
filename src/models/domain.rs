use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender values a profile search may be narrowed to
pub const GENDERS: [&str; 3] = ["Male", "Female", "Others"];

/// Relationship status values a profile search may be narrowed to
pub const RELATIONSHIP_STATUSES: [&str; 4] = ["Single", "Committed", "Married", "Divorced"];

/// One of the five filter fields of the search form
///
/// Variants are declared in query-string order, so iterating `FilterField::ALL`
/// (or sorting) yields hometown, work, education, gender, relationship_status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterField {
    Hometown,
    Work,
    Education,
    Gender,
    RelationshipStatus,
}

impl FilterField {
    pub const ALL: [FilterField; 5] = [
        FilterField::Hometown,
        FilterField::Work,
        FilterField::Education,
        FilterField::Gender,
        FilterField::RelationshipStatus,
    ];

    /// Query parameter (and form field) name
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Hometown => "hometown",
            FilterField::Work => "work",
            FilterField::Education => "education",
            FilterField::Gender => "gender",
            FilterField::RelationshipStatus => "relationship_status",
        }
    }

    pub fn from_param(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values currently entered in the search filter form
///
/// `None` and `Some("")` both mean "no filter" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    pub hometown: Option<String>,
    #[serde(default)]
    pub work: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, alias = "relationshipStatus")]
    pub relationship_status: Option<String>,
}

impl FilterSelection {
    /// Non-empty value of a field, if any
    pub fn get(&self, field: FilterField) -> Option<&str> {
        let value = match field {
            FilterField::Hometown => &self.hometown,
            FilterField::Work => &self.work,
            FilterField::Education => &self.education,
            FilterField::Gender => &self.gender,
            FilterField::RelationshipStatus => &self.relationship_status,
        };
        value.as_deref().filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, field: FilterField, value: Option<String>) {
        let slot = match field {
            FilterField::Hometown => &mut self.hometown,
            FilterField::Work => &mut self.work,
            FilterField::Education => &mut self.education,
            FilterField::Gender => &mut self.gender,
            FilterField::RelationshipStatus => &mut self.relationship_status,
        };
        *slot = value.filter(|v| !v.is_empty());
    }

    /// Non-empty fields in query-string order
    pub fn active_fields(&self) -> impl Iterator<Item = (FilterField, &str)> {
        FilterField::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.active_fields().next().is_none()
    }
}

/// Caller-supplied allow-lists for the configurable filter fields
///
/// Gender and relationship status use the fixed `GENDERS` and
/// `RELATIONSHIP_STATUSES` sets and cannot be overridden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(rename = "hometownFilters", alias = "hometown_filters", default)]
    pub hometown_filters: Vec<String>,
    #[serde(rename = "workFilters", alias = "work_filters", default)]
    pub work_filters: Vec<String>,
    #[serde(rename = "educationFilters", alias = "education_filters", default)]
    pub education_filters: Vec<String>,
}

impl FilterOptions {
    pub fn new(
        hometown_filters: Vec<String>,
        work_filters: Vec<String>,
        education_filters: Vec<String>,
    ) -> Self {
        Self {
            hometown_filters,
            work_filters,
            education_filters,
        }
    }

    /// Allowed values for a field, in display order
    pub fn allowed(&self, field: FilterField) -> Vec<&str> {
        match field {
            FilterField::Hometown => self.hometown_filters.iter().map(String::as_str).collect(),
            FilterField::Work => self.work_filters.iter().map(String::as_str).collect(),
            FilterField::Education => self.education_filters.iter().map(String::as_str).collect(),
            FilterField::Gender => GENDERS.to_vec(),
            FilterField::RelationshipStatus => RELATIONSHIP_STATUSES.to_vec(),
        }
    }

    #[inline]
    pub fn is_allowed(&self, field: FilterField, value: &str) -> bool {
        match field {
            FilterField::Hometown => self.hometown_filters.iter().any(|v| v == value),
            FilterField::Work => self.work_filters.iter().any(|v| v == value),
            FilterField::Education => self.education_filters.iter().any(|v| v == value),
            FilterField::Gender => GENDERS.contains(&value),
            FilterField::RelationshipStatus => RELATIONSHIP_STATUSES.contains(&value),
        }
    }
}

/// What to put in the `search` parameter when the current location has none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingSearch {
    /// Emit `search=`
    #[default]
    Empty,
    /// Emit `search=null`, as older clients did
    LiteralNull,
}

impl MissingSearch {
    pub fn fallback(&self) -> &'static str {
        match self {
            MissingSearch::Empty => "",
            MissingSearch::LiteralNull => "null",
        }
    }
}
