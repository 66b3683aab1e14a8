//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (positive identifiers, known sort
//! columns) so that once a value reaches the repository it can be treated as
//! trusted.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Sort parameter does not name a sortable client column.
    #[error("unknown sort field: {0}")]
    UnknownSortField(String),
    /// Page size must allow at least one element.
    #[error("page size must be greater than zero")]
    EmptyPageSize,
    /// Page number or size exceeds what the store can address.
    #[error("page or page size is too large")]
    PageOutOfRange,
}

/// Unique identifier for a client.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ClientId(i32);

impl ClientId {
    /// Creates a new identifier ensuring it is greater than zero.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NonPositiveId)
        }
    }

    /// Returns the raw `i32` backing this identifier.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Client column a page may be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    FirstName,
    LastName,
    Email,
    CreatedAt,
}

impl SortField {
    /// Property name as exposed in the JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::FirstName => "nombre",
            SortField::LastName => "apellido",
            SortField::Email => "email",
            SortField::CreatedAt => "createdAt",
        }
    }
}

impl FromStr for SortField {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortField::Id),
            "nombre" => Ok(SortField::FirstName),
            "apellido" => Ok(SortField::LastName),
            "email" => Ok(SortField::Email),
            "createdAt" => Ok(SortField::CreatedAt),
            other => Err(TypeConstraintError::UnknownSortField(other.to_string())),
        }
    }
}

impl Display for SortField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordering applied to the sort field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Only the exact string `asc` selects ascending order.
    pub fn from_param(value: &str) -> Self {
        if value == "asc" {
            SortDirection::Asc
        } else {
            SortDirection::Desc
        }
    }
}
