//! Core data types for civic-lib.
//!
//! The serde format is the on-disk format of the `civicIssues` entry, so
//! field names and enum spellings here are part of the storage layout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CivicError;

/// Issue identifier: the creation time in milliseconds, bumped to stay unique.
pub type IssueId = u64;

/// Issue lifecycle status.
///
/// Transitions only along the fixed cycle New → In Progress → Resolved → New.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    New,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl Status {
    pub const ALL: [Self; 3] = [Self::New, Self::InProgress, Self::Resolved];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "New",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
        }
    }

    /// The next status along the cycle.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::New => Self::InProgress,
            Self::InProgress => Self::Resolved,
            Self::Resolved => Self::New,
        }
    }

    /// Style class for the status badge: the label with whitespace removed.
    #[must_use]
    pub fn css_class(self) -> String {
        self.as_str().split_whitespace().collect()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Issue category (fixed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Pothole,
    Lighting,
    Garbage,
    Water,
    Traffic,
    Vandalism,
    Other,
}

impl Category {
    pub const ALL: [Self; 7] = [
        Self::Pothole,
        Self::Lighting,
        Self::Garbage,
        Self::Water,
        Self::Traffic,
        Self::Vandalism,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::Lighting => "Lighting",
            Self::Garbage => "Garbage",
            Self::Water => "Water",
            Self::Traffic => "Traffic",
            Self::Vandalism => "Vandalism",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CivicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CivicError::InvalidCategory {
                category: wanted.to_string(),
            })
    }
}

/// A reported civic problem.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    #[serde(default)]
    pub status: Status,
    pub created_at: DateTime<Utc>,

    /// Opaque image reference; only meaningful for the session that attached it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A timestamped note attached to an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

/// Validated input for a new issue, produced by form intake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub image: Option<String>,
}
