//! Alignment method codes

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Program that produced an alignment.
///
/// Stored as a one-letter code, exchanged by name. The code/name pairs are a
/// fixed bijection; unknown names fall back to [`AlignmentMethod::User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlignmentMethod {
    #[serde(rename = "hhsearch")]
    HhSearch,
    #[serde(rename = "sparksX")]
    SparksX,
    #[serde(rename = "user")]
    User,
}

impl AlignmentMethod {
    pub const ALL: [AlignmentMethod; 3] = [Self::HhSearch, Self::SparksX, Self::User];

    /// One-letter storage code
    pub fn code(&self) -> char {
        match self {
            Self::HhSearch => 'H',
            Self::SparksX => 'S',
            Self::User => 'U',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'H' => Some(Self::HhSearch),
            'S' => Some(Self::SparksX),
            'U' => Some(Self::User),
            _ => None,
        }
    }

    /// Exchange name
    pub fn name(&self) -> &'static str {
        match self {
            Self::HhSearch => "hhsearch",
            Self::SparksX => "sparksX",
            Self::User => "user",
        }
    }

    /// Exact name lookup, `None` for anything unrecognised
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Lenient lookup used for incoming records: unknown names become `User`
    pub fn from_name_lenient(name: &str) -> Self {
        match name {
            "hhsearch" => Self::HhSearch,
            "sparksX" => Self::SparksX,
            "user" => Self::User,
            other => {
                warn!(method = other, "unsupported alignment method, treating it as user input");
                Self::User
            }
        }
    }

    /// Added to the rank to build the numeric part of the Grishin tag
    pub fn tag_offset(&self) -> i64 {
        match self {
            Self::HhSearch => 200,
            Self::SparksX => 300,
            Self::User => 400,
        }
    }

    /// Method whose tag range (`offset..offset + 100`) contains `tag_number`
    pub fn from_tag_number(tag_number: i64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| (m.tag_offset()..m.tag_offset() + 100).contains(&tag_number))
    }
}

impl fmt::Display for AlignmentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
