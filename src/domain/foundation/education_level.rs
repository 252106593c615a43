//! Education levels offered by municipal schools.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Education level of a school or an enrollment request.
///
/// Uses the official Brazilian level names; `description` carries the
/// citizen-facing label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationLevel {
    Infantil,
    FundamentalI,
    #[serde(rename = "fundamental_ii")]
    FundamentalII,
    Medio,
}

impl EducationLevel {
    /// Returns the citizen-facing description of the level.
    pub fn description(&self) -> &'static str {
        match self {
            EducationLevel::Infantil => "Educação Infantil",
            EducationLevel::FundamentalI => "Ensino Fundamental I",
            EducationLevel::FundamentalII => "Ensino Fundamental II",
            EducationLevel::Medio => "Ensino Médio",
        }
    }

    /// Stable storage token for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            EducationLevel::Infantil => "infantil",
            EducationLevel::FundamentalI => "fundamental_i",
            EducationLevel::FundamentalII => "fundamental_ii",
            EducationLevel::Medio => "medio",
        }
    }

    /// Parses a storage token back into a level.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "infantil" => Some(EducationLevel::Infantil),
            "fundamental_i" => Some(EducationLevel::FundamentalI),
            "fundamental_ii" => Some(EducationLevel::FundamentalII),
            "medio" => Some(EducationLevel::Medio),
            _ => None,
        }
    }
}

impl fmt::Display for EducationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
