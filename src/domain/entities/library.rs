//! Library entity
//!
//! A registered media root. The core only reads it and enforces at most one
//! active scan per library; lifecycle (creation, deletion) belongs to the
//! outer system.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryType {
    Music,
    Video,
    Mixed,
}

impl fmt::Display for LibraryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LibraryType::Music => "music",
            LibraryType::Video => "video",
            LibraryType::Mixed => "mixed",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for LibraryType {
    type Err = crate::shared::error::RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "music" => Ok(LibraryType::Music),
            "video" => Ok(LibraryType::Video),
            "mixed" => Ok(LibraryType::Mixed),
            other => Err(crate::shared::error::RepositoryError::Serialization(
                format!("unknown library type: {other}"),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Library {
    pub id: String,
    pub path: String,
    pub library_type: LibraryType,
}

impl Library {
    pub fn new(
        id: String,
        path: String,
        library_type: LibraryType,
    ) -> Result<Self, crate::shared::error::RepositoryError> {
        if path.is_empty() {
            return Err(crate::shared::error::RepositoryError::ConstraintViolation(
                "library path cannot be empty".into(),
            ));
        }
        Ok(Self {
            id,
            path,
            library_type,
        })
    }
}
