//! The content URI contract shared by the provider and its clients.

use std::fmt;
use std::str::FromStr;

/// URI scheme for provider content.
pub const CONTENT_SCHEME: &str = "content";
/// Authority identifying the pets provider.
pub const CONTENT_AUTHORITY: &str = "com.example.android.pets";
/// Path segment of the pets collection.
pub const PATH_PETS: &str = "pets";

/// Target of a provider call: the whole collection or one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetUri {
    Collection,
    Item(i64),
}

impl PetUri {
    /// Row-specific URI for `id`.
    pub fn with_appended_id(id: i64) -> Self {
        PetUri::Item(id)
    }

    /// The row id when this URI points at a single pet.
    pub fn id(&self) -> Option<i64> {
        match self {
            PetUri::Collection => None,
            PetUri::Item(id) => Some(*id),
        }
    }
}

impl fmt::Display for PetUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CONTENT_SCHEME}://{CONTENT_AUTHORITY}/{PATH_PETS}")?;
        if let PetUri::Item(id) = self {
            write!(f, "/{id}")?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a pets content URI.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown URI: {0}")]
pub struct UnknownUri(pub String);

impl FromStr for PetUri {
    type Err = UnknownUri;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownUri(raw.to_string());
        let rest = raw
            .strip_prefix(CONTENT_SCHEME)
            .and_then(|r| r.strip_prefix("://"))
            .and_then(|r| r.strip_prefix(CONTENT_AUTHORITY))
            .and_then(|r| r.strip_prefix('/'))
            .and_then(|r| r.strip_prefix(PATH_PETS))
            .ok_or_else(unknown)?;

        match rest {
            "" | "/" => Ok(PetUri::Collection),
            _ => {
                let id = rest
                    .strip_prefix('/')
                    .and_then(|segment| segment.parse::<i64>().ok())
                    .filter(|id| *id >= 0)
                    .ok_or_else(unknown)?;
                Ok(PetUri::Item(id))
            }
        }
    }
}
