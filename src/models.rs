//! Domain models that mirror the `pets` table and travel between the provider,
//! the loader and the TUI. They stay plain data holders; validation lives in
//! the provider and presentation in `ui`.

use std::fmt;

/// Gender of a pet. The discriminants are the integer codes stored in the
/// `gender` column and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Unknown = 0,
    Male = 1,
    Female = 2,
}

impl Gender {
    /// Order used when cycling through the editor's gender selector.
    pub const ALL: [Gender; 3] = [Gender::Unknown, Gender::Male, Gender::Female];

    /// Integer code persisted in the database.
    pub fn code(self) -> i64 {
        self as i64
    }

    /// Decode a stored integer. Returns `None` for codes outside the contract.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Gender::Unknown),
            1 => Some(Gender::Male),
            2 => Some(Gender::Female),
            _ => None,
        }
    }

    /// Step forwards or backwards through [`Gender::ALL`], wrapping around.
    pub fn cycle(self, offset: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let current = Self::ALL.iter().position(|g| *g == self).unwrap_or(0) as isize;
        let next = (current + offset).rem_euclid(len);
        Self::ALL[next as usize]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Gender::Unknown => "Unknown",
            Gender::Male => "Male",
            Gender::Female => "Female",
        };
        write!(f, "{label}")
    }
}

/// A complete pet record as stored by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pet {
    /// Provider-assigned primary key. Never changes once assigned.
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub gender: Gender,
    /// Weight in kilograms, never negative.
    pub weight: i64,
}

/// The catalog's projection of a pet: just enough to render a list row and
/// to build the URI the editor needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetSummary {
    pub id: i64,
    pub name: String,
    pub breed: String,
}

impl PetSummary {
    /// Breed text shown under the name. Blank breeds get a placeholder so the
    /// second line of a list item never collapses.
    pub fn breed_label(&self) -> &str {
        if self.breed.trim().is_empty() {
            "Unknown breed"
        } else {
            &self.breed
        }
    }
}

/// Column values for insert and update calls. Every field is optional: an
/// insert fills absent columns with defaults, an update only touches the
/// columns that are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetValues {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub gender: Option<Gender>,
    pub weight: Option<i64>,
}

impl PetValues {
    /// True when no column is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.breed.is_none() && self.gender.is_none() && self.weight.is_none()
    }
}
