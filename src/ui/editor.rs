use anyhow::{anyhow, Context, Result};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::contract::PetUri;
use crate::models::{Gender, Pet, PetValues};
use crate::provider::PetProvider;

use super::helpers::StatusMessage;

/// Navigation request for the editor. `data` carries the row to edit; `None`
/// opens the editor in create-new mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EditorIntent {
    pub(crate) data: Option<PetUri>,
}

impl EditorIntent {
    pub(crate) fn create() -> Self {
        Self { data: None }
    }

    pub(crate) fn edit(uri: PetUri) -> Self {
        Self { data: Some(uri) }
    }
}

/// Fields available within the pet form, in focus order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum PetField {
    #[default]
    Name,
    Breed,
    Gender,
    Weight,
}

impl PetField {
    const ORDER: [PetField; 4] = [
        PetField::Name,
        PetField::Breed,
        PetField::Gender,
        PetField::Weight,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            PetField::Name => "Name",
            PetField::Breed => "Breed",
            PetField::Gender => "Gender",
            PetField::Weight => "Weight (kg)",
        }
    }
}

/// Internal representation of the pet form fields.
#[derive(Default, Clone, Debug)]
pub(crate) struct PetForm {
    pub(crate) name: String,
    pub(crate) breed: String,
    pub(crate) gender: Gender,
    pub(crate) weight: String,
    pub(crate) active: PetField,
    pub(crate) error: Option<String>,
    /// Set on the first edit so leaving can ask before throwing input away.
    pub(crate) touched: bool,
}

impl PetForm {
    /// Populate the form from an existing pet when editing.
    pub(crate) fn from_pet(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            gender: pet.gender,
            weight: pet.weight.to_string(),
            ..Self::default()
        }
    }

    /// Move focus forwards or backwards, wrapping at either end.
    pub(crate) fn toggle_field(&mut self, forward: bool) {
        let len = PetField::ORDER.len();
        let current = PetField::ORDER
            .iter()
            .position(|field| *field == self.active)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.active = PetField::ORDER[next];
    }

    /// Append a character to the active field, validating allowed input.
    pub(crate) fn push_char(&mut self, ch: char) -> bool {
        let accepted = match self.active {
            PetField::Name if !ch.is_control() => {
                self.name.push(ch);
                true
            }
            PetField::Breed if !ch.is_control() => {
                self.breed.push(ch);
                true
            }
            PetField::Weight if ch.is_ascii_digit() => {
                self.weight.push(ch);
                true
            }
            _ => false,
        };
        self.touched |= accepted;
        accepted
    }

    /// Remove the last character from the active field.
    pub(crate) fn backspace(&mut self) {
        let removed = match self.active {
            PetField::Name => self.name.pop(),
            PetField::Breed => self.breed.pop(),
            PetField::Weight => self.weight.pop(),
            PetField::Gender => None,
        };
        self.touched |= removed.is_some();
    }

    /// Step the gender selector. Only acts while the gender field has focus.
    pub(crate) fn cycle_gender(&mut self, offset: isize) -> bool {
        if self.active != PetField::Gender {
            return false;
        }
        self.gender = self.gender.cycle(offset);
        self.touched = true;
        true
    }

    /// Nothing typed and gender left at unknown.
    pub(crate) fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
            && self.breed.trim().is_empty()
            && self.weight.trim().is_empty()
            && self.gender == Gender::Unknown
    }

    /// Convert the inputs into provider values. A blank weight means zero.
    pub(crate) fn to_values(&self) -> Result<PetValues> {
        let weight_raw = self.weight.trim();
        let weight = if weight_raw.is_empty() {
            0
        } else {
            weight_raw
                .parse::<i64>()
                .context("Weight must be a whole number.")?
        };

        Ok(PetValues {
            name: Some(self.name.trim().to_string()),
            breed: Some(self.breed.trim().to_string()),
            gender: Some(self.gender),
            weight: Some(weight),
        })
    }

    /// Render a single line for the form widget.
    pub(crate) fn build_line(&self, field: PetField) -> Line<'static> {
        let value = self.display_value(field);
        let is_active = self.active == field;

        let (display, empty) = if value.is_empty() {
            let hint = match field {
                PetField::Name => "<required>",
                PetField::Breed => "<optional>",
                _ => "0",
            };
            (hint.to_string(), true)
        } else {
            (value, false)
        };

        let style = if is_active {
            Style::default().fg(Color::Yellow)
        } else if empty {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default()
        };

        Line::from(vec![
            Span::raw(format!("{}: ", field.label())),
            Span::styled(display, style),
        ])
    }

    /// Return the character count for the requested field.
    pub(crate) fn value_len(&self, field: PetField) -> usize {
        self.display_value(field).chars().count()
    }

    fn display_value(&self, field: PetField) -> String {
        match field {
            PetField::Name => self.name.clone(),
            PetField::Breed => self.breed.clone(),
            PetField::Gender => format!("< {} >", self.gender),
            PetField::Weight => self.weight.clone(),
        }
    }
}

/// Result of pressing save in the editor.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SaveOutcome {
    /// A brand new, untouched form: close without writing anything.
    Skipped,
    Saved(StatusMessage),
    Failed(StatusMessage),
}

/// State of the add/edit pet screen.
pub(crate) struct EditorScreen {
    pub(crate) uri: Option<PetUri>,
    pub(crate) form: PetForm,
}

impl EditorScreen {
    /// Build the editor for `intent`, loading the row when one is named.
    pub(crate) fn open(provider: &dyn PetProvider, intent: EditorIntent) -> Result<Self> {
        let Some(uri) = intent.data else {
            return Ok(Self {
                uri: None,
                form: PetForm::default(),
            });
        };

        let pet = provider
            .query(uri)
            .with_context(|| format!("failed to load {uri}"))?
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Pet not found"))?;

        Ok(Self {
            uri: Some(uri),
            form: PetForm::from_pet(&pet),
        })
    }

    pub(crate) fn is_editing(&self) -> bool {
        self.uri.is_some()
    }

    pub(crate) fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Pet"
        } else {
            "Add a Pet"
        }
    }

    /// Insert or update depending on the mode the editor was opened in.
    pub(crate) fn save(&mut self, provider: &dyn PetProvider) -> SaveOutcome {
        if self.uri.is_none() && self.form.is_blank() {
            return SaveOutcome::Skipped;
        }

        let values = match self.form.to_values() {
            Ok(values) => values,
            Err(err) => {
                self.form.error = Some(err.to_string());
                return SaveOutcome::Failed(StatusMessage::error(err.to_string()));
            }
        };

        match self.uri {
            None => match provider.insert(PetUri::Collection, &values) {
                Ok(uri) => {
                    log::info!("editor saved new pet {uri}");
                    SaveOutcome::Saved(StatusMessage::info("Pet saved"))
                }
                Err(err) => {
                    log::warn!("editor insert rejected: {err}");
                    self.form.error = Some(err.to_string());
                    SaveOutcome::Failed(StatusMessage::error("Error with saving pet"))
                }
            },
            Some(uri) => match provider.update(uri, &values) {
                Ok(0) => {
                    self.form.error = Some("Pet no longer exists.".into());
                    SaveOutcome::Failed(StatusMessage::error("Error with updating pet"))
                }
                Ok(_) => SaveOutcome::Saved(StatusMessage::info("Pet updated")),
                Err(err) => {
                    log::warn!("editor update of {uri} rejected: {err}");
                    self.form.error = Some(err.to_string());
                    SaveOutcome::Failed(StatusMessage::error("Error with updating pet"))
                }
            },
        }
    }

    /// Delete the pet being edited. Only meaningful in edit mode.
    pub(crate) fn delete(&self, provider: &dyn PetProvider) -> StatusMessage {
        let Some(uri) = self.uri else {
            return StatusMessage::error("Error with deleting pet");
        };

        match provider.delete(uri) {
            Ok(0) => StatusMessage::error("Error with deleting pet"),
            Ok(_) => StatusMessage::info("Pet deleted"),
            Err(err) => {
                log::warn!("delete of {uri} failed: {err}");
                StatusMessage::error("Error with deleting pet")
            }
        }
    }
}
