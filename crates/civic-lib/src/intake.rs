//! Form intake: raw user input to a validated [`IssueDraft`].

use crate::error::{CivicError, Result, ValidationError};
use crate::model::{Category, IssueDraft};

/// Raw contents of the submission form, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueForm {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    /// Reference to a chosen image, if any.
    pub image: Option<String>,
}

impl IssueForm {
    /// Trim and check every field, reporting all problems at once.
    ///
    /// # Errors
    ///
    /// Returns `Validation` / `ValidationErrors` naming each blank field and
    /// an unknown category. Nothing is created on error.
    pub fn validate(&self) -> Result<IssueDraft> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        let description = self.description.trim();
        let location = self.location.trim();
        let category = self.category.trim();

        for (field, value) in [
            ("title", title),
            ("description", description),
            ("location", location),
            ("category", category),
        ] {
            if value.is_empty() {
                errors.push(ValidationError::new(field, "cannot be empty"));
            }
        }

        let parsed = if category.is_empty() {
            None
        } else {
            match category.parse::<Category>() {
                Ok(c) => Some(c),
                Err(_) => {
                    errors.push(ValidationError::new(
                        "category",
                        format!("unknown category '{category}'"),
                    ));
                    None
                }
            }
        };

        match parsed {
            Some(category) if errors.is_empty() => Ok(IssueDraft {
                title: title.to_string(),
                description: description.to_string(),
                location: location.to_string(),
                category,
                image: self
                    .image
                    .as_deref()
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string),
            }),
            _ => Err(CivicError::from_validation_errors(errors)),
        }
    }

    /// Reset every field after a successful submission.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
