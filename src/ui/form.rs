use crate::models::BusinessFormData;

pub const MIN_FIELD_LEN: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Location,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub location: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Location => self.location.as_deref(),
        }
    }
}

/// Input state of the business form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub name: String,
    pub location: String,
    pub errors: FieldErrors,
    /// Set while a submission is in flight.
    pub disabled: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignored while disabled. Editing a field clears its error.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.disabled {
            return;
        }
        match field {
            Field::Name => {
                self.name = value.into();
                self.errors.name = None;
            }
            Field::Location => {
                self.location = value.into();
                self.errors.location = None;
            }
        }
    }

    /// Validate both fields, recording per-field messages. Returns the trimmed
    /// values when the form may be submitted.
    pub fn validate(&mut self) -> Option<BusinessFormData> {
        self.errors = FieldErrors {
            name: check_field(&self.name, "Business name"),
            location: check_field(&self.location, "Location"),
        };

        if self.errors.is_empty() {
            Some(BusinessFormData {
                name: self.name.trim().to_string(),
                location: self.location.trim().to_string(),
            })
        } else {
            None
        }
    }
}

fn check_field(value: &str, label: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Some(format!("{} is required", label))
    } else if trimmed.chars().count() < MIN_FIELD_LEN {
        Some(format!("{} must be at least {} characters", label, MIN_FIELD_LEN))
    } else {
        None
    }
}
