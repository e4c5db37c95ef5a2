//! Request field validation.
//!
//! One explicit rule set per field; lengths are counted in characters after
//! trimming. Validation always runs before any repository call, so a failed
//! request never touches storage.

/// Length constraints for a single text field.
pub struct FieldRules {
    pub required: bool,
    pub min_len: usize,
    pub max_len: usize,
}

pub const NAME_RULES: FieldRules = FieldRules {
    required: true,
    min_len: 1,
    max_len: 50,
};

pub const DESCRIPTION_RULES: FieldRules = FieldRules {
    required: false,
    min_len: 0,
    max_len: 200,
};

impl FieldRules {
    /// Validate a required field, returning the trimmed value.
    pub fn check_required(&self, field: &str, value: Option<&str>) -> Result<String, String> {
        match self.check_optional(field, value)? {
            Some(trimmed) => Ok(trimmed),
            None => Err(format!("{field} is required")),
        }
    }

    /// Validate an optional field, returning the trimmed value when present.
    pub fn check_optional(
        &self,
        field: &str,
        value: Option<&str>,
    ) -> Result<Option<String>, String> {
        let Some(raw) = value else {
            return Ok(None);
        };

        let trimmed = raw.trim();
        let len = trimmed.chars().count();

        if len == 0 && self.min_len > 0 {
            return Err(format!("{field} must not be empty"));
        }
        if len < self.min_len {
            return Err(format!(
                "{field} must be at least {} characters",
                self.min_len
            ));
        }
        if len > self.max_len {
            return Err(format!(
                "{field} must not exceed {} characters",
                self.max_len
            ));
        }

        Ok(Some(trimmed.to_string()))
    }
}
