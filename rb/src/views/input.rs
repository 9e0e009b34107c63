//! User input validation, applied before any fetch is issued

use thiserror::Error;

/// Which input box a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    SearchTerm,
    Ingredients,
    ProductName,
}

impl InputField {
    /// Inline prompt shown when the field is left empty
    pub fn prompt(&self) -> &'static str {
        match self {
            InputField::SearchTerm => "Please enter a search term.",
            InputField::Ingredients => "Please enter at least one ingredient.",
            InputField::ProductName => "Please enter a product name.",
        }
    }
}

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{}", .0.prompt())]
    Empty(InputField),
}

/// Trim a query and reject it when nothing is left
pub fn validate_query(raw: &str, field: InputField) -> Result<String, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_query_trims() {
        assert_eq!(validate_query("  pasta  ", InputField::SearchTerm).unwrap(), "pasta");
    }

    #[test]
    fn test_validate_query_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            let err = validate_query(raw, InputField::Ingredients).unwrap_err();
            assert_eq!(err, InputError::Empty(InputField::Ingredients));
        }
    }

    #[test]
    fn test_error_text_is_the_prompt() {
        assert_eq!(
            InputError::Empty(InputField::ProductName).to_string(),
            "Please enter a product name."
        );
        assert_eq!(
            InputError::Empty(InputField::Ingredients).to_string(),
            "Please enter at least one ingredient."
        );
    }
}
