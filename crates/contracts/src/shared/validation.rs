use thiserror::Error;

/// Client-side validation failure. The request is not sent when one is raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} is invalid: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },

    #[error("select at least one {0}")]
    NothingSelected(&'static str),
}

/// Fails with [`ValidationError::Required`] when `value` is blank.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(())
}

/// Minimal shape check: one `@` with something on both sides and a dot in the domain.
pub fn require_email(field: &'static str, value: &str) -> Result<(), ValidationError> {
    require(field, value)?;
    let value = value.trim();
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid {
        return Err(ValidationError::Invalid {
            field,
            reason: "not an email address",
        });
    }
    Ok(())
}
