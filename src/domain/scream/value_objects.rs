use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body text of a scream: non-blank after trimming, at most 1000 chars.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScreamBody {
    #[validate(length(min = 1, max = 1000), custom(function = not_blank))]
    pub value: String,
}

impl ScreamBody {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let body = Self { value };
        body.validate()?;
        Ok(body)
    }
}

/// Body text of a comment: non-blank after trimming, at most 500 chars.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CommentBody {
    #[validate(length(min = 1, max = 500), custom(function = not_blank))]
    pub value: String,
}

impl CommentBody {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let body = Self { value };
        body.validate()?;
        Ok(body)
    }
}
