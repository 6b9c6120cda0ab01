use serde_json::Value;

pub const MAX_VOTER_ID_LENGTH: usize = 128;

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: voterId")]
    MissingVoterId,
    #[error("voterId exceeds maximum length of {MAX_VOTER_ID_LENGTH}")]
    VoterIdTooLong,
    #[error("Missing required field: selections")]
    MissingSelections,
    #[error("Missing required field: password")]
    MissingPassword,
}

pub fn validate_voter_id(voter_id: &str) -> Result<(), ValidationError> {
    if voter_id.trim().is_empty() {
        return Err(ValidationError::MissingVoterId);
    }
    if voter_id.len() > MAX_VOTER_ID_LENGTH {
        return Err(ValidationError::VoterIdTooLong);
    }
    Ok(())
}

pub fn validate_submission(voter_id: &str, selections: &Value) -> Result<(), ValidationError> {
    validate_voter_id(voter_id)?;
    if selections.is_null() {
        return Err(ValidationError::MissingSelections);
    }
    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok(())
}
