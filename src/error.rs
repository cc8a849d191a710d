use thiserror::Error;

/// Rejection of a selected file before anything is read or sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please upload a JSON file")]
    NotJson { name: String },

    #[error("File size should be less than 45MB")]
    TooLarge { size: u64, limit: u64 },
}

/// Why a submission to the story service did not produce a stored story.
///
/// Users only ever see the generic [`IntakeError::UploadFailed`] message; the
/// cause is kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadFailure {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("response did not contain a story")]
    MissingNarrative,

    #[error("could not persist story: {0}")]
    Storage(String),
}

/// Outcome of a failed upload attempt, as surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid JSON format")]
    InvalidJson,

    #[error("Failed to upload file")]
    UploadFailed(#[from] UploadFailure),
}

impl From<IntakeError> for String {
    fn from(err: IntakeError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let not_json: IntakeError = ValidationError::NotJson {
            name: "data.txt".to_string(),
        }
        .into();
        assert_eq!(not_json.to_string(), "Please upload a JSON file");

        let too_large: IntakeError = ValidationError::TooLarge { size: 1, limit: 0 }.into();
        assert_eq!(too_large.to_string(), "File size should be less than 45MB");

        assert_eq!(IntakeError::InvalidJson.to_string(), "Invalid JSON format");
    }

    #[test]
    fn test_upload_failures_share_one_message() {
        let causes = [
            UploadFailure::Transport("connection refused".to_string()),
            UploadFailure::Timeout(120),
            UploadFailure::Status(502),
            UploadFailure::MalformedResponse("expected value".to_string()),
            UploadFailure::MissingNarrative,
            UploadFailure::Storage("quota exceeded".to_string()),
        ];
        for cause in causes {
            let message: String = IntakeError::from(cause).into();
            assert_eq!(message, "Failed to upload file");
        }
    }
}
