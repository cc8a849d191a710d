//! Upload intake: validate a selected export, send it off, keep the story.

use serde::Serialize;

use crate::backend::StoryBackend;
use crate::error::{IntakeError, UploadFailure, ValidationError};
use crate::story::{StoryStore, StoryText};

/// The user-selected file, before its contents are read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size: u64,
    /// MIME type as declared by the browser; often empty for `.json`.
    pub content_type: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: String::new(),
        }
    }

    pub fn from_web_file(file: &web_sys::File) -> Self {
        Self {
            content_type: file.type_(),
            ..Self::new(file.name(), file.size() as u64)
        }
    }
}

/// Check name and size. Nothing is read and nothing is sent on rejection.
pub fn validate_file(file: &UploadedFile, max_bytes: u64) -> Result<(), ValidationError> {
    if !file.name.ends_with(".json") {
        return Err(ValidationError::NotJson {
            name: file.name.clone(),
        });
    }
    if file.size > max_bytes {
        return Err(ValidationError::TooLarge {
            size: file.size,
            limit: max_bytes,
        });
    }
    Ok(())
}

/// Parsed export, forwarded to the story service as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NarrativePayload(serde_json::Value);

impl NarrativePayload {
    pub fn parse(contents: &str) -> Result<Self, IntakeError> {
        serde_json::from_str(contents).map(Self).map_err(|e| {
            log::warn!("Uploaded file is not valid JSON: {}", e);
            IntakeError::InvalidJson
        })
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.0
    }
}

/// Parse `contents`, ask the backend for a story and persist it.
///
/// Exactly one backend call is made when the contents parse, none otherwise.
/// The store is written only when a story came back.
pub async fn submit_story<B, S>(backend: &B, store: &S, contents: &str) -> Result<StoryText, IntakeError>
where
    B: StoryBackend,
    S: StoryStore,
{
    let payload = NarrativePayload::parse(contents)?;

    let response = backend.generate(&payload).await.inspect_err(|e| {
        log::error!("Story request failed: {}", e);
    })?;

    let story = response.narrative().ok_or_else(|| {
        log::error!("Story service response had no narrative");
        UploadFailure::MissingNarrative
    })?;

    store.save(&story).map_err(|e| {
        log::error!("Failed to store story: {}", e);
        UploadFailure::Storage(e)
    })?;

    log::info!("Stored story ({} characters)", story.char_len());
    Ok(story)
}

/// Where the upload widget is in its flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IntakePhase {
    #[default]
    Idle,
    /// A file was accepted and its request is pending.
    Submitting { file_name: String },
    /// The story was stored; navigation is underway.
    Done { file_name: String },
    Failed { message: String },
}

impl IntakePhase {
    /// New files are ignored while a request is pending or after success.
    pub fn accepts_files(&self) -> bool {
        matches!(self, IntakePhase::Idle | IntakePhase::Failed { .. })
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            IntakePhase::Submitting { file_name } | IntakePhase::Done { file_name } => Some(file_name),
            IntakePhase::Idle | IntakePhase::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            IntakePhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_UPLOAD_BYTES;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn test_rejects_non_json_name() {
        let err = validate_file(&UploadedFile::new("data.txt", 10), MAX_UPLOAD_BYTES).unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotJson {
                name: "data.txt".to_string()
            }
        );
    }

    #[test]
    fn test_extension_check_is_case_sensitive() {
        let result = validate_file(&UploadedFile::new("HISTORY.JSON", 10), MAX_UPLOAD_BYTES);
        assert!(matches!(result, Err(ValidationError::NotJson { .. })));
    }

    #[test]
    fn test_size_limit() {
        let at_limit = UploadedFile::new("history.json", 45 * MIB);
        assert!(validate_file(&at_limit, MAX_UPLOAD_BYTES).is_ok());

        let over = UploadedFile::new("history.json", 46 * MIB);
        assert_eq!(
            validate_file(&over, MAX_UPLOAD_BYTES),
            Err(ValidationError::TooLarge {
                size: 46 * MIB,
                limit: MAX_UPLOAD_BYTES
            })
        );
    }

    #[test]
    fn test_parse_keeps_key_order() {
        let payload = NarrativePayload::parse(r#"{"zeta": 1, "alpha": [true, null]}"#).unwrap();
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"zeta":1,"alpha":[true,null]}"#
        );
    }

    #[test]
    fn test_parse_accepts_any_json_shape() {
        assert!(NarrativePayload::parse("[1, 2, 3]").is_ok());
        assert!(NarrativePayload::parse("\"just a string\"").is_ok());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(
            NarrativePayload::parse("{\"title\": "),
            Err(IntakeError::InvalidJson)
        );
        assert_eq!(NarrativePayload::parse(""), Err(IntakeError::InvalidJson));
    }

    #[test]
    fn test_phase_gates_new_files() {
        assert!(IntakePhase::Idle.accepts_files());
        assert!(IntakePhase::Failed {
            message: "Invalid JSON format".to_string()
        }
        .accepts_files());

        let pending = IntakePhase::Submitting {
            file_name: "history.json".to_string(),
        };
        assert!(!pending.accepts_files());
        assert_eq!(pending.file_name(), Some("history.json"));

        assert!(!IntakePhase::Done {
            file_name: "history.json".to_string()
        }
        .accepts_files());
    }
}
