//! The generated story and where it is kept between page loads.

use std::cell::RefCell;

/// Narrative text returned by the story service.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoryText(String);

impl StoryText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Storage form: the story as a JSON string literal.
    pub fn to_stored(&self) -> String {
        serde_json::Value::String(self.0.clone()).to_string()
    }

    /// Inverse of [`StoryText::to_stored`]. A value that is not a JSON string
    /// literal is taken verbatim.
    pub fn from_stored(raw: String) -> Self {
        match serde_json::from_str::<String>(&raw) {
            Ok(decoded) => Self(decoded),
            Err(_) => Self(raw),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Length in characters, the unit pages are cut in.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl From<String> for StoryText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// Single-slot persistence for the most recent story.
pub trait StoryStore {
    fn load(&self) -> Option<StoryText>;
    fn save(&self, story: &StoryText) -> Result<(), String>;
}

/// Story slot backed by `window.localStorage`.
#[derive(Debug, Clone)]
pub struct LocalStoryStore {
    key: String,
}

impl LocalStoryStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, String> {
        web_sys::window()
            .ok_or_else(|| "no window available".to_string())?
            .local_storage()
            .map_err(|e| format!("localStorage unavailable: {:?}", e))?
            .ok_or_else(|| "localStorage unavailable".to_string())
    }
}

impl StoryStore for LocalStoryStore {
    fn load(&self) -> Option<StoryText> {
        let raw = Self::storage().ok()?.get_item(&self.key).ok().flatten()?;
        Some(StoryText::from_stored(raw))
    }

    fn save(&self, story: &StoryText) -> Result<(), String> {
        Self::storage()?
            .set_item(&self.key, &story.to_stored())
            .map_err(|e| format!("Failed to write '{}': {:?}", self.key, e))
    }
}

/// In-memory story slot for tests. Holds the same encoded form as
/// [`LocalStoryStore`].
#[derive(Debug, Default)]
pub struct MemoryStoryStore {
    slot: RefCell<Option<String>>,
    writes: RefCell<usize>,
}

impl MemoryStoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_story(story: StoryText) -> Self {
        Self {
            slot: RefCell::new(Some(story.to_stored())),
            writes: RefCell::new(0),
        }
    }

    /// Number of successful saves so far.
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl StoryStore for MemoryStoryStore {
    fn load(&self) -> Option<StoryText> {
        self.slot.borrow().clone().map(StoryText::from_stored)
    }

    fn save(&self, story: &StoryText) -> Result<(), String> {
        *self.slot.borrow_mut() = Some(story.to_stored());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
