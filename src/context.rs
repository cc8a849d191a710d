//! Shared application state handed to views through Leptos context.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::story::{LocalStoryStore, StoryStore, StoryText};

/// The most recent story. Hydrated from storage at start-up, replaced after
/// every successful upload, read when the book view mounts.
#[derive(Clone, Copy)]
pub struct StoryContext {
    pub story: RwSignal<Option<StoryText>>,
}

impl StoryContext {
    /// Publish a story that has already been persisted.
    pub fn publish(&self, story: StoryText) {
        self.story.set(Some(story));
    }

    /// Read once, without subscribing.
    pub fn current(&self) -> Option<StoryText> {
        self.story.get_untracked()
    }
}

pub fn provide_app_context(config: AppConfig) -> StoryContext {
    let stored = LocalStoryStore::new(config.storage_key.clone()).load();
    if stored.is_some() {
        log::debug!("Restored story from '{}'", config.storage_key);
    }

    let ctx = StoryContext {
        story: RwSignal::new(stored),
    };
    provide_context(config);
    provide_context(ctx);
    ctx
}

pub fn use_story_context() -> StoryContext {
    expect_context::<StoryContext>()
}

pub fn use_config() -> AppConfig {
    expect_context::<AppConfig>()
}
