pub mod app;
pub mod backend;
pub mod book;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod export;
pub mod intake;
pub mod pages;
pub mod share;
pub mod story;
pub mod timer;

pub use book::{Book, BookViewer, FlipDirection, PageView, ViewerState};
pub use error::{IntakeError, UploadFailure, ValidationError};
pub use intake::{submit_story, validate_file, NarrativePayload, UploadedFile};
pub use story::{StoryStore, StoryText};

use leptos::prelude::*;

use app::App;
use config::AppConfig;

/// Set up logging and mount the application.
pub fn run() {
    let config = AppConfig::from_build_env();

    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(config.log_level) {
        web_sys::console::error_1(&format!("Failed to initialise logging: {}", e).into());
    }
    log::info!("Story service endpoint: {}", config.backend_url);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
