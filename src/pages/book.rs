//! Results page: the generated story as a book, with download and share.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::book::Book;
use crate::components::book_view::BookView;
use crate::components::share_menu::ShareMenu;
use crate::components::story_loading::StoryLoading;
use crate::context::{use_config, use_story_context};
use crate::export::{download_file_name, download_text_file, render_manuscript};

#[component]
pub fn BookPage() -> impl IntoView {
    let config = use_config();
    let navigate = StoredValue::new_local(use_navigate());

    // Read once on mount; a later upload navigates back here and remounts.
    let book = use_story_context()
        .current()
        .map(|story| Book::from_story(&story, config.book_title.clone(), config.book_author.clone()));

    let go_home = Callback::new(move |_: ()| {
        navigate.try_with_value(|nav| nav("/", Default::default()));
    });

    let Some(book) = book else {
        log::info!("No story stored yet, returning to the start page");
        return view! { <StoryLoading on_complete=go_home /> }.into_any();
    };

    let (download_error, set_download_error) = signal::<Option<String>>(None);
    let manuscript = StoredValue::new((download_file_name(&book.title), render_manuscript(&book)));
    let on_download = move |_| {
        manuscript.with_value(|(name, text)| match download_text_file(name, text) {
            Ok(()) => set_download_error.set(None),
            Err(e) => {
                log::error!("Download failed: {}", e);
                set_download_error.set(Some("Failed to generate file. Please try again.".to_string()));
            }
        });
    };

    // "Create Another Story" plays the loading interstitial before leaving.
    let (leaving, set_leaving) = signal(false);
    let title = book.title.clone();
    view! {
        <Show
            when=move || !leaving.get()
            fallback=move || view! { <StoryLoading on_complete=go_home /> }
        >
            <div class="page book-page">
                <div class="book-toolbar">
                    <a href="/" class="back-link">"\u{2190} Back to Home"</a>
                    <div class="book-actions">
                        <ShareMenu title=title.clone() />
                        <button class="btn btn-outline" on:click=on_download>"Download"</button>
                    </div>
                </div>

                <Show when=move || download_error.get().is_some()>
                    <p class="download-error">{move || download_error.get().unwrap_or_default()}</p>
                </Show>

                <BookView book=book.clone() />

                <div class="book-footer">
                    <button class="btn btn-primary" on:click=move |_| set_leaving.set(true)>
                        "Create Another Story"
                    </button>
                </div>
            </div>
        </Show>
    }
    .into_any()
}
