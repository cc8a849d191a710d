//! Paginated book with a cover and animated page turns.

use leptos::prelude::*;

use crate::book::{Book, BookViewer, FlipDirection, PageView};
use crate::context::use_config;
use crate::timer::DelayTimer;

#[component]
pub fn BookView(
    /// The book to show; its page count is fixed for the life of the view.
    book: Book,
) -> impl IntoView {
    let config = use_config();
    let flip_ms = config.flip_duration_ms;
    let sparkle_ms = config.sparkle_duration_ms;

    let viewer = RwSignal::new(BookViewer::new(book.page_count()));
    let sparkle = RwSignal::new(false);
    let book = StoredValue::new(book);

    let flip_timer = StoredValue::new_local(DelayTimer::new());
    let sparkle_timer = StoredValue::new_local(DelayTimer::new());
    on_cleanup(move || {
        flip_timer.try_update_value(DelayTimer::cancel);
        sparkle_timer.try_update_value(DelayTimer::cancel);
    });

    let turn = move |direction: FlipDirection| {
        let started = viewer
            .try_update(|v| match direction {
                FlipDirection::Next => v.request_next(),
                FlipDirection::Prev => v.request_prev(),
            })
            .unwrap_or(false);
        if !started {
            return;
        }
        log::debug!("Turning page {:?}", direction);

        sparkle.set(true);
        sparkle_timer.update_value(|t| t.schedule(sparkle_ms, move || sparkle.set(false)));
        flip_timer.update_value(|t| {
            t.schedule(flip_ms, move || {
                viewer.update(|v| {
                    v.finish_flip();
                });
            })
        });
    };

    view! {
        <div class="book">
            <style>{include_str!("book_view.css")}</style>
            <div class="book-spine"></div>

            <div class="book-page-area">
                {move || {
                    let state = viewer.get();
                    let direction = state.flip_direction();
                    match book.with_value(|b| b.view(state.current_page())) {
                        Some(PageView::Cover { title, author }) => view! {
                            <div class="book-cover">
                                <h1 class="book-title">{title}</h1>
                                <p class="book-tagline">
                                    "Your personal digital journey, transformed into a story"
                                </p>
                                <p class="book-author">"by " {author}</p>
                                <span class="turn-hint">"Turn page \u{203a}"</span>
                            </div>
                        }.into_any(),
                        Some(PageView::Content { number, text }) => view! {
                            <div
                                class="book-leaf"
                                class:flip-next=move || direction == Some(FlipDirection::Next)
                                class:flip-prev=move || direction == Some(FlipDirection::Prev)
                            >
                                <p class="page-text">{text}</p>
                                <span class="folio">{format!("~ {} ~", number)}</span>
                            </div>
                        }.into_any(),
                        None => view! { <div class="book-leaf"></div> }.into_any(),
                    }
                }}

                <Show when=move || sparkle.get()>
                    <span
                        class="sparkle"
                        class:sparkle-prev=move || viewer.get().flip_direction() == Some(FlipDirection::Prev)
                    >
                        "\u{2726}"
                    </span>
                </Show>
            </div>

            <div class="book-controls">
                <button
                    class="book-nav"
                    title="Previous page"
                    disabled=move || !viewer.get().can_go_prev()
                    on:click=move |_| turn(FlipDirection::Prev)
                >
                    "\u{2039}"
                </button>
                <button
                    class="book-nav"
                    title="Next page"
                    disabled=move || !viewer.get().can_go_next()
                    on:click=move |_| turn(FlipDirection::Next)
                >
                    "\u{203a}"
                </button>
            </div>

            <div class="book-indicator">{move || viewer.get().indicator()}</div>
        </div>
    }
}
