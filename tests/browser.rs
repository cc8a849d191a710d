#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_test::*;

use ninte_kadha::components::story_loading::{StoryLoading, FINISH_DELAY_MS, STEPS, STEP_MS};
use ninte_kadha::story::LocalStoryStore;
use ninte_kadha::timer::DelayTimer;
use ninte_kadha::{StoryStore, StoryText};

wasm_bindgen_test_configure!(run_in_browser);

fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
    let fired = Rc::new(Cell::new(0));
    let hit = fired.clone();
    (fired, move || hit.set(hit.get() + 1))
}

fn local_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
async fn test_timer_fires_once() {
    let (fired, callback) = counter();
    let mut timer = DelayTimer::new();
    timer.schedule(10, callback);

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn test_cancelled_timer_never_fires() {
    let (fired, callback) = counter();
    let mut timer = DelayTimer::new();
    timer.schedule(10, callback);
    timer.cancel();

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 0);
}

#[wasm_bindgen_test]
async fn test_dropped_timer_never_fires() {
    let (fired, callback) = counter();
    {
        let mut timer = DelayTimer::new();
        timer.schedule(10, callback);
    }

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 0);
}

#[wasm_bindgen_test]
async fn test_reschedule_replaces_pending_callback() {
    let (first, first_callback) = counter();
    let (second, second_callback) = counter();
    let mut timer = DelayTimer::new();
    timer.schedule(10, first_callback);
    timer.schedule(20, second_callback);

    TimeoutFuture::new(80).await;
    assert_eq!(first.get(), 0);
    assert_eq!(second.get(), 1);
}

#[wasm_bindgen_test]
async fn test_owner_cleanup_cancels_pending_flip() {
    let (fired, callback) = counter();
    let owner = Owner::new();
    owner.with(|| {
        let flip_timer = StoredValue::new_local(DelayTimer::new());
        on_cleanup(move || {
            flip_timer.try_update_value(DelayTimer::cancel);
        });
        flip_timer.update_value(|t| t.schedule(10, callback));
    });
    owner.cleanup();

    TimeoutFuture::new(60).await;
    assert_eq!(fired.get(), 0);
}

#[wasm_bindgen_test]
fn test_local_store_save_load_overwrite() {
    let key = "ninte-kadha-test-overwrite";
    let store = LocalStoryStore::new(key);
    local_storage().remove_item(key).unwrap();
    assert!(store.load().is_none());

    let first = StoryText::new("\"I searched for rice at 2am.\"");
    store.save(&first).unwrap();
    assert_eq!(store.load(), Some(first.clone()));
    assert_eq!(local_storage().get_item(key).unwrap(), Some(first.to_stored()));

    let second = StoryText::new("A second story.");
    store.save(&second).unwrap();
    assert_eq!(store.load(), Some(second));

    local_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn test_local_store_reads_unencoded_value() {
    let key = "ninte-kadha-test-plain";
    local_storage().set_item(key, "Written as plain text").unwrap();

    let story = LocalStoryStore::new(key).load();
    assert_eq!(story.map(StoryText::into_string).as_deref(), Some("Written as plain text"));

    local_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
async fn test_story_loading_runs_to_completion_once() {
    let completed = Arc::new(AtomicU32::new(0));
    let hits = completed.clone();
    let on_complete = Callback::new(move |_: ()| {
        hits.fetch_add(1, Ordering::SeqCst);
    });
    let handle = leptos::mount::mount_to_body(move || view! { <StoryLoading on_complete=on_complete /> });

    TimeoutFuture::new(STEP_MS).await;
    assert_eq!(completed.load(Ordering::SeqCst), 0);

    TimeoutFuture::new(STEPS * STEP_MS + FINISH_DELAY_MS).await;
    assert_eq!(completed.load(Ordering::SeqCst), 1);
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
        .and_then(|b| b.text_content())
        .unwrap_or_default();
    assert!(text.contains("100% complete"), "{}", text);

    drop(handle);
}
