//! Interstitial shown on the way back to the start page, either because the
//! book page has no story or because the reader asked for a new one.
//!
//! Walks through a short scripted progress sequence, then hands control back
//! through `on_complete`.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const MESSAGES: [&str; 5] = [
    "Let the AI weave your dream story...",
    "Cooking up your personalized tale...",
    "Sprinkling magic into your story...",
    "Gathering stardust for your adventure...",
    "Brewing a potion of imagination...",
];

/// Interval between progress steps.
pub const STEP_MS: u32 = 600;
/// Number of steps until 100%.
pub const STEPS: u32 = 5;
/// Pause after the final step before `on_complete` fires.
pub const FINISH_DELAY_MS: u32 = 700;

/// Progress percentage and message for a step.
pub fn loading_frame(step: u32) -> (u32, &'static str) {
    let step = step.min(STEPS);
    let message = match step {
        0 => MESSAGES[0],
        1 => MESSAGES[1],
        2 | 3 => MESSAGES[2],
        4 => MESSAGES[3],
        _ => MESSAGES[4],
    };
    (step * 100 / STEPS, message)
}

#[component]
pub fn StoryLoading(
    /// Invoked once the sequence has finished.
    on_complete: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(0u32);

    let mut timeouts: Vec<Timeout> = (1..=STEPS)
        .map(|n| Timeout::new(n * STEP_MS, move || set_step.set(n)))
        .collect();
    timeouts.push(Timeout::new(STEPS * STEP_MS + FINISH_DELAY_MS, move || {
        // Completing usually unmounts this view, which drops the timer that is
        // running right now; finish on the next tick instead.
        spawn_local(async move { on_complete.run(()) });
    }));
    // Held until the view is dropped; dropping them clears any still pending.
    let timeouts = StoredValue::new_local(timeouts);
    on_cleanup(move || {
        timeouts.try_update_value(Vec::clear);
    });

    view! {
        <div class="story-loading">
            <h2 class="story-loading-message">{move || loading_frame(step.get()).1}</h2>
            <div class="story-loading-bar">
                <div
                    class="story-loading-fill"
                    style:width=move || format!("{}%", loading_frame(step.get()).0)
                ></div>
            </div>
            <p class="story-loading-progress">
                {move || format!("{}% complete", loading_frame(step.get()).0)}
            </p>
        </div>
    }
}
