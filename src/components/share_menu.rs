use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::share::{copy_to_clipboard, current_page_url, open_share_window, ShareTarget};
use crate::timer::DelayTimer;

const COPIED_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn ShareMenu(
    /// Story title used in the share description.
    #[prop(into)]
    title: String,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (copied, set_copied) = signal(false);
    let title = StoredValue::new(title);

    let copied_timer = StoredValue::new_local(DelayTimer::new());
    on_cleanup(move || {
        copied_timer.try_update_value(DelayTimer::cancel);
    });

    let share_on = move |target: ShareTarget| {
        if let Some(url) = current_page_url() {
            title.with_value(|t| open_share_window(target, &url, t));
        }
        set_open.set(false);
    };

    let copy_link = move |_| {
        let Some(url) = current_page_url() else {
            return;
        };
        spawn_local(async move {
            match copy_to_clipboard(&url).await {
                Ok(()) => {
                    set_copied.set(true);
                    copied_timer.update_value(|t| {
                        t.schedule(COPIED_FEEDBACK_MS, move || set_copied.set(false))
                    });
                }
                Err(e) => log::warn!("{}", e),
            }
        });
    };

    view! {
        <div class="share">
            <button class="btn btn-outline" on:click=move |_| set_open.update(|o| *o = !*o)>
                "Share"
            </button>

            <Show when=move || open.get()>
                <div class="share-menu">
                    {ShareTarget::ALL
                        .into_iter()
                        .map(|target| view! {
                            <button class="share-item" on:click=move |_| share_on(target)>
                                {target.label()}
                            </button>
                        })
                        .collect::<Vec<_>>()}
                    <button class="share-item" on:click=copy_link>
                        {move || if copied.get() { "Copied!" } else { "Copy Link" }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
