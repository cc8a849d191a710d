use leptos::prelude::*;

use crate::components::drop_zone::StoryDropZone;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <header class="hero">
                <h1 class="hero-title">"Ninte Kadha"</h1>
                <p class="page-description">
                    "Your search history already tells a story. Upload it and we will write it down."
                </p>
            </header>

            <section class="upload-section">
                <StoryDropZone />
            </section>

            <div class="how-it-works">
                <h3>"How It Works"</h3>
                <div class="steps">
                    <div class="step">
                        <span class="step-number">"1"</span>
                        <div class="step-content">
                            <strong>"Export"</strong>
                            <p>"Download your search history as a JSON file"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"2"</span>
                        <div class="step-content">
                            <strong>"Upload"</strong>
                            <p>"Drop the file here; it is sent once to our story writer"</p>
                        </div>
                    </div>
                    <div class="step">
                        <span class="step-number">"3"</span>
                        <div class="step-content">
                            <strong>"Read"</strong>
                            <p>"Flip through your story as a book, then download or share it"</p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
