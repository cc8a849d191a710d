use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::config::AppConfig;
use crate::context::provide_app_context;
use crate::pages::book::BookPage;
use crate::pages::home::HomePage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_app_context(config);

    view! {
        <Router>
            <main class="content">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/book") view=BookPage />
                </Routes>
            </main>
        </Router>
    }
}
