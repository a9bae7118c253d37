//! Application shell and routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use quicksell_auth::AuthClient;
use quicksell_data::SupabaseStore;

use crate::config::AppConfig;
use crate::pages::{FeedPage, LandingPage};
use crate::session::SessionHandle;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let mut store = SupabaseStore::new(config.remote());
    let mut auth = AuthClient::new(config.auth());
    if let Some(token) = &config.access_token {
        store = store.with_access_token(token.clone());
        auth = auth.with_access_token(token.clone());
    }
    let session = SessionHandle::bootstrap(auth);

    let fallback = || view! { <NotFound/> }.into_view();

    let landing_session = session.clone();
    let feed_session = session.clone();
    let feed_store = store.clone();

    view! {
        <Stylesheet id="quicksell" href="/style/main.css"/>
        <Meta name="description" content="QuickSell - your marketplace for everything"/>
        <Title text="QuickSell"/>

        <Router>
            <main>
                <Routes fallback>
                    <Route
                        path=path!("")
                        view=move || view! { <LandingPage session=landing_session.clone()/> }
                    />
                    <Route
                        path=path!("/dashboard")
                        view=move || {
                            view! { <FeedPage session=feed_session.clone() store=feed_store.clone()/> }
                        }
                    />
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

/// 404 page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="not-found">
                <h1>"404"</h1>
                <p>"Page not found"</p>
                <a href="/">"Back to Home"</a>
            </div>
        </div>
    }
}
