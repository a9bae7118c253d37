//! Landing/marketing page.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::LoadingSpinner;
use crate::session::SessionHandle;

/// Marketing page; authenticated sessions are redirected to the feed.
#[component]
pub fn LandingPage(session: SessionHandle) -> impl IntoView {
    let spinner_session = session.clone();
    let redirect_session = session.clone();

    view! {
        <Show
            when=move || !spinner_session.is_loading()
            fallback=|| view! { <div class="page-center"><LoadingSpinner/></div> }
        >
            <Show when={
                let session = redirect_session.clone();
                move || session.user().is_some()
            }>
                <Redirect path="/dashboard"/>
            </Show>
            <div class="landing">
                <div class="landing-hero">
                    <h1>"QuickSell"</h1>
                    <p>"Your marketplace for everything. Buy and sell with ease."</p>
                </div>
                <div class="landing-features">
                    <div class="feature-card">
                        <div class="feature-icon">"🛍️"</div>
                        <h3>"Easy Shopping"</h3>
                        <p>"Browse thousands of items from trusted sellers"</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">"💰"</div>
                        <h3>"Quick Selling"</h3>
                        <p>"List your items and start earning in minutes"</p>
                    </div>
                    <div class="feature-card">
                        <div class="feature-icon">"🔒"</div>
                        <h3>"Secure Transactions"</h3>
                        <p>"Safe and secure platform for all your trades"</p>
                    </div>
                </div>
                <a href="/dashboard" class="btn btn-primary">"Browse the Marketplace"</a>
            </div>
        </Show>
    }
}
