//! The marketplace feed.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use quicksell_core::{filter_listings, Listing};
use quicksell_data::{load_feed, SupabaseStore};

use crate::components::{show_toast, AddListingModal, LoadingSpinner, ProductCard, Toast, ToastHost};
use crate::session::SessionHandle;

/// Feed view: loads the enriched listing sequence once on mount, derives
/// the displayed subset from the live search query, and hosts the
/// submission modal.
#[component]
pub fn FeedPage(session: SessionHandle, store: SupabaseStore) -> impl IntoView {
    let listings = RwSignal::new(Vec::<Listing>::new());
    let loading = RwSignal::new(true);
    let load_error = RwSignal::new(None::<String>);
    let loaded_once = RwSignal::new(false);
    let query = RwSignal::new(String::new());
    let show_modal = RwSignal::new(false);
    let toast = RwSignal::new(None::<Toast>);
    let reload = RwSignal::new(0u32);

    let session = StoredValue::new_local(session);
    let store = StoredValue::new_local(store);
    let navigate = StoredValue::new_local(use_navigate());

    // Initial load, re-run when a submission bumps `reload`. A failed
    // re-fetch keeps the previous sequence; only a failed first load gets
    // the explicit error state.
    Effect::new(move |_| {
        reload.track();
        let store = store.get_value();
        spawn_local(async move {
            match load_feed(&store).await {
                Ok(items) => {
                    listings.set(items);
                    load_error.set(None);
                    loaded_once.set(true);
                }
                Err(e) => {
                    show_toast(toast, Toast::error(format!("Error fetching products: {e}")));
                    if !loaded_once.get_untracked() {
                        load_error.set(Some(e.to_string()));
                    }
                }
            }
            loading.set(false);
        });
    });

    // The displayed subset: recomputed whenever the query or the full
    // sequence changes.
    let filtered = Memo::new(move |_| {
        listings.with(|items| query.with(|q| filter_listings(items, q)))
    });

    let on_sign_out = move |_| {
        session.with_value(|s| s.sign_out());
        navigate.with_value(|go| go("/", Default::default()));
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="page-center"><LoadingSpinner/></div> }
        >
            <header class="feed-header">
                <div class="feed-header-left">
                    <h1>"QuickSell"</h1>
                    {move || {
                        session
                            .with_value(|s| s.user())
                            .and_then(|u| u.email)
                            .map(|email| {
                                view! { <span class="welcome">"Welcome back, " {email}</span> }
                            })
                    }}
                </div>
                <div class="feed-header-actions">
                    <button class="btn btn-primary" on:click=move |_| show_modal.set(true)>
                        "+ Sell Item"
                    </button>
                    <button class="btn" on:click=on_sign_out>"Sign Out"</button>
                </div>
            </header>

            <section class="feed-body">
                <div class="search-box">
                    <input
                        type="text"
                        placeholder="Search products..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>

                <div class="feed-heading">
                    <h2>"Marketplace"</h2>
                    <p>
                        {move || {
                            let n = filtered.with(|f| f.len());
                            format!("{} {} available", n, if n == 1 { "item" } else { "items" })
                        }}
                    </p>
                </div>

                {move || {
                    if let Some(message) = load_error.get() {
                        view! {
                            <div class="empty-state">
                                <h3>"Could not load the feed"</h3>
                                <p>{message}</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        let items = filtered.get();
                        if items.is_empty() {
                            let searching = !query.with(|q| q.trim().is_empty());
                            view! {
                                <div class="empty-state">
                                    <div class="empty-icon">"🛒"</div>
                                    <h3>
                                        {if searching {
                                            "No products found"
                                        } else {
                                            "No products available"
                                        }}
                                    </h3>
                                    <p>
                                        {if searching {
                                            "Try adjusting your search terms"
                                        } else {
                                            "Be the first to list an item for sale!"
                                        }}
                                    </p>
                                </div>
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="product-grid">
                                    {items
                                        .into_iter()
                                        .map(|l| view! { <ProductCard listing=l/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </section>

            <AddListingModal
                session=session.get_value()
                store=store.get_value()
                open=show_modal
                reload=reload
                toast=toast
            />
            <ToastHost toast=toast/>
        </Show>
    }
}
