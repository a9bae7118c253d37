//! New-listing submission modal.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use quicksell_core::{Condition, SubmissionForm};
use quicksell_data::{FetchError, ProductStore, SupabaseStore};

use crate::components::{show_toast, Toast};
use crate::session::SessionHandle;

/// Apply a submission outcome to the modal state and pick the toast.
///
/// Success clears the form, bumps `reload` exactly once so the feed
/// re-fetches, and closes the modal; failure keeps the draft so the
/// seller can correct and retry.
fn settle_submission(
    outcome: Result<(), FetchError>,
    form: RwSignal<SubmissionForm>,
    reload: RwSignal<u32>,
    open: RwSignal<bool>,
) -> Toast {
    match outcome {
        Ok(()) => {
            form.update(|f| f.finish_submit(true));
            reload.update(|n| *n += 1);
            open.set(false);
            Toast::success("Product added successfully")
        }
        Err(e) => {
            form.update(|f| f.finish_submit(false));
            Toast::error(e.to_string())
        }
    }
}

/// Modal form collecting a new listing.
///
/// Submission drives the `SubmissionForm` state machine: success clears the
/// fields, closes the modal, and bumps `reload` so the feed re-fetches;
/// failure shows the backend's message and keeps the entered values.
#[component]
pub fn AddListingModal(
    session: SessionHandle,
    store: SupabaseStore,
    open: RwSignal<bool>,
    reload: RwSignal<u32>,
    toast: RwSignal<Option<Toast>>,
) -> impl IntoView {
    let form = RwSignal::new(SubmissionForm::new());
    // Stored so the handlers below are Copy and can live inside <Show>.
    let session = StoredValue::new_local(session);
    let store = StoredValue::new_local(store);

    let submitting = move || form.with(|f| f.is_submitting());
    let submit_disabled = move || form.with(|f| f.is_submitting() || !f.draft.is_submittable());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(user) = session.with_value(|s| s.user()) else {
            return;
        };
        // Also guards against submission with an invalid draft, even
        // though the control is disabled in that state.
        let Some(Ok(listing)) = form.try_update(|f| f.begin_submit()) else {
            return;
        };
        let store = store.get_value();
        spawn_local(async move {
            let outcome = store.insert_product(&listing, &user.id).await;
            show_toast(toast, settle_submission(outcome, form, reload, open));
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| open.set(false)></div>
            <div class="modal">
                <h2>"Sell Your Item"</h2>
                <form on:submit=on_submit>
                    <label>
                        "Title" <span class="required">"*"</span>
                        <input
                            type="text"
                            placeholder="What are you selling?"
                            prop:value=move || form.with(|f| f.draft.title.clone())
                            on:input=move |ev| {
                                form.update(|f| f.draft.title = event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Price" <span class="required">"*"</span>
                        <input
                            type="number"
                            step="0.01"
                            min="0"
                            placeholder="0.00"
                            prop:value=move || form.with(|f| f.draft.price.clone())
                            on:input=move |ev| {
                                form.update(|f| f.draft.price = event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Description" <span class="required">"*"</span>
                        <textarea
                            rows="3"
                            placeholder="Describe your item..."
                            prop:value=move || form.with(|f| f.draft.description.clone())
                            on:input=move |ev| {
                                form.update(|f| f.draft.description = event_target_value(&ev))
                            }
                        ></textarea>
                    </label>
                    <label>
                        "Condition"
                        <select
                            prop:value=move || {
                                form.with(|f| f.draft.condition.as_str().to_string())
                            }
                            on:change=move |ev| {
                                let condition = Condition::parse(&event_target_value(&ev))
                                    .unwrap_or_default();
                                form.update(|f| f.draft.condition = condition);
                            }
                        >
                            {Condition::ALL
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <option
                                            value=c.as_str()
                                            selected=move || form.with(|f| f.draft.condition == c)
                                        >
                                            {c.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label>
                        "Category"
                        <input
                            type="text"
                            placeholder="e.g., Electronics, Clothing, Books"
                            prop:value=move || form.with(|f| f.draft.category.clone())
                            on:input=move |ev| {
                                form.update(|f| f.draft.category = event_target_value(&ev))
                            }
                        />
                    </label>
                    <label>
                        "Image URL"
                        <input
                            type="url"
                            placeholder="https://example.com/image.jpg"
                            prop:value=move || form.with(|f| f.draft.image_url.clone())
                            on:input=move |ev| {
                                form.update(|f| f.draft.image_url = event_target_value(&ev))
                            }
                        />
                    </label>
                    <div class="modal-actions">
                        <button
                            type="button"
                            class="btn"
                            disabled=submitting
                            on:click=move |_| open.set(false)
                        >
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary" disabled=submit_disabled>
                            {move || if submitting() { "Adding Product..." } else { "Add Product" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ToastKind;

    fn submitted_form() -> RwSignal<SubmissionForm> {
        let form = RwSignal::new(SubmissionForm::new());
        form.update(|f| {
            f.draft.title = "Desk Lamp".to_string();
            f.draft.price = "15.50".to_string();
            f.draft.description = "Barely used".to_string();
            f.begin_submit().unwrap();
        });
        form
    }

    #[test]
    fn successful_submission_clears_closes_and_reloads_once() {
        let form = submitted_form();
        let reload = RwSignal::new(0u32);
        let open = RwSignal::new(true);

        let toast = settle_submission(Ok(()), form, reload, open);

        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(reload.get(), 1);
        assert!(!open.get());
        form.with(|f| {
            assert!(!f.is_submitting());
            assert!(f.draft.title.is_empty());
        });
    }

    #[test]
    fn failed_submission_keeps_the_draft_open_for_retry() {
        let form = submitted_form();
        let reload = RwSignal::new(0u32);
        let open = RwSignal::new(true);

        let toast = settle_submission(
            Err(FetchError::Http {
                status: 400,
                message: "price out of range".to_string(),
            }),
            form,
            reload,
            open,
        );

        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(reload.get(), 0);
        assert!(open.get());
        form.with(|f| {
            assert!(!f.is_submitting());
            assert_eq!(f.draft.title, "Desk Lamp");
        });
    }
}
