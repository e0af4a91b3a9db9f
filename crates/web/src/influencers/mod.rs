//! Influencer list page.

mod card;
mod details;
mod state;

use leptos::{prelude::*, task};

use influencers_client::{ClientError, InfluencersClient};

use crate::{
    create::CreateInfluencerDialog,
    debounce::Debouncer,
    toasts::{ToastKind, Toasts},
};

use card::{InfluencerCard, SkeletonRows};
use details::{DetailsDrawer, toggle_selection};
use state::ListState;

const SEARCH_DEBOUNCE_MS: i32 = 500;

const DELETED: &str = "Influencer has been deleted.";

/// An empty result is not a fault, so it is only a warning.
fn fetch_failure_kind(error: &ClientError) -> ToastKind {
    if error.status() == Some(404) {
        ToastKind::Warning
    } else {
        ToastKind::Error
    }
}

/// Fetch `query` and apply the result if no newer fetch has started.
fn load(client: StoredValue<InfluencersClient>, state: ListState, toasts: Toasts, query: String) {
    let ticket = state.begin();
    let client = client.get_value();

    task::spawn_local(async move {
        let result = client.list_influencers(&query).await;

        if let Some(error) = state.finish(ticket, result) {
            toasts.notify(fetch_failure_kind(&error), error.user_message());
        }
    });
}

#[component]
pub fn InfluencersPage(client: InfluencersClient, toasts: Toasts) -> impl IntoView {
    let dialog_client = client.clone();
    let client = StoredValue::new(client);
    let state = ListState::new();
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<String>);
    let create_open = RwSignal::new(false);
    let debouncer = Debouncer::new(SEARCH_DEBOUNCE_MS);

    load(client, state, toasts, String::new());

    let refetch = move || load(client, state, toasts, query.get_untracked());

    let on_details = Callback::new(move |id: String| {
        selected.update(|current| *current = toggle_selection(current.as_deref(), &id));
    });

    let on_delete = Callback::new(move |id: String| {
        let client = client.get_value();

        task::spawn_local(async move {
            match client.delete_influencer(&id).await {
                Ok(_deleted) => {
                    if selected.get_untracked().as_deref() == Some(id.as_str()) {
                        selected.set(None);
                    }

                    toasts.success(DELETED);
                    refetch();
                }
                Err(error) => toasts.error(error.user_message()),
            }
        });
    });

    let on_created = Callback::new(move |()| refetch());

    view! {
        <section class="flex flex-col gap-4">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <input
                    type="search"
                    class="w-full max-w-sm rounded-md border border-slate-300 px-3 py-2"
                    placeholder="Search by name"
                    prop:value=move || query.get()
                    on:input=move |ev| {
                        query.set(event_target_value(&ev));
                        debouncer.call(refetch);
                    }
                />
                <button
                    type="button"
                    class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white"
                    on:click=move |_| create_open.set(true)
                >
                    "Add influencer"
                </button>
            </div>
            <ul class="flex flex-col gap-2">
                {move || {
                    if state.show_skeleton() {
                        view! { <SkeletonRows /> }.into_any()
                    } else {
                        state
                            .influencers
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, influencer)| {
                                view! {
                                    <InfluencerCard
                                        influencer=influencer
                                        index=index
                                        on_delete=on_delete
                                        on_details=on_details
                                    />
                                }
                            })
                            .collect_view()
                            .into_any()
                    }
                }}
            </ul>
            {move || {
                selected
                    .get()
                    .and_then(|id| state.find(&id))
                    .map(|influencer| view! { <DetailsDrawer influencer=influencer selected=selected /> })
            }}
            <CreateInfluencerDialog
                client=dialog_client
                open=create_open
                toasts=toasts
                on_created=on_created
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use influencers_client::models::ApiFailure;

    use super::*;

    #[test]
    fn empty_results_warn_and_failures_error() {
        let not_found = ClientError::Api {
            status: 404,
            body: ApiFailure::default(),
        };
        let failed = ClientError::Api {
            status: 500,
            body: ApiFailure::default(),
        };

        assert_eq!(fetch_failure_kind(&not_found), ToastKind::Warning);
        assert_eq!(fetch_failure_kind(&failed), ToastKind::Error);
    }
}
