//! Details drawer.

use leptos::prelude::*;

use influencers_client::models::Influencer;

/// Next selection after "Show details" is pressed on `clicked`.
///
/// Pressing the open record again closes the drawer.
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    (current != Some(clicked)).then(|| clicked.to_owned())
}

#[component]
fn HandleList(platform: &'static str, handles: Vec<String>) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-1">
            <h3 class="text-sm font-semibold text-slate-700">{platform}</h3>
            {if handles.is_empty() {
                view! { <p class="text-sm text-slate-400">"No accounts"</p> }.into_any()
            } else {
                view! {
                    <ul class="text-sm text-slate-600">
                        {handles
                            .into_iter()
                            .map(|handle| view! { <li>{format!("@{handle}")}</li> })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
pub fn DetailsDrawer(influencer: Influencer, selected: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <aside class="fixed inset-y-0 right-0 z-30 flex w-80 flex-col gap-4 border-l border-slate-200 bg-white p-6 shadow-xl">
            <div class="flex items-start justify-between">
                <h2 class="text-lg font-semibold">
                    {format!("{} {}", influencer.name, influencer.last_name)}
                </h2>
                <button
                    type="button"
                    class="rounded-md px-2 py-1 text-sm text-slate-500 hover:bg-slate-100"
                    aria-label="Close details"
                    on:click=move |_| selected.set(None)
                >
                    "✕"
                </button>
            </div>
            <HandleList platform="TikTok" handles=influencer.accounts.tiktok />
            <HandleList platform="Instagram" handles=influencer.accounts.instagram />
        </aside>
    }
}
