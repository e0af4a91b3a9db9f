//! Influencer rows.

use leptos::prelude::*;

use influencers_client::models::Influencer;

/// How many placeholder rows stand in for results still loading.
pub const SKELETON_ROWS: usize = 10;

const AVATAR_COUNT: usize = 7;

/// Stock avatar for the row at `index`, cycling through the set.
pub fn avatar_url(index: usize) -> String {
    format!(
        "https://shadcnblocks.com/images/block/avatar-{}.webp",
        index % AVATAR_COUNT + 1
    )
}

#[component]
fn HandleLine(platform: &'static str, handles: Vec<String>) -> impl IntoView {
    (!handles.is_empty()).then(|| {
        view! {
            <p class="text-xs text-slate-500">
                <span class="font-medium text-slate-700">{platform}</span>
                " "
                {handles.join(", ")}
            </p>
        }
    })
}

#[component]
pub fn InfluencerCard(
    influencer: Influencer,
    index: usize,
    on_delete: Callback<String>,
    on_details: Callback<String>,
) -> impl IntoView {
    let delete_id = influencer.id.clone();
    let details_id = influencer.id.clone();
    let full_name = format!("{} {}", influencer.name, influencer.last_name);

    view! {
        <li class="flex items-center justify-between gap-4 rounded-lg border border-slate-200 bg-white p-4">
            <div class="flex items-center gap-3">
                <img
                    class="h-10 w-10 rounded-full object-cover"
                    src=avatar_url(index)
                    alt=""
                />
                <div>
                    <p class="font-medium">{full_name}</p>
                    <HandleLine platform="TikTok" handles=influencer.accounts.tiktok />
                    <HandleLine platform="Instagram" handles=influencer.accounts.instagram />
                </div>
            </div>
            <div class="flex items-center gap-2">
                <button
                    type="button"
                    class="rounded-md px-3 py-1.5 text-sm text-indigo-600 hover:bg-indigo-50"
                    on:click=move |_| on_details.run(details_id.clone())
                >
                    "Show details"
                </button>
                <button
                    type="button"
                    class="rounded-md px-3 py-1.5 text-sm text-red-600 hover:bg-red-50"
                    on:click=move |_| on_delete.run(delete_id.clone())
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
pub fn SkeletonRows() -> impl IntoView {
    (0..SKELETON_ROWS)
        .map(|_| {
            view! {
                <li class="flex animate-pulse items-center gap-3 rounded-lg border border-slate-200 bg-white p-4">
                    <div class="h-10 w-10 rounded-full bg-slate-200"></div>
                    <div class="flex flex-1 flex-col gap-2">
                        <div class="h-3 w-1/3 rounded bg-slate-200"></div>
                        <div class="h-3 w-1/4 rounded bg-slate-100"></div>
                    </div>
                </li>
            }
        })
        .collect_view()
}
