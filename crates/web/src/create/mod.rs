//! Create influencer dialog.

mod form;

use leptos::{ev::SubmitEvent, prelude::*, task};

use influencers_client::{ClientError, InfluencersClient};

use crate::toasts::Toasts;

use form::{Entries, MAX_HANDLE_CHARS, NameErrors, Platform, SubmissionError, build_submission};

const CREATED: &str = "Influencer has been created.";

/// One notification per server validation message, or the general failure text.
fn failure_messages(error: &ClientError) -> Vec<String> {
    match error.validation_messages() {
        [] => vec![error.user_message()],
        messages => messages.to_vec(),
    }
}

#[component]
fn NameField(
    label: &'static str,
    value: RwSignal<String>,
    error: Signal<Option<&'static str>>,
) -> impl IntoView {
    view! {
        <label class="flex flex-col gap-1 text-sm font-medium text-slate-700">
            {label}
            <input
                type="text"
                class="rounded-md border border-slate-300 px-3 py-2 font-normal"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error.get().map(|message| view! {
                <span class="text-xs font-normal text-red-600">{message}</span>
            })}
        </label>
    }
}

#[component]
fn AccountRow(id: u64, entries: RwSignal<Entries>) -> impl IntoView {
    let platform = move || entries.with(|entries| entries.row(id).map(|row| row.platform));
    let handle = move || {
        entries.with(|entries| {
            entries
                .row(id)
                .map(|row| row.handle.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="flex items-center gap-2">
            <select
                class="rounded-md border border-slate-300 px-2 py-2 text-sm"
                aria-label="Platform"
                on:change=move |ev| {
                    if let Some(platform) = Platform::parse(&event_target_value(&ev)) {
                        entries.update(|entries| entries.set_platform(id, platform));
                    }
                }
            >
                {Platform::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <option
                                value=option.value()
                                selected=move || platform() == Some(option)
                            >
                                {option.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <input
                type="text"
                class="flex-1 rounded-md border border-slate-300 px-3 py-2 text-sm"
                placeholder="Username"
                maxlength=MAX_HANDLE_CHARS.to_string()
                prop:value=handle
                on:input=move |ev| {
                    entries.update(|entries| entries.set_handle(id, event_target_value(&ev)));
                }
            />
            <button
                type="button"
                class="rounded-md px-2 py-2 text-sm text-slate-500 hover:bg-slate-100"
                aria-label="Remove account"
                on:click=move |_| entries.update(|entries| entries.remove(id))
            >
                "✕"
            </button>
        </div>
    }
}

/// Modal form; stays open and populated when the server rejects a submission.
#[component]
pub fn CreateInfluencerDialog(
    client: InfluencersClient,
    open: RwSignal<bool>,
    toasts: Toasts,
    /// Runs after a successful create.
    on_created: Callback<()>,
) -> impl IntoView {
    let client = StoredValue::new(client);
    let name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let entries = RwSignal::new(Entries::new());
    let name_errors = RwSignal::new(NameErrors::default());
    let submitting = RwSignal::new(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }

        let submission = entries.with_untracked(|entries| {
            build_submission(
                &name.get_untracked(),
                &last_name.get_untracked(),
                entries.rows(),
            )
        });

        let influencer = match submission {
            Ok(influencer) => influencer,
            Err(SubmissionError::Names(errors)) => {
                name_errors.set(errors);
                return;
            }
            Err(SubmissionError::Accounts(error)) => {
                name_errors.set(NameErrors::default());
                toasts.warning(error.message());
                return;
            }
        };

        name_errors.set(NameErrors::default());
        submitting.set(true);

        let client = client.get_value();

        task::spawn_local(async move {
            let result = client.create_influencer(&influencer).await;

            submitting.set(false);

            match result {
                Ok(_created) => {
                    name.set(String::new());
                    last_name.set(String::new());
                    entries.update(Entries::reset);
                    open.set(false);
                    toasts.success(CREATED);
                    on_created.run(());
                }
                Err(error) => {
                    for message in failure_messages(&error) {
                        toasts.error(message);
                    }
                }
            }
        });
    };

    let rows = move || {
        entries.with(|entries| entries.rows().iter().map(|row| row.id).collect::<Vec<_>>())
    };

    move || {
        open.get().then(|| {
            view! {
                <div class="fixed inset-0 z-40 flex items-center justify-center bg-slate-900/40 p-4">
                    <form
                        class="flex w-full max-w-md flex-col gap-4 rounded-xl bg-white p-6 shadow-xl"
                        on:submit=submit
                    >
                        <h2 class="text-lg font-semibold">"Add influencer"</h2>
                        <NameField
                            label="First name"
                            value=name
                            error=Signal::derive(move || name_errors.get().name)
                        />
                        <NameField
                            label="Last name"
                            value=last_name
                            error=Signal::derive(move || name_errors.get().last_name)
                        />
                        <fieldset class="flex flex-col gap-2">
                            <legend class="mb-1 text-sm font-medium text-slate-700">"Accounts"</legend>
                            <For
                                each=rows
                                key=|id| *id
                                children=move |id| view! { <AccountRow id=id entries=entries /> }
                            />
                            <button
                                type="button"
                                class="self-start text-sm font-medium text-indigo-600 hover:underline"
                                on:click=move |_| entries.update(Entries::add)
                            >
                                "Add another account"
                            </button>
                        </fieldset>
                        <div class="flex justify-end gap-2">
                            <button
                                type="button"
                                class="rounded-md px-4 py-2 text-sm hover:bg-slate-100"
                                on:click=move |_| open.set(false)
                            >
                                "Cancel"
                            </button>
                            <button
                                type="submit"
                                class="rounded-md bg-indigo-600 px-4 py-2 text-sm font-medium text-white disabled:opacity-50"
                                disabled=move || submitting.get()
                            >
                                "Create"
                            </button>
                        </div>
                    </form>
                </div>
            }
        })
    }
}
