//! Transient notifications.

use leptos::{prelude::*, task};

use crate::timer::wait_for_timeout;

const TOAST_TTL_MS: i32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn classes(self) -> &'static str {
        match self {
            Self::Success => "border-emerald-200 bg-emerald-50 text-emerald-800",
            Self::Warning => "border-amber-200 bg-amber-50 text-amber-800",
            Self::Error => "border-red-200 bg-red-50 text-red-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Show a toast and dismiss it after four seconds.
    pub fn notify(self, kind: ToastKind, message: impl Into<String>) {
        let id = self.push(kind, message);

        task::spawn_local(async move {
            wait_for_timeout(TOAST_TTL_MS).await;
            self.dismiss(id);
        });
    }

    pub fn success(self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn warning(self, message: impl Into<String>) {
        self.notify(ToastKind::Warning, message);
    }

    pub fn error(self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    fn push(self, kind: ToastKind, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();

        self.next_id.set(id.saturating_add(1));
        self.items.update(|items| {
            items.push(Toast {
                id,
                kind,
                message: message.into(),
            });
        });

        id
    }

    pub fn dismiss(self, id: u64) {
        self.items.update(|items| items.retain(|toast| toast.id != id));
    }
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed stack of toasts in the bottom-right corner.
#[component]
pub fn ToastRegion(toasts: Toasts) -> impl IntoView {
    view! {
        <div
            class="fixed bottom-4 right-4 z-50 flex w-80 flex-col gap-2"
            role="status"
            aria-live="polite"
        >
            <For
                each=move || toasts.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;

                    view! {
                        <div class=format!(
                            "flex items-start justify-between gap-3 rounded-lg border px-4 py-3 text-sm shadow {}",
                            toast.kind.classes(),
                        )>
                            <p>{toast.message}</p>
                            <button
                                type="button"
                                class="text-xs opacity-60 hover:opacity-100"
                                aria-label="Dismiss notification"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
