//! Influencers web client

use leptos::prelude::*;

use influencers_client::InfluencersClient;

mod create;
mod debounce;
mod influencers;
mod timer;
mod toasts;

use toasts::{ToastRegion, Toasts};

const DEFAULT_API_URL: &str = "http://localhost:3000";

/// API root, fixed when the bundle is built.
fn api_url() -> &'static str {
    option_env!("INFLUENCERS_API_URL").unwrap_or(DEFAULT_API_URL)
}

#[component]
fn Navbar() -> impl IntoView {
    view! {
        <header class="border-b border-slate-200 bg-white">
            <nav class="mx-auto flex max-w-4xl items-center justify-between px-4 py-3">
                <span class="text-lg font-semibold tracking-tight">"Influencers"</span>
                <a href="/" class="text-sm text-slate-600 hover:text-slate-900">"Home"</a>
            </nav>
        </header>
    }
}

/// App shell.
#[component]
fn App() -> impl IntoView {
    let toasts = Toasts::new();

    let content = match InfluencersClient::new(api_url()) {
        Ok(client) => view! { <influencers::InfluencersPage client=client toasts=toasts /> }.into_any(),
        Err(error) => view! {
            <div class="rounded-lg border border-red-200 bg-red-50 p-4">
                <p class="text-sm text-red-700">{error.to_string()}</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <Navbar />
        <main class="mx-auto min-h-screen max-w-4xl px-4 py-6 text-slate-900">{content}</main>
        <ToastRegion toasts=toasts />
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_is_absolute() {
        assert!(
            InfluencersClient::new(api_url()).is_ok(),
            "build-time API URL must parse"
        );
    }
}
