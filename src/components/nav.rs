use leptos::prelude::*;

use super::ui::{Button, ButtonSize, ButtonVariant};

/// The existing proofing app customers sign in to
pub const LOGIN_URL: &str = "https://proofingapp1.web.app";

fn open_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(LOGIN_URL, "_blank");
        }
    }
}

#[component]
pub fn Nav() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="main-nav">
            <div class="nav-bar">
                <div class="nav-brand">"S-Proof"</div>

                <div class="nav-links">
                    <a href="#pricing">"Pricing"</a>
                    <a href="#demo">"Demo"</a>
                    <Button variant=ButtonVariant::Outline size=ButtonSize::Small on_click=move |_| open_login()>
                        "Login"
                    </Button>
                </div>

                <button
                    class="nav-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    <a href="#pricing" on:click=move |_| menu_open.set(false)>"Pricing"</a>
                    <a href="#demo" on:click=move |_| menu_open.set(false)>"Demo"</a>
                    <Button variant=ButtonVariant::Outline class="w-full" on_click=move |_| open_login()>
                        "Login"
                    </Button>
                </div>
            </Show>
        </nav>
    }
}
