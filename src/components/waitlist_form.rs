use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::ui::{Button, ButtonSize, ButtonVariant, GlassCard};
use crate::analytics;
use crate::models::{BusinessType, SubmissionState, WaitlistRequest};
use crate::server_fns::JoinWaitlist;

#[component]
pub fn WaitlistForm(
    /// Runs once, when the signup is accepted
    #[prop(optional, into)]
    on_success: Option<Callback<()>>,
    /// Shows a close button when set
    #[prop(optional, into)]
    on_close: Option<Callback<()>>,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let email = RwSignal::new(String::new());
    let company_name = RwSignal::new(String::new());
    let business_type = RwSignal::new(String::new());
    let state = RwSignal::new(SubmissionState::Idle);
    let join_action = ServerAction::<JoinWaitlist>::new();

    Effect::new(move |_| {
        if let Some(outcome) = join_action.value().get() {
            let accepted = state.try_update(|s| s.finish(outcome)).unwrap_or(false);
            if accepted {
                let business_type = BusinessType::from_str(&business_type.get_untracked())
                    .unwrap_or_default();
                analytics::track_waitlist_signup(business_type);
                if let Some(on_success) = on_success {
                    on_success.run(());
                }
            }
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let request = WaitlistRequest {
            email: email.get_untracked(),
            company_name: company_name.get_untracked(),
            business_type: business_type.get_untracked(),
        };
        // Invalid input lands in `state` as an error; nothing is sent
        if let Some(Ok(Some(signup))) = state.try_update(|s| s.begin(&request)) {
            join_action.dispatch(JoinWaitlist {
                email: signup.email.as_ref().to_string(),
                company_name: signup.company_name,
                business_type: signup.business_type.as_str().to_string(),
            });
        }
    };

    let edited = move || state.update(SubmissionState::edit);
    let inputs_disabled = move || state.with(SubmissionState::is_submitting);
    let submit_disabled =
        Signal::derive(move || email.with(|email| !state.with(|s| s.can_submit(email))));

    let close_button = move || {
        on_close.map(|on_close| {
            view! {
                <button class="card-close" aria-label="Close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            }
        })
    };

    view! {
        <GlassCard class=format!("waitlist {class}").trim_end().to_string()>
            {close_button}
            <Show
                when=move || state.with(SubmissionState::is_success)
                fallback=move || view! {
                    <div class="waitlist-intro">
                        <div class="waitlist-icon">"🚀"</div>
                        <h3>"Join Early Access"</h3>
                        <p>"Be among the first 100 businesses to get S-Proof at launch pricing"</p>
                        <p class="waitlist-perks">
                            "⚡ 50% off for early adopters • 🎯 Priority setup assistance • 📞 Direct founder access"
                        </p>
                    </div>

                    <form class="waitlist-form" on:submit=on_submit>
                        <div class="form-group">
                            <label for="waitlist-email">
                                "Work Email* " <span class="hint">"(We'll never spam you)"</span>
                            </label>
                            <input
                                type="email"
                                id="waitlist-email"
                                name="email"
                                required
                                placeholder="your.email@company.com"
                                prop:value=move || email.get()
                                disabled=inputs_disabled
                                on:input=move |ev| {
                                    email.set(event_target_value(&ev));
                                    edited();
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="waitlist-company">
                                "Company Name " <span class="hint">"(Optional)"</span>
                            </label>
                            <input
                                type="text"
                                id="waitlist-company"
                                name="company_name"
                                placeholder="Acme Print Shop"
                                prop:value=move || company_name.get()
                                disabled=inputs_disabled
                                on:input=move |ev| {
                                    company_name.set(event_target_value(&ev));
                                    edited();
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="waitlist-business-type">
                                "Business Type " <span class="hint">"(Helps us prioritize features)"</span>
                            </label>
                            <select
                                id="waitlist-business-type"
                                name="business_type"
                                prop:value=move || business_type.get()
                                disabled=inputs_disabled
                                on:change=move |ev| {
                                    business_type.set(event_target_value(&ev));
                                    edited();
                                }
                            >
                                {BusinessType::all()
                                    .into_iter()
                                    .map(|bt| view! { <option value=bt.as_str()>{bt.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>

                        {move || state.with(|s| s.error().map(|err| view! {
                            <div class="form-error" role="alert">"⚠️ " {err.to_string()}</div>
                        }))}

                        <Button
                            button_type="submit"
                            size=ButtonSize::Large
                            class="w-full"
                            disabled=submit_disabled
                        >
                            {move || if state.with(SubmissionState::is_submitting) {
                                view! { <span class="spinner" aria-hidden="true"></span> "Joining Waitlist..." }.into_any()
                            } else {
                                view! { "Join Early Access →" }.into_any()
                            }}
                        </Button>

                        <div class="form-footnote">
                            "No spam, ever. We'll only email you when S-Proof is ready."
                            <br/>
                            <span>"Built by Isaac Salas • 12+ years in print industry"</span>
                        </div>
                    </form>
                }
            >
                <SignupConfirmation on_close=on_close/>
            </Show>
        </GlassCard>
    }
}

#[component]
fn SignupConfirmation(on_close: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="waitlist-success">
            <div class="success-icon">"✅"</div>
            <h3>"You're on the list!"</h3>
            <p>"Welcome to S-Proof early access! We'll notify you when it's ready for your business."</p>

            <div class="success-panel">
                <strong>"What happens next:"</strong>
                <ul>
                    <li>"📧 Demo video in your inbox this week"</li>
                    <li>"🚀 Early access invitation in 2-3 weeks"</li>
                    <li>"💰 50% launch discount for first 100 customers"</li>
                    <li>"🎯 Priority setup assistance"</li>
                </ul>
            </div>

            <div class="success-panel">
                <strong>"🎁 Your Early Access Benefits:"</strong>
                <ul>
                    <li>"✓ 50% off professional plan ($48.50/month vs $97)"</li>
                    <li>"✓ Free setup and onboarding call"</li>
                    <li>"✓ Direct access to Isaac (the founder)"</li>
                    <li>"✓ Input on product features and roadmap"</li>
                </ul>
            </div>

            <div class="success-panel">
                <strong>"Questions or want to chat?"</strong>
                <ul>
                    <li>"📧 Email: isaac@s-proof.app"</li>
                    <li>"📞 Call: (480) 555-PROOF"</li>
                    <li>"💬 LinkedIn: isaac-salas-74825819a"</li>
                </ul>
            </div>

            {on_close.map(|on_close| view! {
                <Button variant=ButtonVariant::Outline class="w-full" on_click=on_close>
                    "Close"
                </Button>
            })}
        </div>
    }
}
