//! S-Proof landing page: hero, problem/solution, testimonial, features,
//! pricing, final call to action, footer, and the waitlist modal.

use leptos::prelude::*;

use crate::components::{Button, ButtonSize, ButtonVariant, GlassCard, Nav, WaitlistForm};

#[component]
pub fn LandingPage() -> impl IntoView {
    let show_waitlist = RwSignal::new(false);
    let open_waitlist = Callback::new(move |_: ()| show_waitlist.set(true));
    let close_waitlist = Callback::new(move |_: ()| show_waitlist.set(false));
    // The modal stays open after success so the confirmation is visible
    let waitlist_joined = Callback::new(|_: ()| leptos::logging::log!("waitlist signup confirmed"));

    view! {
        <div class="landing">
            <Nav/>
            <Hero on_join=open_waitlist/>
            <ProblemSolution/>
            <Testimonial/>
            <Features/>
            <Pricing on_join=open_waitlist/>
            <FinalCta on_join=open_waitlist/>
            <Footer/>

            <Show when=move || show_waitlist.get()>
                <div class="modal-backdrop">
                    <div class="modal">
                        <WaitlistForm on_success=waitlist_joined on_close=close_waitlist/>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn Hero(on_join: Callback<()>) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-badge">"⭐ Built by 12+ year print industry veteran"</div>
            <h1>"Stop Losing Money On " <span class="accent">"Proof Revisions"</span></h1>
            <p class="subtitle">
                "Transform email chaos into a professional 3-step workflow. Get client approvals 3x faster "
                "and save $600+ monthly in labor costs."
            </p>

            <div class="cta-buttons">
                <Button size=ButtonSize::Large on_click=on_join>"Join Early Access →"</Button>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Large>
                    "Watch 2-Min Demo (coming soon)"
                </Button>
            </div>

            <div class="hero-checks">
                <span>"✓ No credit card required"</span>
                <span>"✓ 5-minute setup"</span>
            </div>
        </section>
    }
}

#[component]
fn ProblemSolution() -> impl IntoView {
    let problems = [
        ("📧", "Proofs get lost in spam folders and buried inboxes"),
        ("⏰", "3+ days average approval time kills your workflow"),
        ("💵", "Delayed approvals cost $2,000+ monthly in lost revenue"),
        ("📄", "Version confusion leads to expensive reprints"),
    ];
    let steps = [
        ("Upload →", "Drag & drop your proof files"),
        ("Send Link →", "Client gets mobile-friendly portal"),
        ("Get Approval →", "Real-time notifications & billing"),
    ];

    view! {
        <section class="problem-solution">
            <div class="problem">
                <h2>"The Email Nightmare Costing You Money"</h2>
                <ul>
                    {problems
                        .into_iter()
                        .map(|(icon, text)| view! { <li><span class="icon">{icon}</span>{text}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="solution">
                <GlassCard>
                    <h3>"The S-Proof Solution"</h3>
                    <ul>
                        {steps
                            .into_iter()
                            .map(|(step, text)| view! { <li>"✓ " <strong>{step}</strong> " " {text}</li> })
                            .collect_view()}
                    </ul>
                    <p class="result">
                        <strong>"Result:"</strong> " 3 days → 8 hours average approval time"
                    </p>
                </GlassCard>
            </div>
        </section>
    }
}

#[component]
fn Testimonial() -> impl IntoView {
    view! {
        <section class="testimonial">
            <h2>"Built By Print People, For Print People"</h2>
            <GlassCard class="quote">
                <div class="quote-icon">"🏭"</div>
                <blockquote>
                    "\"After 12 years at Cesargraphics, I know exactly how email-based proofing kills profits. "
                    "S-Proof solves the workflow problems I've watched print shops struggle with for over a decade.\""
                </blockquote>
                <cite>"— Isaac Salas, Founder & Computer Science Graduate"</cite>
            </GlassCard>
        </section>
    }
}

#[component]
fn Features() -> impl IntoView {
    let features = [
        (
            "📱",
            "Mobile-First Design",
            "Clients approve proofs from their phones. No apps to download, works in any browser.",
        ),
        (
            "⏰",
            "Real-Time Notifications",
            "Know instantly when clients approve, request changes, or need follow-up.",
        ),
        (
            "💵",
            "Billing Integration",
            "Automatically bill for approved changes. Never lose money on scope creep again.",
        ),
    ];

    view! {
        <section id="demo" class="features">
            <h2>"Why Print Shops Love S-Proof"</h2>
            <div class="feature-grid">
                {features
                    .into_iter()
                    .map(|(icon, title, description)| view! {
                        <GlassCard class="feature">
                            <div class="feature-icon">{icon}</div>
                            <h3>{title}</h3>
                            <p>{description}</p>
                        </GlassCard>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn Pricing(on_join: Callback<()>) -> impl IntoView {
    view! {
        <section id="pricing" class="pricing">
            <h2>"Simple, Transparent Pricing"</h2>
            <div class="plans">
                <GlassCard class="plan">
                    <h3>"Starter"</h3>
                    <div class="price">"FREE"</div>
                    <ul>
                        <li>"✓ Up to 10 proofs/month"</li>
                        <li>"✓ Basic client portal"</li>
                        <li>"✓ Email notifications"</li>
                    </ul>
                    <Button variant=ButtonVariant::Outline class="w-full" on_click=on_join>
                        "Join Waitlist"
                    </Button>
                </GlassCard>

                <GlassCard class="plan plan-featured">
                    <div class="plan-badge">"Most Popular"</div>
                    <h3>"Professional"</h3>
                    <div class="price">"$37" <span>"/month"</span></div>
                    <div class="price-note">"Save 30% with annual plan"</div>
                    <ul>
                        <li>"✓ 100GB storage"</li>
                        <li>"✓ Billing integration"</li>
                        <li>"✓ Custom branding"</li>
                        <li>"✓ Priority support"</li>
                    </ul>
                    <Button class="w-full" on_click=on_join>"Join Early Access"</Button>
                </GlassCard>
            </div>

            <p class="roi">
                "💡 " <strong>"Projected ROI:"</strong>
                " Save $600+ monthly in labor costs vs. email-based workflows."
            </p>
        </section>
    }
}

#[component]
fn FinalCta(on_join: Callback<()>) -> impl IntoView {
    view! {
        <section class="final-cta">
            <h2>"Ready to Transform Your Proof Process?"</h2>
            <p>
                "Join the waitlist for early access. Currently implementing at Cesargraphics "
                "with plans to expand to more printshops, graphic designers, photographers, and agencies across Arizona."
            </p>
            <div class="cta-buttons">
                <Button size=ButtonSize::Large on_click=on_join>"Join Early Access →"</Button>
                <Button variant=ButtonVariant::Outline size=ButtonSize::Large>
                    "Watch Demo Video (coming soon)"
                </Button>
            </div>
            <p class="contact">"Questions? Email isaac@s-proof.app"</p>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div>
                    <div class="nav-brand">"S-Proof"</div>
                    <p>"Professional proofing software built by print industry experts."</p>
                </div>
                <div>
                    <h4>"Product"</h4>
                    <ul>
                        <li><a href="#demo">"Features"</a></li>
                        <li><a href="#pricing">"Pricing"</a></li>
                        <li><a href="#demo">"Demo"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Company"</h4>
                    <ul>
                        <li><a href="#">"About"</a></li>
                        <li><a href="mailto:isaac@s-proof.app">"Contact"</a></li>
                        <li><a href="#">"Support"</a></li>
                    </ul>
                </div>
                <div>
                    <h4>"Legal"</h4>
                    <ul>
                        <li><a href="#">"Privacy"</a></li>
                        <li><a href="#">"Terms"</a></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">"© 2025 S-Proof. Built by Isaac Salas in Phoenix, Arizona."</p>
        </footer>
    }
}
