use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/sproof.css"/>
        <Title text="S-Proof - Proof Approvals for Print Shops"/>
        <Meta name="description" content="Transform email chaos into a professional 3-step proof approval workflow"/>

        <Router>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
