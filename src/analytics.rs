//! Browser-side conversion tracking.
//!
//! Events go to Google Analytics' `gtag` when the page has loaded it. Sending is
//! fire-and-forget: a missing or failing `gtag` never affects the form.

use crate::models::BusinessType;

pub fn track_waitlist_signup(business_type: BusinessType) {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = send_gtag_event(business_type.analytics_label()) {
            leptos::logging::debug_warn!("waitlist_signup event dropped: {err:?}");
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = business_type;
}

#[cfg(feature = "hydrate")]
fn send_gtag_event(label: &str) -> Result<(), wasm_bindgen::JsValue> {
    use js_sys::{Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return Ok(());
    };
    let gtag = Reflect::get(&window, &JsValue::from_str("gtag"))?;
    let Some(gtag) = gtag.dyn_ref::<Function>() else {
        // analytics not loaded on this page
        return Ok(());
    };

    let params = Object::new();
    Reflect::set(&params, &"event_category".into(), &"conversion".into())?;
    Reflect::set(&params, &"event_label".into(), &label.into())?;
    Reflect::set(&params, &"value".into(), &JsValue::from_f64(1.0))?;

    gtag.call3(&JsValue::NULL, &"event".into(), &"waitlist_signup".into(), &params)?;
    Ok(())
}
