use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Default,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-small",
            ButtonSize::Default => "btn-default",
            ButtonSize::Large => "btn-large",
        }
    }
}

pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    let mut class = format!("btn {} {}", size.class(), variant.class());
    if !extra.trim().is_empty() {
        class.push(' ');
        class.push_str(extra.trim());
    }
    class
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional, into)] class: String,
    #[prop(into, default = Signal::stored(false))] disabled: Signal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=button_class(variant, size, &class)
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
pub fn GlassCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() {
        "glass-card".to_string()
    } else {
        format!("glass-card {class}")
    };

    view! { <div class=class>{children()}</div> }
}
