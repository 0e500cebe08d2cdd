mod nav;
mod ui;
mod waitlist_form;

pub use nav::{Nav, LOGIN_URL};
pub use ui::{button_class, Button, ButtonSize, ButtonVariant, GlassCard};
pub use waitlist_form::WaitlistForm;
