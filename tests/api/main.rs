#![cfg(feature = "ssr")]

mod formspree;
mod helpers;
mod waitlist_flow;
