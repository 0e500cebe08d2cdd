pub mod formspree;
