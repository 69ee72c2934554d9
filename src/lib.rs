//! # site-script
//!
//! WebAssembly behavior layer for the static portfolio site. Enhances
//! server-rendered HTML pages with theme switching, mobile navigation,
//! smooth in-page scrolling, the artifact filter, and the placeholder
//! contact form.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme model and the testable [`theme::controller::ThemeController`] |
//! | [`nav`] | Mobile nav menu state and active-link matching |
//! | [`scroll`] | In-page anchor target resolution |
//! | [`filter`] | Artifact grid filter selection |
//! | [`contact`] | Contact form validation and notification text |
//! | [`config`] | DOM conventions with per-page overrides |
//! | [`error`] | Crate error type |
//! | `browser` | `web-sys` wiring and the WASM entry point (feature `browser`) |
//!
//! Everything outside `browser` is plain Rust and runs under native
//! `cargo test`.

pub mod config;
pub mod contact;
pub mod error;
pub mod filter;
pub mod nav;
pub mod scroll;
pub mod theme;

#[cfg(feature = "browser")]
pub mod browser;
