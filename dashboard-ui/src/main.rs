//! gdpscope Dashboard
//!
//! Single-page GDP per capita dashboard built with Leptos (WASM).
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. The filter controls feed
//! a [`gdpscope::FilterState`]; every refresh goes through the shared
//! [`gdpscope::Dashboard`] orchestrator and the resulting panels are drawn
//! with Plotly or injected as HTML tables.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    tracing_wasm::set_as_global_default();

    mount_to_body(|| view! { <app::App /> });
}
