//! Loading Component

use leptos::*;

/// Loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading-spinner" /> }
}
