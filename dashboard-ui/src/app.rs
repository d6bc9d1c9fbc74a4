//! App Root Component

use leptos::*;

use crate::pages::DashboardPage;
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <div class="min-h-screen">
            <header>
                <h1>"GDP per Capita Dashboard"</h1>
            </header>
            <DashboardPage />
        </div>
    }
}
