//! Dashboard Page
//!
//! Filter controls above the six panels. Startup populates the controls and
//! refreshes once; afterwards the Apply button and the indicator selector
//! each trigger a refresh.

use leptos::*;

use gdpscope::dashboard::{initialize, PanelId};

use crate::components::{Filters, PanelMount};
use crate::state::{use_global_state, GlobalState};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_global_state();

    // Populate the controls on mount, then draw the default selection
    create_effect(move |_| {
        spawn_local(async move {
            let dashboard = state.dashboard.get_value();
            let options = initialize(dashboard.api()).await;
            state.apply_options(options);
            refresh(state).await;
        });
    });

    let trigger = move |_: ()| spawn_local(refresh(state));

    view! {
        <Filters on_apply=trigger on_indicator_change=trigger />

        <div class="panels">
            {PanelId::ALL
                .into_iter()
                .map(|id| view! { <PanelMount id=id /> })
                .collect_view()}
        </div>
    }
}

/// Refresh from the current control values
async fn refresh(state: GlobalState) {
    let Some(filter) = state.begin_refresh() else {
        return;
    };

    let dashboard = state.dashboard.get_value();
    let outcome = dashboard.refresh(&filter).await;
    state.finish_refresh(outcome);
}
