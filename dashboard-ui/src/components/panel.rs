//! Panel Mount Component
//!
//! One mount point per [`PanelId`]. Charts are drawn imperatively with
//! Plotly into a dedicated element; notices, tables and the loading state
//! are rendered by Leptos next to it.

use leptos::*;

use gdpscope::dashboard::{Panel, PanelId};

use crate::components::{plotly, Loading};
use crate::state::use_global_state;

#[component]
pub fn PanelMount(id: PanelId) -> impl IntoView {
    let panels = use_global_state().view;
    let chart_ref = create_node_ref::<html::Div>();

    // Redraw the chart whenever a new view is applied
    create_effect(move |_| {
        let Some(root) = chart_ref.get() else {
            return;
        };
        let root: &web_sys::HtmlElement = &root;

        panels.with(|view| match view.as_ref().map(|v| v.panel(id)) {
            Some(Panel::Chart(figure)) => {
                root.set_hidden(false);
                if let Err(e) = plotly::draw(root, figure) {
                    tracing::error!(panel = id.dom_id(), error = %e, "Failed to draw chart");
                }
            }
            _ => {
                plotly::purge(root);
                root.set_hidden(true);
            }
        });
    });

    let content = move || {
        panels.with(|view| match view.as_ref().map(|v| v.panel(id)) {
            None | Some(Panel::Loading) => view! { <Loading /> }.into_view(),
            Some(Panel::Notice(text)) => view! { <p class="notice">{text.clone()}</p> }.into_view(),
            Some(Panel::Html(html)) => view! { <div inner_html=html.clone() /> }.into_view(),
            Some(Panel::Chart(_)) => ().into_view(),
        })
    };

    view! {
        <section class="panel" id=format!("{}-panel", id.dom_id())>
            <h2>{id.heading()}</h2>
            <div id=id.dom_id() class="chart" node_ref=chart_ref hidden=true />
            {content}
        </section>
    }
}
