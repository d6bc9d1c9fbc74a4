//! Filter Controls
//!
//! Country multi-select, year bound inputs and the indicator selector. The
//! controls only write the raw values into [`GlobalState`]; the page decides
//! when to refresh.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};

use crate::state::{use_global_state, GlobalState};

#[component]
pub fn Filters(
    /// Apply button pressed
    #[prop(into)]
    on_apply: Callback<()>,
    /// Indicator selection changed
    #[prop(into)]
    on_indicator_change: Callback<()>,
) -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="filters">
            <CountrySelect state=state />

            <div>
                <label for="min-year">"From"</label>
                <input
                    id="min-year"
                    type="number"
                    prop:value=move || state.min_year.get()
                    on:input=move |ev| {
                        state.min_year.set(event_target_value(&ev));
                        state.sync_year_label();
                    }
                />
            </div>

            <div>
                <label for="max-year">"To"</label>
                <input
                    id="max-year"
                    type="number"
                    prop:value=move || state.max_year.get()
                    on:input=move |ev| {
                        state.max_year.set(event_target_value(&ev));
                        state.sync_year_label();
                    }
                />
            </div>

            <div>
                <label>"Years"</label>
                <span class="year-label">{move || state.year_label.get()}</span>
            </div>

            <div>
                <label for="indicator">"Additional indicator"</label>
                <select
                    id="indicator"
                    on:change=move |ev| {
                        state.indicator.set(event_target_value(&ev));
                        on_indicator_change.call(());
                    }
                >
                    <For
                        each=move || state.indicators.get()
                        key=|option| option.value.clone()
                        children=move |option| {
                            let value = option.value.clone();
                            view! {
                                <option
                                    value=option.value
                                    prop:selected=move || state.indicator.with(|i| *i == value)
                                >
                                    {option.label}
                                </option>
                            }
                        }
                    />
                </select>
            </div>

            <button on:click=move |_| on_apply.call(())>"Apply"</button>
        </div>
    }
}

#[component]
fn CountrySelect(state: GlobalState) -> impl IntoView {
    view! {
        <div>
            <label for="countries">"Countries"</label>
            <select
                id="countries"
                multiple=true
                on:change=move |ev| {
                    let select = event_target::<HtmlSelectElement>(&ev);
                    state.selected_countries.set(selected_values(&select));
                }
            >
                <For
                    each=move || state.countries.get()
                    key=|country| country.clone()
                    children=move |country| {
                        let value = country.clone();
                        view! {
                            <option
                                value=country.clone()
                                prop:selected=move || {
                                    state.selected_countries.with(|s| s.contains(&value))
                                }
                            >
                                {country}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Values of the selected options, in list order
fn selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let options = select.selected_options();
    (0..options.length())
        .filter_map(|i| options.item(i))
        .filter_map(|element| element.dyn_into::<HtmlOptionElement>().ok())
        .map(|option| option.value())
        .collect()
}
