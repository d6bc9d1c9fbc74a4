//! Plotly JS Interop
//!
//! Plotly is loaded globally by `index.html`; figures cross the boundary as
//! JSON parsed on the JS side.

use gdpscope::render::Figure;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot)]
    fn plotly_new_plot(root: &web_sys::HtmlElement, data: &JsValue, layout: &JsValue, config: &JsValue);

    #[wasm_bindgen(js_namespace = Plotly, js_name = purge)]
    fn plotly_purge(root: &web_sys::HtmlElement);
}

fn parse_json(json: &str) -> Result<JsValue, String> {
    js_sys::JSON::parse(json).map_err(|e| format!("{:?}", e))
}

/// Draw a figure into the element, replacing whatever it showed
pub fn draw(root: &web_sys::HtmlElement, figure: &Figure) -> Result<(), String> {
    let data = figure.data_json().map_err(|e| e.to_string())?;
    let layout = figure.layout_json().map_err(|e| e.to_string())?;

    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &JsValue::from_str("responsive"), &JsValue::TRUE)
        .map_err(|e| format!("{:?}", e))?;

    root.set_inner_html("");
    plotly_new_plot(root, &parse_json(&data)?, &parse_json(&layout)?, &config);
    Ok(())
}

/// Release the Plotly state attached to the element, if any
pub fn purge(root: &web_sys::HtmlElement) {
    if root.class_list().contains("js-plotly-plot") {
        plotly_purge(root);
    }
}
