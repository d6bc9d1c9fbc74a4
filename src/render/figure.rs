//! Chart Figure Model
//!
//! The subset of Plotly's figure schema the dashboard draws with. A
//! [`Figure`] serialises to exactly the `data` / `layout` pair handed to
//! `Plotly.newPlot`, so rendering in the browser and in static reports
//! share one description of every chart.

use serde::Serialize;

/// A complete chart: traces plus layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// A figure without traces whose title carries the message
    pub fn placeholder(mut layout: Layout, message: &str) -> Self {
        layout.title = Some(Title {
            text: message.to_string(),
            font: Some(Font::sized(14.0).color(super::theme::TEXT_SECONDARY)),
            x: None,
            xanchor: None,
        });
        Self {
            data: Vec::new(),
            layout,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn title(&self) -> Option<&str> {
        self.layout.title.as_ref().map(|t| t.text.as_str())
    }

    /// The `{ data, layout }` object as JSON text
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// JSON text of the `data` array
    pub fn data_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.data)
    }

    /// JSON text of the `layout` object
    pub fn layout_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.layout)
    }
}

/// One series of a figure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Bar(BarTrace),
    Pie(PieTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub x: Vec<i32>,
    /// `None` points are drawn as gaps
    pub y: Vec<Option<f64>>,
    pub mode: &'static str,
    pub name: String,
    pub line: Line,
    pub marker: Marker,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<f64>,
    pub y: Vec<String>,
    pub orientation: &'static str,
    pub marker: Marker,
    pub text: Vec<String>,
    pub textposition: &'static str,
    pub insidetextanchor: &'static str,
    pub textfont: Font,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    pub hole: f64,
    pub textinfo: &'static str,
    pub textfont: Font,
    pub textposition: &'static str,
    pub marker: Marker,
    pub hovertemplate: String,
    pub sort: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub shape: &'static str,
    pub width: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    /// Per-bar colours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<&'static str>>,
    /// Per-slice colours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Stroke>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
}

impl Font {
    pub fn sized(size: f64) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<&'static str>,
}

impl Title {
    /// Centered title in the primary text colour
    pub fn centered(text: impl Into<String>, size: f64) -> Self {
        Self {
            text: text.into(),
            font: Some(Font::sized(size).color(super::theme::TEXT_PRIMARY)),
            x: Some(0.5),
            xanchor: Some("center"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gridcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linecolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zeroline: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showspikes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spikecolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<&'static str>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xanchor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yanchor: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub l: f64,
    pub r: f64,
    pub t: f64,
    pub b: f64,
    pub pad: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_type_tag() {
        let trace = Trace::Pie(PieTrace {
            values: vec![1.0, 3.0],
            labels: vec!["A".into(), "B".into()],
            hole: 0.5,
            textinfo: "percent",
            textfont: Font::sized(11.0),
            textposition: "inside",
            marker: Marker::default(),
            hovertemplate: String::new(),
            sort: false,
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["type"], json!("pie"));
        assert_eq!(value["hole"], json!(0.5));
        assert_eq!(value["sort"], json!(false));
        assert!(value["marker"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_placeholder_has_no_traces() {
        let figure = Figure::placeholder(Layout::default(), "No data");
        assert!(figure.is_empty());
        assert_eq!(figure.title(), Some("No data"));
        assert_eq!(figure.data_json().unwrap(), "[]");
    }

    #[test]
    fn test_gaps_serialize_as_null() {
        let trace = Trace::Scatter(ScatterTrace {
            x: vec![2019, 2020],
            y: vec![Some(1.5), None],
            mode: "lines+markers",
            name: "Brazil".into(),
            line: Line {
                shape: "spline",
                width: 2.5,
                color: "#9D4EDD",
            },
            marker: Marker::default(),
            hovertemplate: String::new(),
        });

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["y"], json!([1.5, null]));
        assert_eq!(value["type"], json!("scatter"));
    }
}
