//! Chart theme: palette and the base layouts every chart starts from.

use super::figure::{Axis, Font, Layout, Legend, Margin};

pub const BACKGROUND_PRIMARY: &str = "#161A27";
pub const BACKGROUND_SECONDARY: &str = "#1E2233";
pub const PLOT_BACKGROUND: &str = "rgba(0,0,0,0)";
pub const TEXT_PRIMARY: &str = "#EAEAEA";
pub const TEXT_SECONDARY: &str = "#A0A0B5";
pub const ACCENT_SECONDARY: &str = "#5A189A";
pub const GRID_LINES: &str = "#3A3F58";
pub const FONT_FAMILY: &str = "Inter, Arial, sans-serif";

/// Series colours, assigned by position and cycled
pub const PALETTE: [&str; 6] = [
    "#9D4EDD", // Purple (primary accent)
    "#C77DFF", // Lavender
    "#F72585", // Pink
    "#00BFFF", // Sky blue
    "#32CD32", // Lime
    "#FFD700", // Gold
];

/// Palette colour for the given position
pub fn color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn axis() -> Axis {
    Axis {
        gridcolor: Some(GRID_LINES),
        linecolor: Some(GRID_LINES),
        zeroline: Some(false),
        tickfont: Some(Font::sized(10.0).color(TEXT_SECONDARY)),
        showspikes: Some(true),
        spikecolor: Some(ACCENT_SECONDARY),
        ..Axis::default()
    }
}

/// Axis with the theme styling and a title
pub fn titled_axis(title: impl Into<String>) -> Axis {
    Axis {
        title: Some(title.into()),
        ..axis()
    }
}

/// Layout shared by the line charts
pub fn common_layout() -> Layout {
    Layout {
        font: Some(Font {
            family: Some(FONT_FAMILY),
            color: Some(TEXT_PRIMARY),
            size: Some(11.0),
            weight: None,
        }),
        paper_bgcolor: Some(PLOT_BACKGROUND),
        plot_bgcolor: Some(PLOT_BACKGROUND),
        xaxis: Some(axis()),
        yaxis: Some(axis()),
        legend: Some(Legend {
            font: Some(Font::sized(10.0).color(TEXT_SECONDARY)),
            bgcolor: Some(PLOT_BACKGROUND),
            orientation: Some("h"),
            x: Some(0.5),
            xanchor: Some("center"),
            y: Some(1.01),
            yanchor: Some("bottom"),
        }),
        margin: Some(Margin {
            l: 60.0,
            r: 25.0,
            t: 70.0,
            b: 50.0,
            pad: 5.0,
        }),
        hovermode: Some("x unified"),
        ..Layout::default()
    }
}

/// Layout shared by the bar and donut comparison charts
pub fn comparison_layout() -> Layout {
    Layout {
        font: Some(Font {
            family: Some(FONT_FAMILY),
            color: Some(TEXT_PRIMARY),
            size: Some(11.0),
            weight: None,
        }),
        paper_bgcolor: Some(PLOT_BACKGROUND),
        plot_bgcolor: Some(PLOT_BACKGROUND),
        legend: Some(Legend {
            font: Some(Font::sized(10.0).color(TEXT_SECONDARY)),
            bgcolor: Some(PLOT_BACKGROUND),
            ..Legend::default()
        }),
        margin: Some(Margin {
            l: 40.0,
            r: 20.0,
            t: 60.0,
            b: 40.0,
            pad: 2.0,
        }),
        ..Layout::default()
    }
}
