use crate::schema::{MoverRow, NewsItem, PriceSeries};
use serde::Serialize;

/// Period codes the backend understands, in the order they are offered.
pub const PERIODS: [&str; 9] = ["1d", "5d", "1mo", "3mo", "6mo", "1y", "2y", "5y", "max"];
pub const DEFAULT_PERIOD: &str = "6mo";

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Movers
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// Visual treatment of a mover, decided by sign alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Gain,
    Loss,
}

impl Tone {
    /// Zero counts as a gain.
    pub fn of(pct_change: f64) -> Self {
        if pct_change >= 0.0 {
            Tone::Gain
        } else {
            Tone::Loss
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Gain => "text-green-600",
            Tone::Loss => "text-red-600",
        }
    }
}

/// A mover row, formatted for display.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MoverView {
    pub asset: String,
    pub pct: String,
    pub last_close: String,
    pub as_of: String,
    pub tone: Tone,
    pub class: &'static str,
}

impl From<&MoverRow> for MoverView {
    fn from(row: &MoverRow) -> Self {
        let tone = Tone::of(row.pct_change);
        MoverView {
            asset: row.asset.clone(),
            pct: format!("{:.2}%", row.pct_change),
            last_close: format!("{:.2}", row.last_close),
            as_of: row.as_of.clone(),
            tone,
            class: tone.css_class(),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// News
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewsView {
    pub title: String,
    pub source: String,
    pub link: String,
    pub published: Option<String>,
    pub summary: Option<String>,
}

impl From<&NewsItem> for NewsView {
    fn from(item: &NewsItem) -> Self {
        NewsView {
            title: item.title.clone(),
            source: item.source.clone(),
            link: item.link.clone(),
            published: item.published.clone(),
            summary: item.summary.clone(),
        }
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Status lines
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// The three regions of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Movers,
    News,
    Chart,
}

impl Panel {
    fn noun(self) -> &'static str {
        match self {
            Panel::Movers => "movers",
            Panel::News => "news items",
            Panel::Chart => "price points",
        }
    }
}

/// Where the last run of a flow ended up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Loaded(usize),
    Empty,
    Failed,
    /// Rejected locally before any request was sent.
    Invalid(String),
}

impl Status {
    pub fn loaded(count: usize) -> Self {
        if count == 0 {
            Status::Empty
        } else {
            Status::Loaded(count)
        }
    }

    pub fn message(&self, panel: Panel) -> String {
        let noun = panel.noun();
        match self {
            Status::Idle => String::new(),
            Status::Loading => format!("Loading {noun}..."),
            Status::Loaded(n) => format!("Loaded {n} {noun}."),
            Status::Empty => format!("No {noun} found."),
            Status::Failed => format!("Failed to load {noun}."),
            Status::Invalid(reason) => reason.clone(),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Status::Failed | Status::Invalid(_))
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Chart
//
///////////////////////////////////////////////////////////////////////////////////////////////////////

/// A Plotly figure: `Plotly.newPlot(div, figure.data, figure.layout, figure.config)`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    pub config: PlotConfig,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub mode: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    pub margin: Margin,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PlotConfig {
    pub responsive: bool,
}

impl Figure {
    /// Closing prices as a single line named after the ticker.
    pub fn line(series: &PriceSeries, ticker: &str) -> Self {
        Figure {
            data: vec![Trace {
                x: series.index.clone(),
                y: series.close.clone(),
                mode: "lines",
                name: ticker.to_string(),
            }],
            layout: Layout {
                margin: Margin {
                    l: 40,
                    r: 20,
                    t: 10,
                    b: 40,
                },
            },
            config: PlotConfig { responsive: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pct_change: f64) -> MoverRow {
        MoverRow {
            asset: "DAX".into(),
            pct_change,
            last_close: 18180.456,
            as_of: "2024-05-17".into(),
            symbol: None,
            prev_close: None,
        }
    }

    #[test]
    fn tone_boundary_is_inclusive_at_zero() {
        assert_eq!(Tone::of(0.0), Tone::Gain);
        assert_eq!(Tone::of(-0.0), Tone::Gain);
        assert_eq!(Tone::of(0.0001), Tone::Gain);
        assert_eq!(Tone::of(-0.0001), Tone::Loss);
        assert_eq!(Tone::of(-12.5), Tone::Loss);
    }

    #[test]
    fn mover_view_formats_two_decimals() {
        let view = MoverView::from(&row(-1.23456));

        assert_eq!(view.pct, "-1.23%");
        assert_eq!(view.last_close, "18180.46");
        assert_eq!(view.class, "text-red-600");
    }

    #[test]
    fn status_messages_tell_empty_from_counted() {
        assert_eq!(Status::loaded(0), Status::Empty);
        assert_eq!(Status::loaded(4), Status::Loaded(4));
        assert_eq!(Status::Empty.message(Panel::News), "No news items found.");
        assert_eq!(Status::Loaded(4).message(Panel::News), "Loaded 4 news items.");
        assert_ne!(
            Status::Failed.message(Panel::News),
            Status::Empty.message(Panel::News)
        );
    }

    #[test]
    fn only_failed_and_rejected_runs_are_failures() {
        assert!(Status::Failed.is_failure());
        assert!(Status::Invalid("Unknown symbol: X".into()).is_failure());
        assert!(!Status::Empty.is_failure());
        assert!(!Status::Loaded(3).is_failure());
        assert!(!Status::Loading.is_failure());
    }

    #[test]
    fn line_figure_serializes_to_plotly_shape() {
        let series = PriceSeries {
            index: vec!["2024-05-16".into(), "2024-05-17".into()],
            close: vec![65231.58, 67051.88],
            ..Default::default()
        };
        let figure = Figure::line(&series, "BTC-USD");
        let json = serde_json::to_value(&figure).unwrap();

        assert_eq!(json["data"][0]["name"], "BTC-USD");
        assert_eq!(json["data"][0]["mode"], "lines");
        assert_eq!(json["data"][0]["x"][1], "2024-05-17");
        assert_eq!(json["layout"]["margin"]["l"], 40);
        assert_eq!(json["config"]["responsive"], true);
    }
}
