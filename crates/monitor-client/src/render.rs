use crate::dashboard::{Controls, PageState};
use crate::error::Result;
use crate::query::DEFAULT_NEWS_LIMIT;
use crate::schema::{MoverRow, NewsItem};
use crate::symbols::SymbolTable;
use crate::view::{Figure, MoverView, NewsView, Panel, PERIODS};
use serde::Serialize;
use tera::{Context, Tera};

pub const PAGE_TITLE: &str = "Market Monitor";

const PAGE: &str = "page.html";
const MOVERS: &str = "movers.html";
const NEWS: &str = "news.html";

/// HTML output of the dashboard. Templates are compiled in and autoescaped.
pub struct Renderer {
    tera: Tera,
}

#[derive(Serialize)]
struct AssetOption<'a> {
    label: &'a str,
    ticker: &'a str,
}

#[derive(Serialize)]
struct PageView<'a> {
    title: &'a str,
    controls: &'a Controls,
    assets: Vec<AssetOption<'a>>,
    periods: &'a [&'a str],
    sources: &'a [String],
    default_limit: u32,
    /// Pre-rendered (and escaped) table rows / list entries.
    movers: String,
    movers_status: String,
    news: String,
    news_status: String,
    figure: Option<String>,
    chart_status: String,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (MOVERS, include_str!("../templates/movers.html")),
            (NEWS, include_str!("../templates/news.html")),
            (PAGE, include_str!("../templates/page.html")),
        ])?;
        Ok(Renderer { tera })
    }

    /// `<tr>` rows for the movers table body.
    pub fn movers(&self, rows: &[MoverRow]) -> Result<String> {
        let mut context = Context::new();
        context.insert("movers", &rows.iter().map(MoverView::from).collect::<Vec<_>>());
        Ok(self.tera.render(MOVERS, &context)?)
    }

    /// `<li>` entries for the news list.
    pub fn news(&self, items: &[NewsItem]) -> Result<String> {
        let mut context = Context::new();
        context.insert("news", &items.iter().map(NewsView::from).collect::<Vec<_>>());
        Ok(self.tera.render(NEWS, &context)?)
    }

    /// The whole page for `state`.
    pub fn page(
        &self,
        state: &PageState,
        symbols: &SymbolTable,
        news_sources: &[String],
    ) -> Result<String> {
        let figure = state.chart.as_ref().map(figure_json).transpose()?;

        let view = PageView {
            title: PAGE_TITLE,
            controls: &state.controls,
            assets: symbols
                .entries()
                .iter()
                .map(|e| AssetOption {
                    label: &e.label,
                    ticker: &e.ticker,
                })
                .collect(),
            periods: &PERIODS,
            sources: news_sources,
            default_limit: DEFAULT_NEWS_LIMIT,
            movers: self.movers(&state.movers)?,
            movers_status: state.movers_status.message(Panel::Movers),
            news: self.news(&state.news)?,
            news_status: state.news_status.message(Panel::News),
            figure,
            chart_status: state.chart_status.message(Panel::Chart),
        };

        let context = Context::from_serialize(&view)?;
        Ok(self.tera.render(PAGE, &context)?)
    }
}

/// Figure as JSON that is safe to drop inside a `<script>` element.
pub fn figure_json(figure: &Figure) -> Result<String> {
    let json = serde_json::to_string(figure)?;
    Ok(json.replace("</", "<\\/"))
}
