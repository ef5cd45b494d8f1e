use crate::client_ext::Backend;
use crate::query::{self, NewsQuery};
use crate::schema::{MoverRow, NewsItem, PriceSeries};
use crate::seq::{Sequencer, Ticket};
use crate::symbols::SymbolTable;
use crate::view::{Figure, Status, DEFAULT_PERIOD};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Values of the page's input controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Controls {
    /// Watchlist filter for movers; `None` means every asset.
    pub watchlist: Option<String>,
    /// Asset label selected for the chart.
    pub symbol: String,
    pub period: String,
    pub news_query: String,
    pub news_sources: String,
    /// Raw text of the limit control; blank means the default limit.
    pub news_limit: String,
}

impl Controls {
    /// Blank controls with the chart pointed at the first label of `symbols`.
    pub fn for_table(symbols: &SymbolTable) -> Self {
        Controls {
            symbol: symbols.labels().next().unwrap_or_default().to_string(),
            ..Default::default()
        }
    }
}

impl Default for Controls {
    fn default() -> Self {
        Controls {
            watchlist: None,
            symbol: String::new(),
            period: DEFAULT_PERIOD.to_string(),
            news_query: String::new(),
            news_sources: String::new(),
            news_limit: String::new(),
        }
    }
}

/// Everything currently on the page.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    pub controls: Controls,
    pub movers: Vec<MoverRow>,
    pub movers_status: Status,
    pub news: Vec<NewsItem>,
    pub news_status: Status,
    pub chart: Option<Figure>,
    pub chart_status: Status,
}

/// How a single run of a flow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The response was rendered.
    Applied,
    /// A newer run of the same flow was issued meanwhile; the response was dropped.
    Superseded,
    /// The run failed; the status line says why.
    Failed,
    /// Nothing to do (e.g. a row that no longer exists was activated).
    Skipped,
}

/// The dashboard page: its controls, its rendered regions and the three
/// flows that fill them.
///
/// Flows never return errors. A failure is logged, the region is cleared and
/// its status line reports it. Each flow numbers its runs, and only the most
/// recently issued run may write to the page.
pub struct Dashboard<B> {
    backend: B,
    symbols: Arc<SymbolTable>,
    state: Mutex<PageState>,
    movers_seq: Sequencer,
    news_seq: Sequencer,
    chart_seq: Sequencer,
}

impl<B> Dashboard<B>
where
    B: Backend + Send + Sync,
{
    pub fn new(backend: B, symbols: Arc<SymbolTable>, controls: Controls) -> Self {
        Dashboard {
            backend,
            symbols,
            state: Mutex::new(PageState {
                controls,
                ..Default::default()
            }),
            movers_seq: Sequencer::new(),
            news_seq: Sequencer::new(),
            chart_seq: Sequencer::new(),
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy of the current page.
    pub async fn snapshot(&self) -> PageState {
        self.state.lock().await.clone()
    }

    /// Change control values, as a user typing or picking from a select would.
    pub async fn update_controls<F>(&self, f: F)
    where
        F: FnOnce(&mut Controls),
    {
        f(&mut self.state.lock().await.controls);
    }

    /// Run all three flows concurrently.
    pub async fn load_all(&self) -> (Outcome, Outcome, Outcome) {
        futures::join!(self.load_movers(), self.load_news(), self.draw_chart())
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Fetch the movers (filtered by the watchlist control) and replace the table.
    pub async fn load_movers(&self) -> Outcome {
        let (ticket, path) = {
            let mut state = self.state.lock().await;
            state.movers_status = Status::Loading;
            let path = query::movers_path(state.controls.watchlist.as_deref());
            (self.movers_seq.issue(), path)
        };

        let result = self.backend.get_json::<Vec<MoverRow>>(&path).await;

        let mut state = self.state.lock().await;
        if self.is_stale(&self.movers_seq, ticket, "movers") {
            return Outcome::Superseded;
        }
        match result {
            Ok(rows) => {
                log::info!("{} movers loaded {ticket}", rows.len());
                state.movers_status = Status::loaded(rows.len());
                state.movers = rows;
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to load movers from {path}: {e}");
                state.movers.clear();
                state.movers_status = Status::Failed;
                Outcome::Failed
            }
        }
    }

    /// Activate the `index`-th mover row: point the chart at its asset and redraw.
    pub async fn select_mover(&self, index: usize) -> Outcome {
        {
            let mut state = self.state.lock().await;
            let Some(asset) = state.movers.get(index).map(|row| row.asset.clone()) else {
                log::warn!("no mover row at position {index}");
                return Outcome::Skipped;
            };
            log::debug!("mover row {index} selected: {asset}");
            state.controls.symbol = asset;
        }
        self.draw_chart().await
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Fetch the news matching the query/sources/limit controls and replace the list.
    pub async fn load_news(&self) -> Outcome {
        let (ticket, query) = {
            let mut state = self.state.lock().await;
            let ticket = self.news_seq.issue();
            state.news.clear();

            let controls = &state.controls;
            let query = NewsQuery::from_controls(
                &controls.news_query,
                &controls.news_sources,
                &controls.news_limit,
            );
            match query {
                Ok(query) => {
                    state.news_status = Status::Loading;
                    (ticket, query)
                }
                Err(e) => {
                    log::warn!("news request rejected: {e}");
                    state.news_status = Status::Invalid(e.to_string());
                    return Outcome::Failed;
                }
            }
        };

        let path = query.path();
        let result = self.backend.get_json::<Vec<NewsItem>>(&path).await;

        let mut state = self.state.lock().await;
        if self.is_stale(&self.news_seq, ticket, "news") {
            return Outcome::Superseded;
        }
        match result {
            Ok(items) => {
                log::info!("{} news items loaded {ticket}", items.len());
                state.news_status = Status::loaded(items.len());
                state.news = items;
                Outcome::Applied
            }
            Err(e) => {
                log::error!("Failed to load news from {path}: {e}");
                state.news.clear();
                state.news_status = Status::Failed;
                Outcome::Failed
            }
        }
    }

    ////////////////////////////////////////////////////////////////////////////////////////////////////

    /// Resolve the selected label, fetch its price series for the selected
    /// period and replace the chart.
    pub async fn draw_chart(&self) -> Outcome {
        let (ticket, ticker, path) = {
            let mut state = self.state.lock().await;
            let ticket = self.chart_seq.issue();

            let ticker = match self.symbols.resolve(&state.controls.symbol) {
                Ok(ticker) => ticker.to_string(),
                Err(e) => {
                    log::warn!("chart request rejected: {e}");
                    state.chart = None;
                    state.chart_status =
                        Status::Invalid(format!("Unknown symbol: {}", state.controls.symbol));
                    return Outcome::Failed;
                }
            };
            state.chart_status = Status::Loading;
            let path = query::prices_path(&ticker, &state.controls.period);
            (ticket, ticker, path)
        };

        let result = self
            .backend
            .get_json::<PriceSeries>(&path)
            .await
            .and_then(|series| series.validate().map(|_| series));

        let mut state = self.state.lock().await;
        if self.is_stale(&self.chart_seq, ticket, "chart") {
            return Outcome::Superseded;
        }
        match result {
            Ok(series) if series.is_empty() => {
                log::warn!("[{ticker}] no price data returned");
                state.chart = None;
                state.chart_status = Status::Empty;
                Outcome::Applied
            }
            Ok(series) => {
                log::info!("[{ticker}] {} price points loaded {ticket}", series.len());
                state.chart_status = Status::Loaded(series.len());
                state.chart = Some(Figure::line(&series, &ticker));
                Outcome::Applied
            }
            Err(e) => {
                log::error!("[{ticker}] Failed to load prices from {path}: {e}");
                state.chart = None;
                state.chart_status = Status::Failed;
                Outcome::Failed
            }
        }
    }

    fn is_stale(&self, seq: &Sequencer, ticket: Ticket, flow: &str) -> bool {
        let stale = !seq.is_current(ticket);
        if stale {
            log::debug!("discarding superseded {flow} response {ticket}");
        }
        stale
    }
}
