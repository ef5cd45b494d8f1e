use crate::error::{Error, Result};
use url::form_urlencoded::Serializer;

pub const MOVERS: &str = "/api/movers";
pub const NEWS: &str = "/api/news";
pub const PRICES: &str = "/api/prices";

/// Used when the limit control is left blank.
pub const DEFAULT_NEWS_LIMIT: u32 = 15;

/// `/api/movers`, filtered by watchlist when one is selected.
pub fn movers_path(watchlist: Option<&str>) -> String {
    match watchlist.map(str::trim).filter(|w| !w.is_empty()) {
        Some(label) => {
            let query = Serializer::new(String::new())
                .append_pair("watchlist", label)
                .finish();
            format!("{MOVERS}?{query}")
        }
        None => MOVERS.to_string(),
    }
}

/// `/api/prices` for one ticker over one period.
pub fn prices_path(ticker: &str, period: &str) -> String {
    let query = Serializer::new(String::new())
        .append_pair("symbol", ticker)
        .append_pair("period", period)
        .finish();
    format!("{PRICES}?{query}")
}

/// Parameters of a news request, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub limit: u32,
    pub q: Option<String>,
    pub sources: Option<String>,
}

impl NewsQuery {
    /// Read the raw control values: blank text is dropped, a blank limit falls
    /// back to [`DEFAULT_NEWS_LIMIT`], anything else must be a positive integer.
    pub fn from_controls(q: &str, sources: &str, limit: &str) -> Result<Self> {
        let limit = match limit.trim() {
            "" => DEFAULT_NEWS_LIMIT,
            raw => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(Error::InvalidLimit(raw.to_string())),
            },
        };

        Ok(NewsQuery {
            limit,
            q: non_blank(q),
            sources: non_blank(sources),
        })
    }

    /// `/api/news?limit=<n>[&q=<text>][&sources=<text>]`
    pub fn path(&self) -> String {
        let mut query = Serializer::new(String::new());
        query.append_pair("limit", &self.limit.to_string());
        if let Some(q) = &self.q {
            query.append_pair("q", q);
        }
        if let Some(sources) = &self.sources {
            query.append_pair("sources", sources);
        }
        format!("{NEWS}?{}", query.finish())
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
