use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};

/// One row of `/api/movers`.
/// ```json
/// {
///     "asset": "DAX",
///     "symbol": "^GDAXI",
///     "prev_close": 18000.0,
///     "last_close": 18180.0,
///     "pct_change": 1.0,
///     "as_of": "2024-05-17"
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MoverRow {
    pub asset: String,
    pub pct_change: f64,
    pub last_close: f64,
    pub as_of: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,
}

/// One item of `/api/news`.
///
/// The backend sends `""` for a missing date or summary; both decode to `None`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub link: String,
    #[serde(default, deserialize_with = "de_non_empty")]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "de_non_empty")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
}

/// Body of `/api/prices`; columns are aligned positionally.
/// ```json
/// {
///     "symbol": "BTC-USD",
///     "index": ["2024-05-16 00:00:00", "2024-05-17 00:00:00"],
///     "close": [65231.58, 67051.88]
/// }
/// ```
/// An empty history comes back as `{"symbol": "...", "data": []}`, which
/// decodes to a series with no points.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub index: Vec<String>,
    #[serde(default)]
    pub close: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub open: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub high: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub low: Vec<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volume: Vec<f64>,
}

impl PriceSeries {
    pub fn is_empty(&self) -> bool {
        self.index.is_empty() && self.close.is_empty()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Reject a series whose timestamps and closes cannot be paired up.
    pub fn validate(&self) -> Result<()> {
        if self.index.len() != self.close.len() {
            return Err(Error::MalformedSeries {
                index: self.index.len(),
                close: self.close.len(),
            });
        }
        Ok(())
    }
}

pub fn de_non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
