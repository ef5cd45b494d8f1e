use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Labels offered by the dashboard, and the Yahoo Finance ticker behind each.
pub const DEFAULT_ASSETS: [(&str, &str); 11] = [
    ("S&P 500", "^GSPC"),
    ("Nasdaq 100", "^NDX"),
    ("DAX", "^GDAXI"),
    ("WIG20", "^WIG20"),
    ("EURUSD", "EURUSD=X"),
    ("USDJPY", "JPY=X"),
    ("Brent", "BZ=F"),
    ("WTI", "CL=F"),
    ("Złoto", "GC=F"),
    ("BTC-USD", "BTC-USD"),
    ("ETH-USD", "ETH-USD"),
];

/// Entry of a symbol table file.
/// ```json
/// [
///     { "label": "DAX", "ticker": "^GDAXI" },
///     // ...
/// ]
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub label: String,
    pub ticker: String,
}

/// Immutable label -> ticker mapping, built once at startup.
///
/// Lookups are exact and case-sensitive. Display order is the order the
/// entries were given in.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: Vec<SymbolEntry>,
    by_label: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new(entries: Vec<SymbolEntry>) -> Result<Self> {
        let mut by_label = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if entry.label.is_empty() || entry.ticker.is_empty() {
                return Err(Error::Config(format!(
                    "symbol table entry #{i} has an empty label or ticker"
                )));
            }
            if by_label.insert(entry.label.clone(), i).is_some() {
                return Err(Error::Config(format!(
                    "duplicate symbol label: {}",
                    entry.label
                )));
            }
        }
        Ok(SymbolTable { entries, by_label })
    }

    /// Read a JSON array of [`SymbolEntry`] from `path`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::read(path.as_ref())?;
        let entries: Vec<SymbolEntry> = serde_json::from_slice(&file)?;
        log::debug!(
            "loaded {} symbols from {}",
            entries.len(),
            path.as_ref().display()
        );
        Self::new(entries)
    }

    /// Ticker for `label`; a miss is an [`Error::UnknownLabel`].
    pub fn resolve(&self, label: &str) -> Result<&str> {
        self.by_label
            .get(label)
            .map(|&i| self.entries[i].ticker.as_str())
            .ok_or_else(|| Error::UnknownLabel(label.to_string()))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        let entries: Vec<SymbolEntry> = DEFAULT_ASSETS
            .iter()
            .map(|(label, ticker)| SymbolEntry {
                label: label.to_string(),
                ticker: ticker.to_string(),
            })
            .collect();
        let by_label = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.label.clone(), i))
            .collect();
        SymbolTable { entries, by_label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_default_label_resolves_to_its_ticker() {
        let table = SymbolTable::default();
        for (label, ticker) in DEFAULT_ASSETS {
            assert_eq!(table.resolve(label).unwrap(), ticker);
        }
        assert_eq!(table.len(), DEFAULT_ASSETS.len());
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let table = SymbolTable::default();

        assert!(matches!(table.resolve("dax"), Err(Error::UnknownLabel(l)) if l == "dax"));
        assert!(table.resolve(" DAX").is_err());
        assert!(table.resolve("").is_err());
    }

    #[test]
    fn labels_keep_their_order() {
        let table = SymbolTable::default();
        let labels: Vec<_> = table.labels().collect();

        assert_eq!(labels.first(), Some(&"S&P 500"));
        assert_eq!(labels.last(), Some(&"ETH-USD"));
    }

    #[test]
    fn duplicate_labels_are_a_config_error() {
        let entry = SymbolEntry {
            label: "DAX".into(),
            ticker: "^GDAXI".into(),
        };
        let err = SymbolTable::new(vec![entry.clone(), entry]).unwrap_err();

        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn table_loads_from_json_file() {
        let path = std::env::temp_dir().join(format!("symbols-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"label": "Apple", "ticker": "AAPL"}, {"label": "Silver", "ticker": "SI=F"}]"#,
        )
        .unwrap();

        let table = SymbolTable::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(table.resolve("Silver").unwrap(), "SI=F");
        assert!(table.resolve("DAX").is_err());
    }
}
