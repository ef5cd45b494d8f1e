//! Client side of the Market Monitor dashboard.
//!
//! The backend serves three JSON endpoints (movers, news & prices); this crate
//! fetches them, keeps the page state of a [`Dashboard`] and renders that
//! state to HTML.
//! ```rust,ignore
//! let config = Config::from_env()?;
//! let backend = HttpBackend::new(build_client(&config)?, config.api_url.clone());
//! let dashboard = Dashboard::new(backend, Arc::new(config.load_symbols()?), Controls::default());
//! dashboard.load_all().await;
//! ```
pub mod client_ext;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod query;
pub mod render;
pub mod schema;
pub mod seq;
pub mod symbols;
pub mod view;

pub use crate::client_ext::{Backend, ClientExt, HttpBackend};
pub use crate::config::Config;
pub use crate::dashboard::{Controls, Dashboard, Outcome, PageState};
pub use crate::error::{Error, Result};
pub use crate::symbols::SymbolTable;

pub mod prelude {
    pub use crate::client_ext::{Backend, ClientExt, HttpBackend};
    pub use crate::config::Config;
    pub use crate::dashboard::{Controls, Dashboard, Outcome, PageState};
    pub use crate::render::Renderer;
    pub use crate::symbols::SymbolTable;
    pub use crate::view::{Panel, Status, Tone};

    pub fn build_client(config: &Config) -> crate::Result<reqwest::Client> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;
        Ok(client)
    }
}
