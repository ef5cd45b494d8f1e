use clap::{Args, Parser, Subcommand};
use monitor_client::view::DEFAULT_PERIOD;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL; overrides MONITOR_API_URL.
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the market movers, optionally filtered by a watchlist.
    Movers {
        #[arg(short, long)]
        watchlist: Option<String>,

        /// Activate row N of the table (numbered from 1) and draw its chart.
        #[arg(long, value_name = "N")]
        select: Option<usize>,
    },

    /// Load the latest news headlines.
    News(NewsArgs),

    /// Draw the price chart of an asset label (e.g. "DAX", "BTC-USD").
    Chart {
        label: String,

        #[arg(short, long, default_value = DEFAULT_PERIOD)]
        period: String,

        /// Also write the page holding the chart to this file.
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Load every panel and write the whole dashboard page.
    Page(PageArgs),

    /// List the asset labels and the tickers behind them.
    Symbols,
}

#[derive(Args, Debug)]
pub struct NewsArgs {
    /// Free-text filter on title & summary.
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Comma-separated source names (e.g. "MarketWatch,ECB Press").
    #[arg(short, long, default_value = "")]
    pub sources: String,

    /// Maximum number of items; defaults to 15.
    #[arg(short, long, default_value = "")]
    pub limit: String,
}

#[derive(Args, Debug)]
pub struct PageArgs {
    #[arg(short, long, default_value = "dashboard.html")]
    pub out: PathBuf,

    #[arg(short, long)]
    pub watchlist: Option<String>,

    /// Asset label to chart; defaults to the first label of the symbol table.
    #[arg(long)]
    pub symbol: Option<String>,

    #[arg(short, long, default_value = DEFAULT_PERIOD)]
    pub period: String,

    #[command(flatten)]
    pub news: NewsArgs,
}
