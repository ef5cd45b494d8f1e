use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands::*};
use monitor_client::prelude::*;
use std::path::Path;
use std::sync::Arc;

mod cli;
mod term;
mod ui;

fn preprocess() {
    // grant access to .env
    dotenv::dotenv().ok();

    // initialise logger
    env_logger::init();
}

#[tokio::main]
async fn main() -> Result<()> {
    preprocess();
    let cli = Cli::parse();
    log::info!("Command line input recorded: {cli:#?}");

    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.parse()?;
    }
    let symbols = Arc::new(config.load_symbols()?);

    // cli framework:
    // "> monitor <COMMAND>"
    match cli.command {
        // "> monitor symbols"
        Symbols => {
            term::print_symbols(&symbols);
        }

        // "> monitor movers [--watchlist DAX] [--select 2]"
        Movers { watchlist, select } => {
            let dash = dashboard(&config, symbols)?;
            dash.update_controls(|c| c.watchlist = watchlist).await;

            ui::with_spinner("Loading movers", dash.load_movers()).await;
            let state = dash.snapshot().await;
            term::print_movers(&state);
            check(&state.movers_status, Panel::Movers)?;

            if let Some(row) = select {
                let index = row
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("mover rows are numbered from 1"))?;
                let outcome = ui::with_spinner("Loading prices", dash.select_mover(index)).await;
                if outcome == Outcome::Skipped {
                    return Err(anyhow!("no mover row #{row}"));
                }
                let state = dash.snapshot().await;
                term::print_chart(&state);
                check(&state.chart_status, Panel::Chart)?;
            }
        }

        // "> monitor news [--query fed] [--sources MarketWatch] [--limit 5]"
        News(args) => {
            let dash = dashboard(&config, symbols)?;
            dash.update_controls(|c| {
                c.news_query = args.query;
                c.news_sources = args.sources;
                c.news_limit = args.limit;
            })
            .await;

            ui::with_spinner("Loading news", dash.load_news()).await;
            let state = dash.snapshot().await;
            term::print_news(&state);
            check(&state.news_status, Panel::News)?;
        }

        // "> monitor chart BTC-USD [--period 1mo] [--out chart.html]"
        Chart { label, period, out } => {
            let dash = dashboard(&config, symbols)?;
            dash.update_controls(|c| {
                c.symbol = label;
                c.period = period;
            })
            .await;

            ui::with_spinner("Loading prices", dash.draw_chart()).await;
            let state = dash.snapshot().await;
            term::print_chart(&state);
            check(&state.chart_status, Panel::Chart)?;

            if let Some(out) = out {
                write_page(&state, dash.symbols(), &config, &out).await?;
            }
        }

        // "> monitor page [--out dashboard.html] [...]"
        Page(args) => {
            let dash = dashboard(&config, symbols.clone())?;
            let symbol = args
                .symbol
                .unwrap_or_else(|| Controls::for_table(&symbols).symbol);
            dash.update_controls(|c| {
                c.watchlist = args.watchlist;
                c.symbol = symbol;
                c.period = args.period;
                c.news_query = args.news.query;
                c.news_sources = args.news.sources;
                c.news_limit = args.news.limit;
            })
            .await;

            let (movers, news, chart) =
                ui::with_spinner("Loading dashboard", dash.load_all()).await;
            log::info!("movers: {movers:?}, news: {news:?}, chart: {chart:?}");

            // a failed panel still gets rendered, with its status line
            let state = dash.snapshot().await;
            for (status, panel) in [
                (&state.movers_status, Panel::Movers),
                (&state.news_status, Panel::News),
                (&state.chart_status, Panel::Chart),
            ] {
                if status.is_failure() {
                    log::warn!("{}", status.message(panel));
                }
            }
            write_page(&state, dash.symbols(), &config, &args.out).await?;
        }
    }

    Ok(())
}

fn dashboard(config: &Config, symbols: Arc<SymbolTable>) -> Result<Dashboard<HttpBackend>> {
    let client = build_client(config)?;
    let backend = HttpBackend::new(client, config.api_url.clone());
    log::info!("Backend: {}", backend.base());
    let controls = Controls::for_table(&symbols);
    Ok(Dashboard::new(backend, symbols, controls))
}

/// Turn a failed flow into a non-zero exit, carrying its status line.
fn check(status: &Status, panel: Panel) -> Result<()> {
    if status.is_failure() {
        return Err(anyhow!(status.message(panel)));
    }
    Ok(())
}

async fn write_page(
    state: &PageState,
    symbols: &SymbolTable,
    config: &Config,
    out: &Path,
) -> Result<()> {
    let html = Renderer::new()?.page(state, symbols, &config.news_sources)?;
    tokio::fs::write(out, html).await?;
    log::info!("Dashboard written to {}", out.display());
    println!("{}", out.display());
    Ok(())
}
