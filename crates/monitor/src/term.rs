use colored::Colorize;
use monitor_client::prelude::*;
use monitor_client::view::{MoverView, NewsView};

pub fn print_movers(state: &PageState) {
    println!("{}", state.movers_status.message(Panel::Movers).dimmed());
    if state.movers.is_empty() {
        return;
    }

    println!(
        "{:>3} {:<14} {:>9} {:>14}  {}",
        "#".bold(),
        "Asset".bold(),
        "Change".bold(),
        "Last close".bold(),
        "As of".bold()
    );
    for (i, row) in state.movers.iter().map(MoverView::from).enumerate() {
        let pct = format!("{:>9}", row.pct);
        let pct = match row.tone {
            Tone::Gain => pct.green(),
            Tone::Loss => pct.red(),
        };
        println!(
            "{:>3} {:<14} {} {:>14}  {}",
            i + 1,
            row.asset,
            pct,
            row.last_close,
            row.as_of.dimmed()
        );
    }
}

pub fn print_news(state: &PageState) {
    println!("{}", state.news_status.message(Panel::News).dimmed());
    for item in state.news.iter().map(NewsView::from) {
        println!();
        println!("{}", item.title.bold());
        match &item.published {
            Some(published) => println!("{} - {}", item.source.cyan(), published.dimmed()),
            None => println!("{}", item.source.cyan()),
        }
        if let Some(summary) = &item.summary {
            println!("{summary}");
        }
        println!("{}", item.link.blue().underline());
    }
}

pub fn print_chart(state: &PageState) {
    println!("{}", state.chart_status.message(Panel::Chart).dimmed());
    let Some(trace) = state.chart.as_ref().and_then(|f| f.data.first()) else {
        return;
    };

    let points = trace.x.iter().zip(trace.y.iter());
    if let (Some((first_at, first)), Some((last_at, last))) =
        (points.clone().next(), points.last())
    {
        let change = if *first != 0.0 {
            (last / first - 1.0) * 100.0
        } else {
            0.0
        };
        let change = format!("{change:+.2}%");
        let change = match Tone::of(last - first) {
            Tone::Gain => change.green(),
            Tone::Loss => change.red(),
        };
        println!(
            "{}  {first:.2} ({first_at}) -> {last:.2} ({last_at})  {change}",
            trace.name.bold()
        );
    }
}

pub fn print_symbols(symbols: &SymbolTable) {
    for entry in symbols.entries() {
        println!("{:<14} {}", entry.label, entry.ticker.dimmed());
    }
}
