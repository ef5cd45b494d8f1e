use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Await `fut` behind a spinner, clearing it once done.
pub async fn with_spinner<F: Future>(msg: &str, fut: F) -> F::Output {
    let pb = spinner(msg);
    let output = fut.await;
    pb.finish_and_clear();
    output
}
