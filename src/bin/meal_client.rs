use clap::Parser;
use meal_analyzer::cli::Cli;
use meal_analyzer::report::format_page;
use meal_analyzer::{Analyzer, HttpTransport, Page};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let page = Arc::new(Mutex::new(Page::new()));
    let analyzer = Analyzer::new(HttpTransport::new(&cli.url), Arc::clone(&page));

    {
        let mut page = page.lock().await;
        page.type_input(cli.meal_text());
        if let Some(suggestions) = page.suggestion_box().filter(|s| !s.is_empty()) {
            eprintln!("Known meals: {}", suggestions.items().join(", "));
        }
    }

    let outcome = analyzer.analyze().await;

    let mut page = page.lock().await;
    if cli.breakdown {
        page.toggle_breakdown();
    }
    println!("{}", format_page(&page));

    if outcome.is_err() {
        std::process::exit(1);
    }
}
