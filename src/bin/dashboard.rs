//! Terminal front end for the business dashboard API.

use business_dashboard::client::ApiClient;
use business_dashboard::config::AppConfig;
use business_dashboard::ui::{Dashboard, Field, Phase};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = AppConfig::load()?;
    let api = ApiClient::new(config.api_url());
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut dashboard = Dashboard::new();

    println!("GrowthProAI Business Dashboard ({})", api.base_url());

    loop {
        match dashboard.phase() {
            Phase::Empty => {
                if let Some(error) = dashboard.error() {
                    println!("\n! {}", error);
                }
                println!("\nEnter your business details to get SEO insights and Google Business data");
                let Some(name) = prompt(&mut input, "Business Name: ").await? else {
                    break;
                };
                dashboard.form.set_field(Field::Name, name);
                let Some(location) = prompt(&mut input, "Location: ").await? else {
                    break;
                };
                dashboard.form.set_field(Field::Location, location);

                println!("Analyzing...");
                if !dashboard.submit(&api).await? {
                    for field in [Field::Name, Field::Location] {
                        if let Some(msg) = dashboard.form.errors.get(field) {
                            println!("  - {}", msg);
                        }
                    }
                }
            }
            Phase::Loaded => {
                if let Some(view) = dashboard.view() {
                    println!("\n{}", view);
                }
                if let Some(error) = dashboard.headline_error() {
                    println!("! {}", error);
                }
                let Some(choice) = prompt(&mut input, "\n[r] Regenerate  [n] New Search  [q] Quit: ").await?
                else {
                    break;
                };
                match choice.trim() {
                    "r" | "R" => {
                        println!("Generating...");
                        dashboard.regenerate(&api).await?;
                    }
                    "n" | "N" => dashboard.reset()?,
                    "q" | "Q" => break,
                    _ => {}
                }
            }
            // Actions are awaited inline and restore a stable phase when they end.
            phase @ (Phase::Loading | Phase::RegeneratingHeadline) => {
                anyhow::bail!("dashboard left in busy phase {:?}", phase)
            }
        }
    }

    Ok(())
}

async fn prompt(input: &mut Input, label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}
