use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use colored::*;
use portfolio_analyzer::cli::{Cli, Command};
use portfolio_analyzer::emitter::{self, PersonalDefaults};
use portfolio_analyzer::{report, snapshot};
use portfolio_analyzer::{GitHubClient, GitHubClientConfig, PortfolioAnalyzer};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "❌".red(), format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Analyze {
            username,
            api_url,
            token,
        } => analyze(&username, api_url, token, &cli.snapshot).await,
        Command::Populate {
            output,
            title,
            degree,
            education_status,
        } => {
            let defaults = PersonalDefaults {
                title,
                degree,
                education_status,
            };
            populate(&cli.snapshot, &output, &defaults)
        }
    }
}

async fn analyze(
    username: &str,
    api_url: url::Url,
    token: Option<String>,
    snapshot_path: &Path,
) -> anyhow::Result<()> {
    println!("{}", format!("📊 Analyzing GitHub profile: {}", username).bold());

    let client = GitHubClient::new(GitHubClientConfig::new(api_url).with_token(token))
        .context("Failed to create GitHub client")?;
    let result = PortfolioAnalyzer::new(&client)
        .analyze_portfolio(username, Utc::now())
        .await
        .context("Analysis failed")?;

    report::print_analysis_summary(&result);

    snapshot::save_snapshot(&result, snapshot_path)
        .with_context(|| format!("Failed to save analysis to {}", snapshot_path.display()))?;
    println!(
        "\n{} Results saved to {}",
        "✅ Analysis complete!".green(),
        snapshot_path.display()
    );
    Ok(())
}

fn populate(snapshot_path: &Path, output: &Path, defaults: &PersonalDefaults) -> anyhow::Result<()> {
    println!("{}\n", "📊 Populating portfolio data from GitHub analysis...".bold());

    let analysis = snapshot::load_snapshot(snapshot_path)
        .with_context(|| format!("Error loading GitHub analysis from {}", snapshot_path.display()))?;
    let data = emitter::generate_portfolio_data(&analysis, defaults);

    report::print_populate_summary(&data);

    emitter::write_module(&data, output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "\n{} Portfolio data saved to {}",
        "✅".green(),
        output.display()
    );
    Ok(())
}
