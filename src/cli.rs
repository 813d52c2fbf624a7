use crate::emitter::DEFAULT_OUTPUT_PATH;
use crate::github::API_BASE_URL;
use crate::snapshot::DEFAULT_SNAPSHOT_PATH;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "portfolio-analyzer")]
#[command(about = "Analyzes a GitHub profile and generates portfolio website data")]
#[command(version)]
pub struct Cli {
    /// Analysis snapshot shared by both steps
    #[arg(long, global = true, env = "PORTFOLIO_SNAPSHOT", default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch and analyze a GitHub account, then write the snapshot
    Analyze {
        /// GitHub username to analyze
        username: String,

        /// GitHub REST API base URL
        #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
        api_url: Url,

        /// Personal access token, raises the API rate limit
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Generate the portfolio data module from the snapshot
    Populate {
        /// Generated TypeScript module
        #[arg(long, short, env = "PORTFOLIO_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
        output: PathBuf,

        /// Job title shown on the site
        #[arg(long, env = "PORTFOLIO_TITLE", default_value = "Software Developer")]
        title: String,

        #[arg(long, env = "PORTFOLIO_DEGREE", default_value = "Computer Engineering")]
        degree: String,

        #[arg(long, env = "PORTFOLIO_EDUCATION_STATUS", default_value = "Student")]
        education_status: String,
    },
}
