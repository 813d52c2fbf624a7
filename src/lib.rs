pub mod analyzer;
pub mod cli;
pub mod emitter;
pub mod error;
pub mod github;
pub mod maturity;
pub mod models;
pub mod readme;
pub mod recommendations;
pub mod report;
pub mod skills;
pub mod snapshot;
pub mod stack;
pub mod types;

pub use analyzer::PortfolioAnalyzer;
pub use error::{PortfolioError, Result};
pub use github::{GitHubClient, GitHubClientConfig};
