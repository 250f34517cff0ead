use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::PathBuf;

use url::Url;

/// Port used when `PORT` is not set
pub const DEFAULT_PORT: u16 = 80;

/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOKEN environment variable required")]
    MissingToken,

    #[error("PORT must be a valid port number, got {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Options that can be given on the command line or through the environment
#[derive(Debug, Clone, clap::Args)]
pub struct ServeArgs {
    /// Base URL of the GitHub REST API
    #[arg(long, env = "API_BASE_URL", default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// JSON document sent as the branch protection request body
    #[arg(
        long,
        env = "BRANCH_PROTECTION_PAYLOAD",
        default_value = "./payload_branch_protection.json"
    )]
    pub branch_protection_payload: PathBuf,

    /// JSON document sent as the issue creation request body
    #[arg(long, env = "ISSUE_PAYLOAD", default_value = "./payload_create_issue.json")]
    pub issue_payload: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            branch_protection_payload: "./payload_branch_protection.json".into(),
            issue_payload: "./payload_create_issue.json".into(),
        }
    }
}

/// Service configuration, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Token presented to the GitHub API
    pub token: String,

    /// Address to listen on
    pub listen_addr: SocketAddr,

    /// Base URL of the GitHub REST API
    pub api_base: Url,

    /// Path to the branch protection template
    pub branch_protection_payload: PathBuf,

    /// Path to the issue template
    pub issue_payload: PathBuf,
}

impl Config {
    /// Load configuration from environment variables and command line options
    pub fn from_env_and_args(args: ServeArgs) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), args)
    }

    /// Load configuration using `lookup` to resolve environment variables
    pub fn from_lookup<F>(lookup: F, args: ServeArgs) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup("TOKEN").ok_or(ConfigError::MissingToken)?;

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            token,
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            api_base: args.api_base,
            branch_protection_payload: args.branch_protection_payload,
            issue_payload: args.issue_payload,
        })
    }
}
