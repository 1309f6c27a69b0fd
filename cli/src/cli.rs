use clap::{Parser, Subcommand, ValueEnum};

/// Environment variable that overrides the configured analysis endpoint
pub const ENDPOINT_ENV: &str = "TRUTHFINDER_ENDPOINT";

#[derive(Parser, Debug)]
#[command(name = "truthfinder")]
#[command(
    author,
    version,
    about = "Analyze news articles for bias, manipulation and trustworthiness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit an article URL for analysis and print the report
    Analyze {
        /// Article URL to analyze (prompted for when omitted)
        url: Option<String>,

        /// Analysis endpoint, overriding the configuration file
        #[clap(long, env = ENDPOINT_ENV)]
        endpoint: Option<String>,

        /// Configuration file path
        #[clap(short, long, default_value = truth_finder::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Output format for the report
        #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Print scores without bars
        #[clap(long, default_value_t = false)]
        no_bars: bool,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Check that the analysis service is up
    Health {
        /// Analysis endpoint, overriding the configuration file
        #[clap(long, env = ENDPOINT_ENV)]
        endpoint: Option<String>,

        /// Configuration file path
        #[clap(short, long, default_value = truth_finder::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Enable verbose output with additional information
        #[clap(short, long, default_value_t = false)]
        verbose: bool,
    },

    /// Write a default configuration file
    Init {
        /// Configuration file path
        #[clap(short, long, default_value = truth_finder::config::DEFAULT_CONFIG_FILE)]
        config: String,

        /// Overwrite an existing configuration file
        #[clap(long, default_value_t = false)]
        force: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Self::Analyze { verbose, .. } | Self::Health { verbose, .. } => *verbose,
            Self::Init { .. } => false,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Coloured terminal report
    Text,

    /// Machine-readable JSON including derived tiers
    Json,
}
