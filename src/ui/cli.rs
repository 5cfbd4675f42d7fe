// Command-line interface definitions and parsing for linktag

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Response files to annotate ("-" or none reads stdin)
    pub files: Vec<String>,

    // Core Options
    /// Probe timeout in seconds (default: 5)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    /// Exit with code 1 when any URL is unverified
    #[arg(long, help_heading = "Core Options")]
    pub strict: bool,

    // Output & Verbosity
    /// Suppress log output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    /// HTTP/HTTPS proxy URL
    #[arg(long, value_name = "URL", help_heading = "Network & Security")]
    pub proxy: Option<String>,

    /// Skip SSL certificate verification
    #[arg(long, help_heading = "Network & Security")]
    pub insecure: bool,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

/// Convert parsed CLI arguments into a CliConfig
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        proxy: cli.proxy.clone(),
        skip_ssl_verification: cli.insecure,
        quiet: cli.quiet,
        verbose: cli.verbose,
        output_format: cli.format.clone(),
        strict: cli.strict,
        config_file: cli.config.clone(),
        no_config: cli.no_config,
    }
}
