use clap::Parser;
use linktag::config::{CliConfig, Config};
use linktag::core::constants::sources;
use linktag::reporting::logging;
use linktag::source::source_for_arg;
use linktag::ui::{Cli, cli_to_config, render};
use linktag::{Annotation, Pipeline};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run_linktag_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Main annotation logic extracted from main() for testing
pub async fn run_linktag_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(&cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli_config.quiet);
    logging::log_config_info(&config);

    let args = if cli.files.is_empty() {
        vec![sources::STDIN_MARKER.to_string()]
    } else {
        cli.files.clone()
    };
    logging::log_source_info(args.len(), &args);

    let pipeline = Pipeline::from_config(&config)?;

    // Sources are processed one after another, as are the probes inside each
    let mut results = Vec::with_capacity(args.len());
    for arg in &args {
        let source = source_for_arg(arg);
        let annotation = pipeline.run_source(source.as_ref()).await;
        results.push((source.name(), annotation));
    }

    let output = render(&results, config.output_format())?;
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }

    Ok(determine_exit_code(&results, &config))
}

/// Load configuration from file or standard locations and merge with CLI config
pub fn load_and_merge_config(cli_config: &CliConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli_config.no_config {
        Config::default()
    } else if let Some(ref config_file) = cli_config.config_file {
        Config::load_from_file(config_file).inspect_err(|e| {
            logging::log_error(
                &format!("Could not load config file '{config_file}'"),
                Some(e),
            );
        })?
    } else {
        Config::load_from_standard_locations()
    };

    // CLI takes precedence
    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Strict mode turns any unverified URL into a failing exit code
pub fn determine_exit_code(results: &[(String, Annotation)], config: &Config) -> i32 {
    let unverified: usize = results
        .iter()
        .map(|(_, annotation)| annotation.unverified_count())
        .sum();

    if config.is_strict() && unverified > 0 {
        logging::log_warning(&format!("{unverified} URL(s) could not be verified"));
        1
    } else {
        0
    }
}
