use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;

use confgen::{generate, FeatureTable, HeaderConfig};

#[derive(Parser)]
#[command(name = "confgen")]
#[command(about = "Generate an include-guarded C configuration header", long_about = None)]
struct Cli {
    /// Header description (.toml)
    config: PathBuf,

    /// Output header path (defaults to the config's `output`, then the guard
    /// lowercased with a trailing `_H` turned into `.h`, e.g. `FOO_H` -> `foo.h`)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Define a feature: NAME, NAME=1 or NAME=0
    #[arg(short = 'D', long = "define", value_name = "NAME[=VALUE]")]
    defines: Vec<String>,

    /// Undefine a feature
    #[arg(short = 'U', long = "undefine", value_name = "NAME")]
    undefines: Vec<String>,

    /// Print the header instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Validate the config only (no generation)
    #[arg(long)]
    check: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = HeaderConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    info!(
        "loaded {} ({} entries, guard {})",
        cli.config.display(),
        config.entries.len(),
        config.guard
    );

    // Command-line features override the config's [features] table
    let mut features = FeatureTable::from_config(&config);
    for define in &cli.defines {
        features.apply_define(define)?;
    }
    for name in &cli.undefines {
        features.undefine(name);
    }

    if cli.check {
        println!("✓ {} - OK", cli.config.display());
        return Ok(());
    }

    let mut writer = generate(&config, &features);

    if cli.stdout {
        std::io::stdout()
            .write_all(writer.render().as_bytes())
            .context("writing header to stdout")?;
        return Ok(());
    }

    let output = cli.output.clone().unwrap_or_else(|| config.default_output());
    writer.save(&output)?;
    info!("→ {}", output.display());

    Ok(())
}
