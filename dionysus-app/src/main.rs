use anyhow::{Context, Result};
use clap::Parser;
use dionysus_commands::{dispatch, parse_command};
use dionysus_common::observability::{init_logging, LogConfig, LogFormat};
use dionysus_config::{DionysusConfig, DionysusConfigLoader};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tether::build_from_config;
mod bot;
mod tether;

#[derive(Debug, Parser)]
#[command(name = "dionysus", version, about = "Discord bot for Anime Crossover Defense lookups, random videos and tarot")]
struct Cli {
    /// YAML config file; skipped when absent.
    #[arg(long, env = "DIONYSUS_CONFIG", default_value = "dionysus.yaml")]
    config: PathBuf,
    /// Override `logging.format` (text|json).
    #[arg(long)]
    log_format: Option<LogFormat>,
    /// Load and validate the configuration, print a summary, then exit.
    #[arg(long)]
    check: bool,
    /// Run one command line (e.g. "!acd luffy") and print the reply instead of connecting.
    #[arg(long, value_name = "MESSAGE")]
    run: Option<String>,
}

fn log_config(cfg: &DionysusConfig, cli: &Cli) -> LogConfig {
    LogConfig {
        app_name: "dionysus",
        log_dir: cfg.logging.dir.clone(),
        emit_stderr: cfg.logging.stderr && cli.run.is_none(),
        format: cli.log_format.unwrap_or(cfg.logging.format),
        default_filter: cfg.logging.filter.clone(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // 1) Load config (env wins)
    let cfg = DionysusConfigLoader::new()
        .with_optional_file(&cli.config)
        .load()
        .with_context(|| format!("loading configuration ({})", cli.config.display()))?;

    if cli.check {
        println!("{}", cfg.summary());
        return Ok(());
    }

    let log_path = init_logging(log_config(&cfg, &cli))?;
    tracing::info!(target: "app", log = %log_path.display(), config = %cfg.summary(), "app.start");

    let services = build_from_config(&cfg)?;

    if let Some(message) = cli.run.as_deref() {
        let command = parse_command(message, &services.prefix);
        let reply = dispatch(&services, command, &mut StdRng::from_entropy()).await;
        println!("{reply}");
        return Ok(());
    }

    bot::run(&cfg.discord.token, services).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["dionysus"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("dionysus.yaml"));
        assert!(!cli.check);
        assert!(cli.run.is_none());
        assert!(cli.log_format.is_none());
    }

    #[test]
    fn cli_flags() {
        let cli = Cli::try_parse_from([
            "dionysus",
            "--config",
            "bot.yaml",
            "--log-format",
            "json",
            "--run",
            "!tarot",
        ])
        .unwrap();
        assert_eq!(cli.config, PathBuf::from("bot.yaml"));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.run.as_deref(), Some("!tarot"));
        assert!(Cli::try_parse_from(["dionysus", "--log-format", "xml"]).is_err());
    }
}
