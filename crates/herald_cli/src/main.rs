//! Herald CLI - emit one structured log record
//!
//! Usage: herald [options] <message>

use anyhow::Context as _;
use clap::Parser;
use herald_common::{Environment, LogLevel, EXIT_CONFIG_ERROR};
use herald_config::{LogConfig, ProbeFailure};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "herald",
    version = "0.1.0",
    about = "Herald structured logger: write one record through the process logger"
)]
struct Cli {
    /// Path to herald.toml (the [log] table is used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Minimum level: trace, debug, info, warn, error, fatal, panic
    #[arg(long)]
    level: Option<String>,

    /// Deployment environment: prod, stage, qa, dev
    #[arg(long)]
    env: Option<String>,

    /// Address probed to learn the host IP
    #[arg(long)]
    probe_addr: Option<String>,

    /// Continue with 0.0.0.0 when the host IP probe fails
    #[arg(long)]
    allow_unknown_ip: bool,

    /// Level of the emitted record
    #[arg(long, default_value = "info")]
    at: String,

    /// Field added to the record (key=value, repeatable)
    #[arg(short = 'f', long = "field", value_parser = parse_key_value)]
    fields: Vec<(String, String)>,

    /// Field added to the logger's base context before emitting (key=value, repeatable)
    #[arg(long = "context", value_parser = parse_key_value)]
    context: Vec<(String, String)>,

    /// Record message
    message: String,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", raw)),
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<LogConfig> {
    let mut config = match &cli.config {
        Some(path) => LogConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LogConfig::default(),
    };

    if let Some(level) = &cli.level {
        config.level = LogLevel::from_tag(level);
    }
    if let Some(env) = &cli.env {
        config.env = Environment::from_tag(env);
    }
    if let Some(addr) = &cli.probe_addr {
        config.probe_addr = addr.clone();
    }
    if cli.allow_unknown_ip {
        config.on_probe_failure = ProbeFailure::Unknown;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("herald: {:#}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    tracing::debug!(level = %config.level, env = %config.env, "herald cli configured");
    let logger = herald_core::init_with(&config);
    // From here on, tracing events from dependencies land in the same output
    if let Err(e) = herald_core::bridge::install(logger.clone()) {
        herald_core::warn().err(&e).msg("tracing bridge not installed");
    }

    if !cli.context.is_empty() {
        herald_core::update_context(|mut ctx| {
            for (key, value) in &cli.context {
                ctx = ctx.str(key, value.as_str());
            }
            ctx
        });
    }

    let mut event = herald_core::with_level(LogLevel::from_tag(&cli.at));
    for (key, value) in &cli.fields {
        event = event.str(key, value.as_str());
    }
    event.msg(&cli.message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("region=eu-west=1").unwrap(),
            ("region".to_string(), "eu-west=1".to_string())
        );
        assert_eq!(parse_key_value("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_key_value("=value").is_err());
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "herald",
            "--level",
            "error",
            "--env",
            "qa",
            "--probe-addr",
            "127.0.0.1:9",
            "--allow-unknown-ip",
            "hello",
        ]);
        let config = load_config(&cli).unwrap();
        assert_eq!(config.level, LogLevel::Error);
        assert_eq!(config.env, Environment::Qa);
        assert_eq!(config.probe_addr, "127.0.0.1:9");
        assert_eq!(config.on_probe_failure, ProbeFailure::Unknown);
    }

    #[test]
    fn test_unknown_level_flag_is_info() {
        let cli = Cli::parse_from(["herald", "--level", "LOUD", "hello"]);
        assert_eq!(load_config(&cli).unwrap().level, LogLevel::Info);
    }
}
