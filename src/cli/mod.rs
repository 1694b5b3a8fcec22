use clap::{Parser, Subcommand};
use std::path::Path;

use crate::services::{parse_character_args, report_line, Aggregator, Config};
use crate::sources::ZkillClient;
use crate::tui;

/// Total ISK destroyed across zKillboard characters (unique kills only)
#[derive(Parser)]
#[command(name = "zkill-isk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Per-request timeout in seconds (overrides config)
    #[arg(long, global = true, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// zKillboard API root (overrides config)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch interactive TUI (default)
    Tui,

    /// Print the total for the given characters
    Total {
        /// Character IDs, space- or comma-separated (defaults to config)
        ids: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration and its path
    Config {
        /// Write the effective configuration to the config path
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        let config = self.effective_config()?;

        match self.command {
            None | Some(Commands::Tui) => tui::run(config),
            Some(Commands::Total { ids, json }) => {
                crate::logging::init();
                run_total(&config, &ids, json)
            }
            Some(Commands::Config { init }) => {
                let path = Config::default_path()?;
                if init {
                    init_config(&config, &path)?;
                    println!("Wrote {}", path.display());
                } else {
                    println!("# {}", path.display());
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
                Ok(())
            }
        }
    }

    /// Config file values with command-line overrides applied
    fn effective_config(&self) -> anyhow::Result<Config> {
        let mut config = Config::load()?;
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        Ok(config)
    }
}

/// Create the config file; an existing one is left untouched
fn init_config(config: &Config, path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    config.save_to(path)?;
    Ok(())
}

fn run_total(config: &Config, ids: &[String], json: bool) -> anyhow::Result<()> {
    // Validate every ID before any request goes out
    let character_ids = if ids.is_empty() {
        config.character_ids.clone()
    } else {
        parse_character_args(ids)?
    };

    if character_ids.is_empty() {
        tracing::warn!("no character IDs given; pass them as arguments or set character_ids in the config");
    }

    let client = ZkillClient::from_config(config)?;
    let summary = Aggregator::summarize(&client, &character_ids);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", report_line(summary.total_isk));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::try_parse_from(["zkill-isk"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.timeout.is_none());
    }

    #[test]
    fn test_cli_parse_total_ids() {
        let cli = Cli::try_parse_from(["zkill-isk", "total", "1,2", "3"]).unwrap();
        match cli.command {
            Some(Commands::Total { ids, json }) => {
                assert_eq!(ids, vec!["1,2", "3"]);
                assert!(!json);
            }
            _ => panic!("expected total"),
        }
    }

    #[test]
    fn test_cli_parse_total_json() {
        let cli = Cli::try_parse_from(["zkill-isk", "total", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Total { ref ids, json: true }) if ids.is_empty()
        ));
    }

    #[test]
    fn test_cli_global_overrides() {
        let cli = Cli::try_parse_from([
            "zkill-isk",
            "total",
            "1",
            "--timeout",
            "3",
            "--base-url",
            "http://localhost/api",
        ])
        .unwrap();
        assert_eq!(cli.timeout, Some(3));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost/api"));
    }

    #[test]
    fn test_cli_rejects_zero_timeout() {
        assert!(Cli::try_parse_from(["zkill-isk", "total", "1", "--timeout", "0"]).is_err());
        assert!(Cli::try_parse_from(["zkill-isk", "total", "1", "--timeout", "1"]).is_ok());
    }

    #[test]
    fn test_cli_parse_config_init() {
        let cli = Cli::try_parse_from(["zkill-isk", "config", "--init"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: true })));

        let cli = Cli::try_parse_from(["zkill-isk", "config"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config { init: false })));
    }

    #[test]
    fn test_init_config_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".zkill-isk").join("config.json");
        let config = Config {
            character_ids: vec![93382481],
            ..Config::default()
        };

        init_config(&config, &path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);

        // Second run must not clobber the file
        assert!(init_config(&Config::default(), &path).is_err());
        assert_eq!(Config::load_from(&path).unwrap().character_ids, vec![93382481]);
    }

    #[test]
    fn test_total_rejects_bad_id_before_fetching() {
        // Unroutable base URL: reaching the network would still succeed with 0,
        // so the error proves validation ran first
        let config = Config {
            base_url: "http://127.0.0.1:1/api".to_string(),
            ..Config::default()
        };
        let err = run_total(&config, &["12,abc".to_string()], false).unwrap_err();
        assert!(err.to_string().contains("abc"));
    }
}
