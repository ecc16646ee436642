use std::path::PathBuf;

use anyhow::{
    bail,
    Context,
    Result,
};
use buildwatch_plugin_api::{
    BuildStatus,
    PluginRegistry,
};
use clap::{
    Parser,
    Subcommand,
};
use serde::Serialize;
use tokio::sync::mpsc;

use crate::config::{
    BuildwatchConfig,
    ConfigLoader,
};
use crate::{
    plugins,
    service,
};

#[derive(Parser)]
#[command(name = "buildwatch")]
#[command(author, version, about = "CI build status monitor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file, defaults to buildwatch/config.toml in the user config directory
    #[arg(short, long, global = true, env = "BUILDWATCH_CONFIG")]
    config: Option<PathBuf>,

    /// Debug logging for buildwatch and its plugins
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Pretty-print JSON output of one-shot commands
    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the descriptor of every supported service type
    Services,

    /// List the pipelines each configured service offers
    List {
        /// Only query this service
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Print the latest status of the configured projects
    Status {
        /// Only query this service
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Poll status on each service's update interval until interrupted
    Watch {
        /// Only watch this service
        #[arg(short, long)]
        service: Option<String>,
    },
}

impl Cli {
    fn load_config(&self, registry: &PluginRegistry) -> Result<BuildwatchConfig> {
        let path = ConfigLoader::discover_config_path(self.config.as_deref());
        ConfigLoader::load_validated(&path, registry)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    fn print_reports<T: Serialize>(&self, reports: &[service::ServiceReport<T>]) -> Result<()> {
        for report in reports {
            println!("{}", self.to_json(report)?);
        }

        let failed = reports.iter().filter(|r| r.is_error()).count();
        if failed > 0 {
            bail!("{failed} of {} service(s) failed", reports.len());
        }
        Ok(())
    }

    async fn execute_watch(&self, services: Vec<service::Service>) -> Result<()> {
        let (tx, mut rx) = mpsc::unbounded_channel::<service::ServiceReport<BuildStatus>>();

        let printer = tokio::spawn(async move {
            while let Some(report) = rx.recv().await {
                match serde_json::to_string(&report) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::error!("Failed to encode status report: {e}"),
                }
            }
        });

        service::watch(services, tx, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {e}");
            }
        })
        .await;

        printer.await.context("Status printer panicked")?;
        Ok(())
    }

    pub async fn execute(&self) -> Result<()> {
        let registry = plugins::init_registry();

        match &self.command {
            Commands::Services => {
                println!("{}", self.to_json(&registry.descriptors())?);
                Ok(())
            }
            Commands::List { service: only } => {
                let config = self.load_config(&registry)?;
                let services = service::build_services(&config, &registry, only.as_deref())?;
                self.print_reports(&service::list_all(&services).await)
            }
            Commands::Status { service: only } => {
                let config = self.load_config(&registry)?;
                let services = service::build_services(&config, &registry, only.as_deref())?;
                self.print_reports(&service::status_all(&services).await)
            }
            Commands::Watch { service: only } => {
                let config = self.load_config(&registry)?;
                let services = service::build_services(&config, &registry, only.as_deref())?;
                if services.is_empty() {
                    bail!("No services configured");
                }
                tracing::info!("Watching {} service(s), press Ctrl-C to stop", services.len());
                self.execute_watch(services).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_status_with_service() {
        let cli =
            Cli::try_parse_from(["buildwatch", "status", "--service", "ci", "--pretty"]).unwrap();

        assert!(cli.pretty);
        assert!(matches!(
            cli.command,
            Commands::Status { service: Some(ref s) } if s == "ci"
        ));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["buildwatch", "watch", "-v", "--config", "/etc/bw.toml"]).unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/bw.toml")));
        assert!(matches!(cli.command, Commands::Watch { service: None }));
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["buildwatch"]).is_err());
    }

    #[tokio::test]
    async fn test_status_fails_for_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let cli = Cli::try_parse_from(["buildwatch", "status", "--config", path.to_str().unwrap()])
            .unwrap();

        let err = cli.execute().await.unwrap_err();

        assert!(err.to_string().starts_with("Failed to load config from"));
    }

    #[tokio::test]
    async fn test_status_without_projects_prints_empty_items() {
        let _ = rustls::crypto::ring::default_provider().install_default();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
            [services.legacy]
            type = "cruisecontrol"
            url = "http://127.0.0.1:9/"
            "#,
        )
        .unwrap();
        let cli = Cli::try_parse_from(["buildwatch", "status", "--config", path.to_str().unwrap()])
            .unwrap();

        cli.execute().await.unwrap();
    }
}
