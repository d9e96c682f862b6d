use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "interest-inventory")]
#[command(about = "Serves the interest inventory questionnaire and scores submitted answers")]
pub struct CliArgs {
    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen port (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Listen host (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Question catalog file (overrides QUESTIONS_PATH)
    #[arg(short, long)]
    pub questions: Option<String>,

    /// Reject out-of-range ratings and unknown question ids
    #[arg(long)]
    pub strict_answers: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,
}

impl CliArgs {
    /// Defaults, then the config file, then the environment, then flags.
    pub fn resolve(&self) -> Result<ServerConfig> {
        self.resolve_with_env(|key| std::env::var(key).ok())
    }

    pub fn resolve_with_env<F>(&self, lookup: F) -> Result<ServerConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ServerConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading configuration file {}", path);
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        config.apply_env_from(lookup)?;

        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(questions) = &self.questions {
            config.questions_path = questions.clone();
        }
        if self.strict_answers {
            config.strict_answers = true;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_defaults() {
        let args = CliArgs::parse_from(["interest-inventory"]);
        let config = args.resolve_with_env(no_env).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_flags_override_env() {
        let args = CliArgs::parse_from(["interest-inventory", "--port", "9090", "-q", "q.txt"]);
        let config = args
            .resolve_with_env(|key| (key == "PORT").then(|| "7070".to_string()))
            .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.questions_path, "q.txt");
    }

    #[test]
    fn test_env_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 9000\nhost = \"127.0.0.1\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args = CliArgs::parse_from(["interest-inventory", "--config", path.as_str()]);
        let config = args
            .resolve_with_env(|key| (key == "PORT").then(|| "7070".to_string()))
            .unwrap();
        assert_eq!(config.port, 7070);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_missing_config_file_fails() {
        let args = CliArgs::parse_from(["interest-inventory", "--config", "/nonexistent/x.toml"]);
        assert!(args.resolve_with_env(no_env).is_err());
    }

    #[test]
    fn test_invalid_host_fails_validation() {
        let args = CliArgs::parse_from(["interest-inventory", "--host", "bad host"]);
        assert!(args.resolve_with_env(no_env).is_err());
    }
}
