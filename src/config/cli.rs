use crate::config::toml_config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "professor-stats")]
#[command(about = "Statistics API over the professor collection")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long)]
    pub host: Option<String>,

    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// memory://, file://<path> or http(s):// record source
    #[arg(long, env = "DATABASE_URI")]
    pub database_uri: Option<String>,

    #[arg(long)]
    pub cors_origin: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// Loads the config file (if any), then applies command line overrides.
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(uri) = &self.database_uri {
            config.database.uri = uri.clone();
        }
        if let Some(origin) = &self.cors_origin {
            config.cors.allowed_origin = origin.clone();
        }
        config.logging.verbose |= self.verbose;
        config.logging.json |= self.json_logs;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flags_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[server]\nport = 4000\n\n[database]\nuri = \"memory://\"\n")
            .unwrap();

        let cli = CliConfig::parse_from([
            "professor-stats",
            "--config",
            file.path().to_str().unwrap(),
            "--port",
            "5000",
            "--verbose",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.uri, "memory://");
        assert!(config.logging.verbose);
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = CliConfig::parse_from([
            "professor-stats",
            "--database-uri",
            "memory://",
            "--cors-origin",
            "https://dashboard.example.com",
        ]);
        let config = cli.resolve().unwrap();

        assert_eq!(config.database.uri, "memory://");
        assert_eq!(config.cors.allowed_origin, "https://dashboard.example.com");
        assert_eq!(config.server.host, "0.0.0.0");
    }
}
