use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{
    validate_cors_origin, validate_non_empty_string, validate_path, validate_range, validate_url,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_URI: &str = "file://./data/professors.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub cors: CorsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSection {
    #[serde(default = "default_database_uri")]
    pub uri: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            uri: default_database_uri(),
        }
    }
}

fn default_database_uri() -> String {
    DEFAULT_DATABASE_URI.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsSection {
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

impl Default for CorsSection {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

fn default_allowed_origin() -> String {
    "*".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub json: bool,
}

impl ServerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATABASE_URI})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatsError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.server.host)?;
        validate_range("server.port", self.server.port, 1, u16::MAX)?;

        let uri = &self.database.uri;
        if uri.trim().is_empty() {
            return Err(StatsError::MissingConfigError {
                field: "database.uri".to_string(),
            });
        }
        if uri.starts_with("http://") || uri.starts_with("https://") {
            validate_url("database.uri", uri)?;
        } else if !uri.starts_with("memory:") {
            validate_path("database.uri", uri.strip_prefix("file://").unwrap_or(uri))?;
        }

        validate_cors_origin("cors.allowed_origin", &self.cors.allowed_origin)?;
        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8080

[database]
uri = "https://records.example.com/professors"

[cors]
allowed_origin = "https://dashboard.example.com"

[logging]
verbose = true
json = true
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.database.uri, "https://records.example.com/professors");
        assert_eq!(config.cors.allowed_origin, "https://dashboard.example.com");
        assert!(config.logging.verbose);
        assert!(config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config = ServerConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.uri, DEFAULT_DATABASE_URI);
        assert_eq!(config.cors.allowed_origin, "*");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PROFESSOR_STATS_TEST_DB", "memory://");

        let toml_content = r#"
[database]
uri = "${PROFESSOR_STATS_TEST_DB}"
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.database.uri, "memory://");

        std::env::remove_var("PROFESSOR_STATS_TEST_DB");
    }

    #[test]
    fn test_unset_env_var_is_left_verbatim() {
        let toml_content = r#"
[database]
uri = "${PROFESSOR_STATS_SURELY_UNSET}"
"#;

        let config = ServerConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.database.uri, "${PROFESSOR_STATS_SURELY_UNSET}");
    }

    #[test]
    fn test_config_validation() {
        let mut config = ServerConfig::default();
        assert!(config.validate().is_ok());

        config.server.port = 0;
        assert!(config.validate().is_err());

        config.server.port = 3000;
        config.cors.allowed_origin = "not a url".to_string();
        assert!(config.validate().is_err());

        config.cors.allowed_origin = "*".to_string();
        config.database.uri = "https://".to_string();
        assert!(config.validate().is_err());

        config.database.uri = "".to_string();
        assert!(matches!(
            config.validate(),
            Err(StatsError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = ServerConfig::from_toml_str("[server\nport = ");
        assert!(matches!(
            result,
            Err(StatsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 4321\n")
            .unwrap();

        let config = ServerConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 4321);
    }
}
