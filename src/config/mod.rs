use serde::Deserialize;
use std::path::PathBuf;

fn default_timeout_secs() -> u64 {
    30
}

/// Where saved field records go
#[derive(Debug, Deserialize, Clone)]
pub struct SaveConfig {
    pub endpoint: String,
    #[serde(default)]
    pub api_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    /// Default field name when the CLI doesn't pass one
    #[serde(default)]
    pub field_name: Option<String>,
    /// Simplification level applied to drawn boundaries (0 = off)
    #[serde(default)]
    pub simplify: u8,
    #[serde(default)]
    pub save: Option<SaveConfig>,
}

impl FileConfig {
    /// Load the first parseable config found on the search path
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => return Some(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("fieldacre.toml"));
    paths.push(PathBuf::from(".fieldacre.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("fieldacre").join("config.toml"));
        paths.push(config_dir.join("fieldacre.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".fieldacre.toml"));
        paths.push(home.join(".config").join("fieldacre").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let toml_text = r#"
            field_name = "north plot"
            simplify = 2

            [save]
            endpoint = "https://fields.example.com/rest/v1/fields"
            api_token = "secret"
            timeout_secs = 10
        "#;
        let config: FileConfig = toml::from_str(toml_text).unwrap();

        assert_eq!(config.field_name.as_deref(), Some("north plot"));
        assert_eq!(config.simplify, 2);
        let save = config.save.unwrap();
        assert_eq!(save.endpoint, "https://fields.example.com/rest/v1/fields");
        assert_eq!(save.timeout_secs, 10);
    }

    #[test]
    fn test_save_timeout_defaults() {
        let config: FileConfig = toml::from_str(
            r#"
            [save]
            endpoint = "https://fields.example.com"
        "#,
        )
        .unwrap();
        assert_eq!(config.save.unwrap().timeout_secs, 30);
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.field_name.is_none());
        assert!(config.save.is_none());
        assert_eq!(config.simplify, 0);
    }
}
