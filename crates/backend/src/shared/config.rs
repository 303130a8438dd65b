use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub mailer: MailerConfig,
    #[serde(default)]
    pub images: ImagesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Каталог со сборкой фронтенда (index.html + wasm)
    pub static_dir: String,
}

/// Параметры EmailJS
#[derive(Debug, Deserialize, Clone)]
pub struct MailerConfig {
    #[serde(default = "default_mailer_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    #[serde(default = "default_mailer_timeout")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImagesConfig {
    pub dir: String,
    pub quality: u8,
}

fn default_mailer_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_mailer_timeout() -> u64 {
    15
}

impl Default for MailerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_mailer_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            timeout_secs: default_mailer_timeout(),
        }
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: "public/images".to_string(),
            quality: 80,
        }
    }
}

impl MailerConfig {
    /// All three EmailJS identifiers are present.
    pub fn is_configured(&self) -> bool {
        !self.service_id.trim().is_empty()
            && !self.template_id.trim().is_empty()
            && !self.public_key.trim().is_empty()
    }
}

impl Config {
    /// Ключи EmailJS можно не хранить в config.toml, а передать через окружение
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields = [
            ("EMAILJS_SERVICE_ID", &mut self.mailer.service_id),
            ("EMAILJS_TEMPLATE_ID", &mut self.mailer.template_id),
            ("EMAILJS_PUBLIC_KEY", &mut self.mailer.public_key),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) {
                *field = value;
            }
        }
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
host = "0.0.0.0"
port = 3000
static_dir = "dist"

[mailer]
endpoint = "https://api.emailjs.com/api/v1.0/email/send"
timeout_secs = 15

[images]
dir = "public/images"
quality = 80
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit `--config` path
/// 2. config.toml next to the executable
/// 3. Embedded default config
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match find_config_file(explicit) {
        Some(config_path) => {
            tracing::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(&config_path)?;
            toml::from_str::<Config>(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str::<Config>(DEFAULT_CONFIG)?
        }
    };
    config.apply_env_overrides();
    Ok(config)
}

fn find_config_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let exe_path = std::env::current_exe().ok()?;
    let config_path = exe_path.parent()?.join("config.toml");
    if config_path.exists() {
        Some(config_path)
    } else {
        tracing::warn!("config.toml not found at: {}", config_path.display());
        None
    }
}

/// Resolves relative paths relative to the executable directory
pub fn resolve_path(path: &str) -> PathBuf {
    let candidate = Path::new(path);

    if candidate.is_absolute() {
        return candidate.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(candidate);
        }
    }

    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.images.quality, 80);
        assert_eq!(config.mailer.timeout_secs, 15);
        assert!(!config.mailer.is_configured());
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            static_dir = "/srv/site"
            "#,
        )
        .unwrap();
        assert_eq!(config.images.dir, "public/images");
        assert_eq!(config.mailer.endpoint, default_mailer_endpoint());
        assert_eq!(resolve_path("/srv/site"), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_env_overrides_fill_mailer_keys() {
        let mut config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        config.apply_overrides(|key| match key {
            "EMAILJS_SERVICE_ID" => Some("service_x".to_string()),
            "EMAILJS_TEMPLATE_ID" => Some("template_y".to_string()),
            "EMAILJS_PUBLIC_KEY" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.mailer.service_id, "service_x");
        assert_eq!(config.mailer.template_id, "template_y");
        assert!(config.mailer.public_key.is_empty());
        assert!(!config.mailer.is_configured());

        config.apply_overrides(|key| (key == "EMAILJS_PUBLIC_KEY").then(|| "pk".to_string()));
        assert!(config.mailer.is_configured());
    }
}
