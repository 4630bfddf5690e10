use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub wbuy: WbuyConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WbuyConfig {
    /// Base da API do upstream, sem barra final
    pub api_url: String,

    /// Bearer token entregue por deploy; vazio = sem credencial
    #[serde(default)]
    pub token: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[wbuy]
api_url = "https://sistema.sistemawbuy.com.br/api/v1"
token = ""
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// The WBUY_TOKEN environment variable always wins over whatever the file
/// says; the token is handed out per deploy, out of band.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = load_config_file()?;

    if let Ok(token) = std::env::var("WBUY_TOKEN") {
        let token = token.trim();
        if !token.is_empty() {
            config.wbuy.token = token.to_string();
        }
    }

    Ok(config)
}

fn load_config_file() -> anyhow::Result<Config> {
    // Try to find config.toml next to the executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    // Fall back to default config
    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
