use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OpenAI API key; ranking is disabled when unset
    #[serde(default)]
    pub openai_api_key: Option<String>,

    /// Base URL of the chat completions API
    #[serde(default = "default_openai_api_url")]
    pub openai_api_url: String,

    /// Model used for ranking
    #[serde(default = "default_openai_model")]
    pub openai_model: String,

    /// Directory holding users.json, offers.json and bookings.json
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_openai_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        // An empty key in .env means "not configured"
        if config
            .openai_api_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            config.openai_api_key = None;
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
