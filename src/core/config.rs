use std::env;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api: ApiConfig,
}

/// Connection settings for the Lost & Found REST API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API server (no trailing slash)
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(ClientConfig {
            api: ApiConfig::from_env()?,
        })
    }
}

impl ApiConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:3000";
    const DEFAULT_USER_AGENT: &'static str = "LostFoundClient/0.1";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("LOSTFOUND_API_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        if base_url.is_empty() {
            return Err("LOSTFOUND_API_BASE_URL must not be empty".to_string());
        }

        let user_agent = env::var("LOSTFOUND_USER_AGENT")
            .unwrap_or_else(|_| Self::DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            base_url,
            user_agent,
        })
    }

    pub fn upload_url(&self) -> String {
        format!("{}/api/upload", self.base_url)
    }

    pub fn posts_url(&self) -> String {
        format!("{}/api/posts", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            user_agent: Self::DEFAULT_USER_AGENT.to_string(),
        }
    }
}
