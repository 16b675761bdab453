use std::env;

/// Runtime configuration for the menu API
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port for the HTTP server (default: 3000)
    pub port: u16,

    /// Maximum accepted request body in bytes (default: 1 MB)
    pub max_body_size: usize,

    /// Insert demo categories, dishes and beverages into an empty database
    pub seed_demo_data: bool,

    /// Allowed CORS Origins (comma separated)
    pub allowed_origins: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            max_body_size: 1024 * 1024,
            seed_demo_data: false,
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.port),

            max_body_size: env::var("MAX_BODY_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_body_size),

            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(default.seed_demo_data),

            allowed_origins: env::var("ALLOWED_ORIGINS")
                .ok()
                .map(parse_origins)
                .unwrap_or(default.allowed_origins),
        }
    }

    /// Create config for development (demo data, permissive origins)
    pub fn development() -> Self {
        Self {
            seed_demo_data: true,
            allowed_origins: vec!["*".to_string()],
            ..Self::default()
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_origins(raw: String) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
