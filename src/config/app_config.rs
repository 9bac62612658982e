#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub app_env: String,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
    pub identity_verifier_endpoint: Option<String>,
    pub media_storage_endpoint: String,
    pub media_storage_private_key: String,
    pub media_storage_folder: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            app_env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            postgres_database: std::env::var("POSTGRES_DATABASE")
                .unwrap_or_else(|_| "hotel_marketplace".to_string()),
            identity_verifier_endpoint: std::env::var("IDENTITY_VERIFIER_ENDPOINT")
                .ok()
                .map(|raw| raw.trim().to_string())
                .filter(|endpoint| !endpoint.is_empty()),
            media_storage_endpoint: std::env::var("MEDIA_STORAGE_ENDPOINT")
                .unwrap_or_else(|_| "https://upload.imagekit.io/api/v1/files/upload".to_string()),
            media_storage_private_key: std::env::var("MEDIA_STORAGE_PRIVATE_KEY")
                .unwrap_or_default(),
            media_storage_folder: std::env::var("MEDIA_STORAGE_FOLDER")
                .unwrap_or_else(|_| "/hotels".to_string()),
        }
    }

    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.postgres_database
        )
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
}
