// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_file: String,
    pub upload_dir: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        AppConfig {
            data_file: env::var("DATA_FILE").unwrap_or_else(|_| "skill_pledges.csv".to_string()),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "10000".to_string())
                .parse()
                .expect("PORT must be a number"),
        }
    }
}
