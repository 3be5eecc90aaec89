use std::env;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://escola.db".to_string());

        let port = match env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| AppError::Validation(format!("PORT is not a port number: {}", value)))?,
            Err(_) => 3000,
        };

        Ok(Self { database_url, port })
    }
}
