use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub session_storage_key: String,
    pub auth: AuthConfig,
    pub ui: UiConfig,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub demo_email: String,
    pub demo_password: String,
    /// Send an already signed-in user from `#/login` to the pet list.
    /// Off by default: the login page stays reachable while signed in.
    pub redirect_authenticated_login: bool,
    pub login_delay_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    pub toast_duration_ms: u32,
    pub list_page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://petstore.swagger.io/v2".to_string(),
            session_storage_key: "petstore_user".to_string(),
            auth: AuthConfig::default(),
            ui: UiConfig::default(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            demo_email: "omar@gmail.com".to_string(),
            demo_password: "123456".to_string(),
            redirect_authenticated_login: false,
            login_delay_ms: 1000,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 3000,
            list_page_size: 10,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: option_env!("PETSTORE_API_URL")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            session_storage_key: option_env!("SESSION_STORAGE_KEY")
                .map(str::to_string)
                .unwrap_or(defaults.session_storage_key),
            auth: AuthConfig {
                demo_email: option_env!("DEMO_EMAIL")
                    .map(str::to_string)
                    .unwrap_or(defaults.auth.demo_email),
                demo_password: option_env!("DEMO_PASSWORD")
                    .map(str::to_string)
                    .unwrap_or(defaults.auth.demo_password),
                redirect_authenticated_login: option_env!("REDIRECT_AUTHENTICATED_LOGIN")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.auth.redirect_authenticated_login),
                login_delay_ms: option_env!("LOGIN_DELAY_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.auth.login_delay_ms),
            },
            ui: UiConfig {
                toast_duration_ms: option_env!("TOAST_DURATION_MS")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.ui.toast_duration_ms),
                list_page_size: option_env!("LIST_PAGE_SIZE")
                    .and_then(|v| v.parse().ok())
                    .filter(|size: &usize| *size > 0)
                    .unwrap_or(defaults.ui.list_page_size),
            },
            log_level: option_env!("LOG_LEVEL")
                .map(str::to_string)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Log level for wasm-logger, `info` when the value is unknown
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_demo_api() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "https://petstore.swagger.io/v2");
        assert_eq!(config.session_storage_key, "petstore_user");
        assert!(!config.auth.redirect_authenticated_login);
        assert_eq!(config.ui.list_page_size, 10);
    }

    #[test]
    fn unknown_log_level_falls_back_to_info() {
        let config = AppConfig {
            log_level: "chatty".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Info);

        let config = AppConfig {
            log_level: "debug".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.log_level(), log::Level::Debug);
    }
}
