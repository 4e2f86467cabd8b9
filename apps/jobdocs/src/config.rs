use crate::errors::AppError;
use crate::formatting::row_formatter::JdContentPolicy;

const DEFAULT_DEPLOYMENT_MODEL: &str = "gpt-4o";
const DEFAULT_API_VERSION: &str = "2024-07-01-preview";
const DEFAULT_SHEET_NAME: &str = "Form Responses 1";

/// Application configuration loaded from environment variables.
/// Validated once at startup; nothing touches the sheet until this succeeds.
#[derive(Debug, Clone)]
pub struct Config {
    pub azure_openai_api_key: String,
    pub azure_apim_base_url: String,
    pub azure_deployment_model: String,
    pub azure_api_version: String,
    pub google_access_token: String,
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub docs_folder_id: String,
    /// Which columns feed the JD prompt. `JD_CONTENT_POLICY`, default `allowlist`.
    pub jd_content_policy: JdContentPolicy,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                AppError::Configuration(format!(
                    "Required environment variable '{key}' is not set"
                ))
            })
        };

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::Configuration(format!("PORT must be a valid port number, got '{raw}'"))
            })?,
            None => 8080,
        };

        let jd_content_policy = match get("JD_CONTENT_POLICY") {
            Some(raw) => raw.parse::<JdContentPolicy>().map_err(AppError::Configuration)?,
            None => JdContentPolicy::default(),
        };

        Ok(Config {
            azure_openai_api_key: require("AZURE_OPENAI_API_KEY")?,
            azure_apim_base_url: require("AZURE_APIM_BASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            azure_deployment_model: get("AZURE_DEPLOYMENT_MODEL")
                .unwrap_or_else(|| DEFAULT_DEPLOYMENT_MODEL.to_string()),
            azure_api_version: get("AZURE_API_VERSION")
                .unwrap_or_else(|| DEFAULT_API_VERSION.to_string()),
            google_access_token: require("GOOGLE_ACCESS_TOKEN")?,
            spreadsheet_id: require("SPREADSHEET_ID")?,
            sheet_name: get("SHEET_NAME").unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            docs_folder_id: require("DOCS_FOLDER_ID")?,
            jd_content_policy,
            port,
            rust_log: get("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("AZURE_OPENAI_API_KEY", "secret"),
            ("AZURE_APIM_BASE_URL", "https://apim.example.net/esotad/"),
            ("GOOGLE_ACCESS_TOKEN", "ya29.token"),
            ("SPREADSHEET_ID", "sheet-123"),
            ("DOCS_FOLDER_ID", "folder-456"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<Config, AppError> {
        Config::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn test_defaults_applied_when_optional_vars_missing() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.azure_deployment_model, "gpt-4o");
        assert_eq!(config.azure_api_version, "2024-07-01-preview");
        assert_eq!(config.sheet_name, "Form Responses 1");
        assert_eq!(config.jd_content_policy, JdContentPolicy::Allowlist);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_base_url_trailing_slash_is_stripped() {
        let config = load(&full_env()).unwrap();
        assert_eq!(config.azure_apim_base_url, "https://apim.example.net/esotad");
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let mut env = full_env();
        env.remove("AZURE_OPENAI_API_KEY");
        let err = load(&env).unwrap_err();
        assert!(matches!(err, AppError::Configuration(ref msg) if msg.contains("AZURE_OPENAI_API_KEY")));
    }

    #[test]
    fn test_blank_folder_id_counts_as_missing() {
        let mut env = full_env();
        env.insert("DOCS_FOLDER_ID", "   ");
        let err = load(&env).unwrap_err();
        assert!(matches!(err, AppError::Configuration(ref msg) if msg.contains("DOCS_FOLDER_ID")));
    }

    #[test]
    fn test_jd_content_policy_parsed() {
        let mut env = full_env();
        env.insert("JD_CONTENT_POLICY", "all-except-links");
        assert_eq!(
            load(&env).unwrap().jd_content_policy,
            JdContentPolicy::AllExceptLinks
        );

        env.insert("JD_CONTENT_POLICY", "bogus");
        assert!(matches!(load(&env), Err(AppError::Configuration(_))));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let mut env = full_env();
        env.insert("PORT", "not-a-port");
        assert!(matches!(load(&env), Err(AppError::Configuration(_))));
    }
}
