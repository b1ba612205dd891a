/// Frontend settings, fixed at build time and shared through a yew context
#[derive(Debug, Clone, PartialEq)]
pub struct FrontendConfig {
    /// Base URL of the backend API, without a trailing slash
    pub api_base_url: String,
    /// Sent as `X-User-Id` on every request
    pub user_id: String,
}

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_USER_ID: &str = "demo-user";

impl FrontendConfig {
    /// Read `REPORTS_API_URL` / `REPORTS_USER_ID` as set when the bundle was built
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("REPORTS_API_URL"), option_env!("REPORTS_USER_ID"))
    }

    pub fn from_values(api_base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let user_id = user_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_USER_ID)
            .to_string();

        Self { api_base_url, user_id }
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FrontendConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.user_id, "demo-user");
    }

    #[test]
    fn test_overrides_are_normalized() {
        let config = FrontendConfig::from_values(Some("https://reports.example.com/api/ "), Some(" alice "));
        assert_eq!(config.api_base_url, "https://reports.example.com/api");
        assert_eq!(config.user_id, "alice");
    }

    #[test]
    fn test_blank_values_use_defaults() {
        assert_eq!(FrontendConfig::from_values(Some(""), Some("  ")), FrontendConfig::default());
    }
}
