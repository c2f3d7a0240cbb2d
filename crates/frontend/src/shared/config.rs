//! Runtime configuration of the dashboard.
//!
//! The API base URL comes from `ADMIN_API_BASE_URL` at build time. Without it
//! the backend is expected on port 3000 of the host serving the page.

/// Build-time override of the API base URL.
pub const API_BASE_ENV: Option<&str> = option_env!("ADMIN_API_BASE_URL");

/// Port the backend listens on when no override is configured.
pub const DEFAULT_API_PORT: u16 = 3000;

/// Delay before a search box or async select fires its request.
pub const DEBOUNCE_MS: u32 = 500;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME_MS: u32 = 4_000;

/// Page size used by async selects.
pub const SELECT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let (protocol, hostname) = match web_sys::window() {
            Some(window) => {
                let location = window.location();
                (location.protocol().ok(), location.hostname().ok())
            }
            None => (None, None),
        };
        Self {
            api_base: resolve_api_base(API_BASE_ENV, protocol.as_deref(), hostname.as_deref()),
        }
    }
}

/// Picks the API base URL: the configured value (trailing `/` removed) or
/// `<protocol>//<hostname>:3000` of the current page.
pub fn resolve_api_base(
    configured: Option<&str>,
    protocol: Option<&str>,
    hostname: Option<&str>,
) -> String {
    if let Some(base) = configured.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or("http:");
    let hostname = hostname.filter(|h| !h.is_empty()).unwrap_or("127.0.0.1");
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_base_wins() {
        assert_eq!(
            resolve_api_base(Some("https://api.example.co.id/"), Some("http:"), Some("localhost")),
            "https://api.example.co.id"
        );
    }

    #[test]
    fn test_falls_back_to_window_location() {
        assert_eq!(
            resolve_api_base(None, Some("https:"), Some("admin.local")),
            "https://admin.local:3000"
        );
        assert_eq!(resolve_api_base(Some("  "), None, None), "http://127.0.0.1:3000");
    }
}
