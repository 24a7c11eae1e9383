//! Client configuration.
//!
//! Environment variables:
//! - `TRAVELGROUPS_API_BASE_URL`: base URL for API calls (default: empty, i.e. relative paths)
//! - `TRAVELGROUPS_ASSET_PREFIX`: route segment for uploaded images (default: "/s3")
//! - `TRAVELGROUPS_ICON_PREFIX`: route segment for feature icons (default: "/travelgroups")
//!
//! Desktop builds read them from the process environment at startup. The
//! browser has no environment, so web builds bake them in at compile time.

pub const DEFAULT_ASSET_PREFIX: &str = "/s3";
pub const DEFAULT_ICON_PREFIX: &str = "/travelgroups";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub asset_prefix: String,
    pub icon_prefix: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            icon_prefix: DEFAULT_ICON_PREFIX.to_string(),
        }
    }
}

impl ClientConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| {
            let value = match name {
                "TRAVELGROUPS_API_BASE_URL" => option_env!("TRAVELGROUPS_API_BASE_URL"),
                "TRAVELGROUPS_ASSET_PREFIX" => option_env!("TRAVELGROUPS_ASSET_PREFIX"),
                "TRAVELGROUPS_ICON_PREFIX" => option_env!("TRAVELGROUPS_ICON_PREFIX"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Build a config from an arbitrary variable source. Unset or blank
    /// variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_base_url: read("TRAVELGROUPS_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            asset_prefix: read("TRAVELGROUPS_ASSET_PREFIX").unwrap_or(defaults.asset_prefix),
            icon_prefix: read("TRAVELGROUPS_ICON_PREFIX").unwrap_or(defaults.icon_prefix),
        }
    }

    /// URL of an uploaded image, e.g. `/s3/abc.jpg`.
    pub fn asset_url(&self, key: &str) -> String {
        join_path(&self.asset_prefix, key)
    }

    /// URL of a static feature icon, e.g. `/travelgroups/delete.svg`.
    pub fn icon_url(&self, file: &str) -> String {
        join_path(&self.icon_prefix, file)
    }
}

fn join_path(prefix: &str, tail: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        tail.trim_start_matches('/')
    )
}
