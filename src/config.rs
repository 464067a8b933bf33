use serde::Deserialize;

pub const DEFAULT_FDC_BASE_URL: &str = "https://api.nal.usda.gov/fdc/v1";

/// Environment variables checked for the FDC key, first match wins.
pub const FDC_KEY_VARS: [&str; 4] = [
    "FDC_API_KEY",
    "USDA_API_KEY",
    "USDA_FDC_API_KEY",
    "NEXT_PUBLIC_FDC_API_KEY",
];

#[derive(Debug, Clone, Deserialize)]
pub struct FdcConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub fdc: FdcConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = non_empty_var("DATABASE_URL");
        let fdc = FdcConfig {
            base_url: non_empty_var("FDC_BASE_URL").unwrap_or_else(|| DEFAULT_FDC_BASE_URL.into()),
            api_key: first_var(&FDC_KEY_VARS),
        };
        Ok(Self { database_url, fdc })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn first_var(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| non_empty_var(name))
}
