use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use stone_eng_frontend::models::SiteOptions;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub cms_service_domain: String,
    pub cms_api_key: String,
    pub resend_api_key: String,
    pub mail_from: String,
    pub mail_owner: String,
    pub public_dir: PathBuf,
    pub pkg_dir: PathBuf,
    pub site: SiteOptions,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key/value source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let bind_addr = match get("BIND_ADDR") {
            Some(value) => value.parse::<SocketAddr>().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let alert_on_success = match get("CONTACT_SUCCESS_ALERT") {
            Some(value) => parse_flag("CONTACT_SUCCESS_ALERT", value)?,
            None => true,
        };

        Ok(Self {
            bind_addr,
            cms_service_domain: get("MICROCMS_SERVICE_DOMAIN").unwrap_or_else(|| "stone-eng".to_string()),
            cms_api_key: required("MICROCMS_API_KEY")?,
            resend_api_key: required("RESEND_API_KEY")?,
            mail_from: required("MAIL_FROM_ADDRESS")?,
            mail_owner: required("MAIL_OWNER_ADDRESS")?,
            public_dir: get("PUBLIC_DIR").unwrap_or_else(|| "public".to_string()).into(),
            pkg_dir: get("PKG_DIR").unwrap_or_else(|| "pkg".to_string()).into(),
            site: SiteOptions {
                alert_on_success,
                gallery_link_base: get("GALLERY_LINK_BASE").unwrap_or_default(),
            },
            sentry_dsn: get("SENTRY_DSN"),
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}
