//! Site configuration.
//!
//! The configuration is embedded at build time from `site.toml` and parsed
//! once at startup. Every field has a default, so a partial file (or an
//! unparsable one) still yields a usable [`SiteConfig`].

use serde::Deserialize;
use tracing::warn;

use crate::constants::*;
use crate::error::SiteError;

const EMBEDDED: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub brand_name: String,
    pub base_url: String,
    pub log_level: String,
    pub contact: ContactConfig,
    pub social: SocialConfig,
    pub geo: GeoConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub email: String,
    pub phone: String,
    pub address: String,
    /// When set, submissions are POSTed here instead of being simulated.
    pub endpoint: Option<String>,
    pub simulated_delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    pub twitter: String,
    pub linkedin: String,
    pub facebook: String,
    pub instagram: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoConfig {
    pub region: String,
    pub placename: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: BRAND_NAME.to_string(),
            base_url: BASE_URL.to_string(),
            log_level: "info".to_string(),
            contact: ContactConfig::default(),
            social: SocialConfig::default(),
            geo: GeoConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            email: CONTACT_EMAIL.to_string(),
            phone: CONTACT_PHONE.to_string(),
            address: CONTACT_ADDRESS.to_string(),
            endpoint: None,
            simulated_delay_ms: SIMULATED_SUBMIT_DELAY_MS,
        }
    }
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            twitter: TWITTER_HANDLE.to_string(),
            linkedin: "https://linkedin.com/company/cabinetcm360".to_string(),
            facebook: "https://facebook.com/cabinetcm360".to_string(),
            instagram: "https://instagram.com/cabinetcm360".to_string(),
        }
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            region: GEO_REGION.to_string(),
            placename: GEO_PLACENAME.to_string(),
            latitude: GEO_LATITUDE.to_string(),
            longitude: GEO_LONGITUDE.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn parse(source: &str) -> Result<Self, SiteError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse the embedded `site.toml`, falling back to defaults.
    pub fn load() -> Self {
        match Self::parse(EMBEDDED) {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "site.toml illisible, configuration par défaut");
                Self::default()
            }
        }
    }

    /// Qualify a site-relative path against `base_url`. Absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    pub fn geo_position(&self) -> String {
        format!("{};{}", self.geo.latitude, self.geo.longitude)
    }

    pub fn icbm(&self) -> String {
        format!("{}, {}", self.geo.latitude, self.geo.longitude)
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.contact.email)
    }

    /// Profile URL for the configured Twitter handle.
    pub fn twitter_url(&self) -> String {
        format!(
            "https://twitter.com/{}",
            self.social.twitter.trim_start_matches('@').to_lowercase()
        )
    }

    pub fn tel(&self) -> String {
        format!("tel:{}", self.contact.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = SiteConfig::parse(EMBEDDED).expect("embedded site.toml");
        assert_eq!(config.brand_name, "Cabinet CM360");
        assert_eq!(config.contact.phone, "438-521-3151");
        assert!(config.contact.endpoint.is_none());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = SiteConfig::parse("base_url = \"https://staging.example.ca\"").unwrap();
        assert_eq!(config.base_url, "https://staging.example.ca");
        assert_eq!(config.brand_name, BRAND_NAME);
        assert_eq!(config.geo.placename, "Montréal");
        assert_eq!(config.contact.simulated_delay_ms, 1_000);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(matches!(
            SiteConfig::parse("base_url = [1, 2"),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_absolute_url() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("/services"), "https://cabinetcm360.com/services");
        assert_eq!(config.absolute_url("https://cdn.example.com/a.jpg"), "https://cdn.example.com/a.jpg");
        assert_eq!(config.absolute_url("http://example.com/"), "http://example.com/");
    }

    #[test]
    fn test_relative_path_starting_with_http_is_qualified() {
        let config = SiteConfig::default();
        assert_eq!(config.absolute_url("httpdocs/x.jpg"), "https://cabinetcm360.com/httpdocs/x.jpg");
        assert_eq!(config.absolute_url("/https-guide"), "https://cabinetcm360.com/https-guide");
    }

    #[test]
    fn test_geo_formats() {
        let config = SiteConfig::default();
        assert_eq!(config.geo_position(), "45.5017;-73.5673");
        assert_eq!(config.icbm(), "45.5017, -73.5673");
    }

    #[test]
    fn test_contact_links() {
        let config = SiteConfig::default();
        assert_eq!(config.mailto(), "mailto:info@cabinetcm360.com");
        assert_eq!(config.tel(), "tel:438-521-3151");
        assert_eq!(config.twitter_url(), "https://twitter.com/cabinetcm360");
    }
}
