//! Site and server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::ConfigError;

/// Owner details and fixed locations the views fall back on when a document
/// leaves a field empty. Provided to the view tree through context.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub owner_name: String,
    pub role: String,
    pub author_bio: String,
    pub default_tagline: String,
    pub contact_email: String,
    pub profile_image: String,
    pub cv_path: String,
    pub data_root: String,
    pub copyright_year: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "Asadullah Imran".into(),
            role: "MERN Stack Developer".into(),
            author_bio: "Final-year Computer Science student at United International University. \
                         Passionate about building modern web applications and sharing knowledge \
                         through blog posts."
                .into(),
            default_tagline: "Building scalable digital solutions with JavaScript ecosystems".into(),
            contact_email: "asadullahimran19@gmail.com".into(),
            profile_image: "/images/profile/b.jpg".into(),
            cv_path: "/docs/Asadullah_Imran_CV.pdf".into(),
            data_root: "/data".into(),
            copyright_year: 2025,
        }
    }
}

impl SiteConfig {
    pub fn mailto(&self, email: Option<&str>) -> String {
        let address = email
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(&self.contact_email);
        format!("mailto:{address}")
    }
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_SITE_ROOT: &str = "./public";

/// Settings of the static file server.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub site_root: PathBuf,
}

impl ServerConfig {
    /// Reads `BIND_ADDR` and `SITE_ROOT` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind = lookup("BIND_ADDR")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::BindAddr(bind.clone(), e))?;

        let site_root = lookup("SITE_ROOT")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string());

        Ok(Self {
            bind_addr,
            site_root: PathBuf::from(site_root),
        })
    }

    /// The site root must be an existing directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site_root.is_dir() {
            Ok(())
        } else {
            Err(ConfigError::SiteRoot(self.site_root.display().to_string()))
        }
    }

    pub fn index_file(&self) -> PathBuf {
        self.site_root.join("index.html")
    }
}
