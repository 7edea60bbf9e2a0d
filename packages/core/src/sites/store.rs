//! Site registry persistence
//!
//! Load/save for sites.json. A missing file is an empty registry, not an
//! error; anything else unreadable is surfaced as a typed error.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::config::paths::get_sites_path;

use super::schema::SiteRegistry;

#[derive(Debug, Error)]
pub enum SiteStoreError {
    #[error("could not determine the sitestack config directory")]
    NoConfigDir,

    #[error("failed to read site registry at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write site registry at {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("site registry at {path} is not valid: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the site registry from its default location.
pub fn load_sites() -> Result<SiteRegistry, SiteStoreError> {
    let path = get_sites_path().ok_or(SiteStoreError::NoConfigDir)?;
    load_sites_from(&path)
}

/// Load the site registry from an explicit path.
pub fn load_sites_from(path: &Path) -> Result<SiteRegistry, SiteStoreError> {
    if !path.exists() {
        debug!("no site registry at {}, starting empty", path.display());
        return Ok(SiteRegistry::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| SiteStoreError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SiteStoreError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Save the site registry to its default location.
pub fn save_sites(registry: &SiteRegistry) -> Result<(), SiteStoreError> {
    let path = get_sites_path().ok_or(SiteStoreError::NoConfigDir)?;
    save_sites_to(registry, &path)
}

/// Save the site registry to an explicit path, creating parent directories.
pub fn save_sites_to(registry: &SiteRegistry, path: &Path) -> Result<(), SiteStoreError> {
    let write_err = |source| SiteStoreError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let json = serde_json::to_string_pretty(registry).expect("registry serializes");
    fs::write(path, json + "\n").map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::Site;

    #[test]
    fn missing_file_is_an_empty_registry() {
        let dir = tempfile::tempdir().unwrap();
        let registry = load_sites_from(&dir.path().join("sites.json")).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn save_and_load_roundtrip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("sites.json");

        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("z.com", "/var/www/z.com"));
        registry.insert(Site::new("a.com", "/var/www/a.com"));
        save_sites_to(&registry, &path).unwrap();

        let loaded = load_sites_from(&path).unwrap();
        assert_eq!(loaded, registry);
        let names: Vec<&str> = loaded.iter().map(|site| site.name.as_str()).collect();
        assert_eq!(names, vec!["z.com", "a.com"]);
    }

    #[test]
    fn malformed_registry_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        fs::write(&path, "{not json").unwrap();

        let error = load_sites_from(&path).unwrap_err();
        assert!(matches!(error, SiteStoreError::Parse { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        fs::write(&path, r#"{"version": 1, "sitez": []}"#).unwrap();

        let error = load_sites_from(&path).unwrap_err();
        assert!(matches!(error, SiteStoreError::Parse { .. }));
    }
}
