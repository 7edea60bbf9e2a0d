//! Site registry schema
//!
//! Defines the structure of the sites.json file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::SiteDirectory;

/// A managed site: a named deployment with its own compose working
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Site {
    /// Unique site name (e.g. "example.com")
    pub name: String,

    /// Directory holding the site's compose file; stack commands run here
    pub path: PathBuf,
}

impl Site {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

/// The persisted site registry.
///
/// Serialized to/from `~/.config/sitestack/sites.json`. Sites keep their
/// registration order; bulk runs enumerate in exactly this order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteRegistry {
    /// Registry file version for migrations
    pub version: u32,

    #[serde(default)]
    sites: Vec<Site>,
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self {
            version: 1,
            sites: Vec::new(),
        }
    }
}

impl SiteRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_site(&self, name: &str) -> bool {
        self.sites.iter().any(|site| site.name == name)
    }

    /// Register a site. An existing entry with the same name is replaced in
    /// place, keeping its position; the previous record is returned.
    pub fn insert(&mut self, site: Site) -> Option<Site> {
        match self.sites.iter_mut().find(|s| s.name == site.name) {
            Some(slot) => Some(std::mem::replace(slot, site)),
            None => {
                self.sites.push(site);
                None
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Site> {
        let index = self.sites.iter().position(|site| site.name == name)?;
        Some(self.sites.remove(index))
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Site> {
        self.sites.iter()
    }
}

impl SiteDirectory for SiteRegistry {
    fn find(&self, name: &str) -> Option<Site> {
        self.sites.iter().find(|site| site.name == name).cloned()
    }

    fn list_all(&self) -> Vec<Site> {
        self.sites.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_registration_order() {
        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("b.com", "/var/www/b.com"));
        registry.insert(Site::new("a.com", "/var/www/a.com"));
        registry.insert(Site::new("c.com", "/var/www/c.com"));

        let names: Vec<&str> = registry.iter().map(|site| site.name.as_str()).collect();
        assert_eq!(names, vec!["b.com", "a.com", "c.com"]);
        assert_eq!(registry.list_all().len(), 3);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("a.com", "/old"));
        registry.insert(Site::new("b.com", "/var/www/b.com"));

        let previous = registry.insert(Site::new("a.com", "/new"));
        assert_eq!(previous, Some(Site::new("a.com", "/old")));
        assert_eq!(registry.len(), 2);

        let names: Vec<&str> = registry.iter().map(|site| site.name.as_str()).collect();
        assert_eq!(names, vec!["a.com", "b.com"]);
        assert_eq!(registry.find("a.com").unwrap().path, PathBuf::from("/new"));
    }

    #[test]
    fn remove_returns_the_record() {
        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("a.com", "/var/www/a.com"));

        assert!(registry.remove("missing.com").is_none());
        let removed = registry.remove("a.com").unwrap();
        assert_eq!(removed.name, "a.com");
        assert!(registry.is_empty());
    }

    #[test]
    fn find_is_exact_match() {
        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("example.com", "/var/www/example.com"));

        assert!(registry.find("example.com").is_some());
        assert!(registry.find("example").is_none());
        assert!(registry.has_site("example.com"));
    }

    #[test]
    fn serialize_deserialize_roundtrip() {
        let mut registry = SiteRegistry::new();
        registry.insert(Site::new("a.com", "/var/www/a.com"));
        registry.insert(Site::new("b.com", "/var/www/b.com"));

        let json = serde_json::to_string(&registry).unwrap();
        let parsed: SiteRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(registry, parsed);
    }

    #[test]
    fn deserialize_tolerates_missing_site_list() {
        let registry: SiteRegistry = serde_json::from_str(r#"{"version": 1}"#).unwrap();
        assert!(registry.is_empty());
    }
}
