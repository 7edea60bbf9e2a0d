//! Site registry
//!
//! Managed sites are name/path records persisted as an ordered list in
//! `sites.json`. Registration order is the enumeration order for bulk runs.

mod schema;
mod store;

pub use schema::{Site, SiteRegistry};
pub use store::{SiteStoreError, load_sites, load_sites_from, save_sites, save_sites_to};

/// Read access to the registered sites.
pub trait SiteDirectory {
    /// Look up one site by name.
    fn find(&self, name: &str) -> Option<Site>;

    /// Every registered site, in registration order.
    fn list_all(&self) -> Vec<Site>;
}
