//! Stack components and actions
//!
//! A site's stack is the fixed trio of service containers: the web server,
//! the application runtime, and the database. The CLI-level `--all` flag is
//! not a component; it expands into [`ComponentSet::FULL`] at the boundary.

use std::fmt;

/// One member of a site's service stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Nginx,
    Php,
    Db,
}

impl Component {
    /// Every component, in dispatch order.
    pub const ALL: [Component; 3] = [Component::Nginx, Component::Php, Component::Db];

    /// Compose service name for this component.
    pub fn service_name(&self) -> &'static str {
        match self {
            Component::Nginx => "nginx",
            Component::Php => "php",
            Component::Db => "db",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.service_name())
    }
}

/// Typed set of stack components.
///
/// Iteration always yields nginx, php, db in that order, independent of
/// insertion order, so a run's dispatch sequence is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ComponentSet {
    nginx: bool,
    php: bool,
    db: bool,
}

impl ComponentSet {
    /// The full standard component set.
    pub const FULL: ComponentSet = ComponentSet {
        nginx: true,
        php: true,
        db: true,
    };

    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, component: Component) {
        match component {
            Component::Nginx => self.nginx = true,
            Component::Php => self.php = true,
            Component::Db => self.db = true,
        }
    }

    pub fn contains(&self, component: Component) -> bool {
        match component {
            Component::Nginx => self.nginx,
            Component::Php => self.php,
            Component::Db => self.db,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.nginx || self.php || self.db)
    }

    pub fn len(&self) -> usize {
        [self.nginx, self.php, self.db]
            .iter()
            .filter(|set| **set)
            .count()
    }

    /// Selected components in dispatch order.
    pub fn iter(&self) -> impl Iterator<Item = Component> + '_ {
        Component::ALL
            .iter()
            .copied()
            .filter(|component| self.contains(*component))
    }
}

/// The kind of operation requested for a stack.
///
/// `Reload` maps to an in-place graceful signal where the component supports
/// one; `Restart` is a full stop/start cycle and is defined for every
/// component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackAction {
    Reload,
    Restart,
}

impl StackAction {
    pub fn verb(&self) -> &'static str {
        match self {
            StackAction::Reload => "reload",
            StackAction::Restart => "restart",
        }
    }

    /// Progressive form for status lines ("Reloading nginx").
    pub fn verb_progressive(&self) -> &'static str {
        match self {
            StackAction::Reload => "Reloading",
            StackAction::Restart => "Restarting",
        }
    }
}

impl fmt::Display for StackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_contains_nothing() {
        let set = ComponentSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn full_set_contains_every_component() {
        assert_eq!(ComponentSet::FULL.len(), 3);
        for component in Component::ALL {
            assert!(ComponentSet::FULL.contains(component));
        }
    }

    #[test]
    fn iteration_order_is_fixed_regardless_of_insertion_order() {
        let mut set = ComponentSet::new();
        set.insert(Component::Db);
        set.insert(Component::Nginx);

        let components: Vec<Component> = set.iter().collect();
        assert_eq!(components, vec![Component::Nginx, Component::Db]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = ComponentSet::new();
        set.insert(Component::Php);
        set.insert(Component::Php);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn action_verbs() {
        assert_eq!(StackAction::Reload.to_string(), "reload");
        assert_eq!(StackAction::Restart.to_string(), "restart");
        assert_eq!(StackAction::Restart.verb_progressive(), "Restarting");
    }
}
