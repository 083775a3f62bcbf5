//! Scope selection: which devices a task run targets.

use indexmap::IndexSet;

use crate::inventory::Inventory;

/// The rule selecting the target subset of the inventory for one run.
///
/// Constructed fresh per task run by the presentation layer and passed by
/// value into the core; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSelection {
    /// Every device in the inventory.
    All,
    /// A single named device.
    Single(String),
    /// An explicit list of devices, in the given order.
    Multiple(Vec<String>),
    /// All devices whose `state` attribute equals the value (case-sensitive).
    ByState(String),
    /// All devices whose `site` attribute equals the value (case-sensitive).
    BySite(String),
}

impl ScopeSelection {
    /// Resolve this selection against an inventory into an ordered,
    /// duplicate-free list of device names.
    ///
    /// Names absent from the inventory are dropped. An empty result is a
    /// valid, expected value; the orchestrator turns it into a "no targets"
    /// signal before any session is opened.
    pub fn resolve(&self, inventory: &Inventory) -> Vec<String> {
        match self {
            Self::All => inventory.names().map(str::to_string).collect(),
            Self::Single(name) => {
                if inventory.contains(name) {
                    vec![name.clone()]
                } else {
                    vec![]
                }
            }
            Self::Multiple(names) => names
                .iter()
                .filter(|n| inventory.contains(n))
                .collect::<IndexSet<_>>()
                .into_iter()
                .cloned()
                .collect(),
            Self::ByState(state) => inventory
                .iter()
                .filter(|(_, d)| d.state == *state)
                .map(|(n, _)| n.to_string())
                .collect(),
            Self::BySite(site) => inventory
                .iter()
                .filter(|(_, d)| d.site == *site)
                .map(|(n, _)| n.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory() -> Inventory {
        Inventory::from_json(
            r#"{
            "a": {"device_type": "cisco_ios", "ip": "10.0.0.1", "site": "hq", "state": "TX"},
            "b": {"device_type": "arista_eos", "ip": "10.0.0.2", "site": "branch", "state": "TX"},
            "c": {"device_type": "cisco_ios", "ip": "10.0.0.3", "site": "hq", "state": "OK"}
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_all_in_inventory_order() {
        let inv = inventory();
        assert_eq!(ScopeSelection::All.resolve(&inv), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_existing_and_missing() {
        let inv = inventory();
        assert_eq!(
            ScopeSelection::Single("b".into()).resolve(&inv),
            vec!["b"]
        );
        assert!(ScopeSelection::Single("nope".into()).resolve(&inv).is_empty());
    }

    #[test]
    fn test_multiple_preserves_order_dedupes_and_filters() {
        let inv = inventory();
        let scope = ScopeSelection::Multiple(vec![
            "c".into(),
            "ghost".into(),
            "a".into(),
            "c".into(),
        ]);
        assert_eq!(scope.resolve(&inv), vec!["c", "a"]);
    }

    #[test]
    fn test_by_state_exact_match() {
        let inv = inventory();
        assert_eq!(
            ScopeSelection::ByState("TX".into()).resolve(&inv),
            vec!["a", "b"]
        );
        // Case-sensitive
        assert!(ScopeSelection::ByState("tx".into()).resolve(&inv).is_empty());
    }

    #[test]
    fn test_by_site_exact_match() {
        let inv = inventory();
        assert_eq!(
            ScopeSelection::BySite("hq".into()).resolve(&inv),
            vec!["a", "c"]
        );
        assert!(ScopeSelection::BySite("dc".into()).resolve(&inv).is_empty());
    }

    #[test]
    fn test_never_returns_unknown_names() {
        let inv = inventory();
        for scope in [
            ScopeSelection::All,
            ScopeSelection::Multiple(vec!["x".into(), "a".into(), "y".into()]),
            ScopeSelection::ByState("TX".into()),
            ScopeSelection::BySite("branch".into()),
        ] {
            for name in scope.resolve(&inv) {
                assert!(inv.contains(&name));
            }
        }
    }

    #[test]
    fn test_empty_inventory_yields_empty_set() {
        let inv = Inventory::from_json("{}").unwrap();
        assert!(ScopeSelection::All.resolve(&inv).is_empty());
        assert!(ScopeSelection::ByState("TX".into()).resolve(&inv).is_empty());
    }
}
