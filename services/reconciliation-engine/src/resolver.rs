//! Name resolution
//!
//! Partitions a requested list of item names against an authoritative
//! name → identifier mapping. Both the catalog builder (global mapping) and
//! the order builder (seller-scoped mapping) go through here.

use types::item::{NameIndex, ResolutionResult};

/// Resolve requested names against an authoritative mapping
///
/// Duplicates in `requested` collapse (set semantics). Every distinct
/// requested name lands in exactly one side of the result: its identifier in
/// `resolved`, or the name itself in `unresolved`. Output is ordered, so
/// identical inputs always produce identical results.
pub fn resolve<S: AsRef<str>>(requested: &[S], authoritative: &NameIndex) -> ResolutionResult {
    let mut result = ResolutionResult::default();

    for name in requested {
        let name = name.as_ref();
        match authoritative.get(name) {
            Some(id) => {
                result.resolved.insert(*id);
            }
            None => {
                result.unresolved.insert(name.to_owned());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::ids::ItemId;

    fn fruit_index() -> (NameIndex, ItemId, ItemId, ItemId) {
        let apple = ItemId::new();
        let banana = ItemId::new();
        let cherry = ItemId::new();
        let index = NameIndex::from([
            ("apple".to_string(), apple),
            ("banana".to_string(), banana),
            ("cherry".to_string(), cherry),
        ]);
        (index, apple, banana, cherry)
    }

    #[test]
    fn test_resolve_all_present() {
        let (index, apple, banana, _) = fruit_index();
        let result = resolve(&["banana", "apple"], &index);

        assert!(result.is_complete());
        assert_eq!(result.resolved_ids(), vec![apple, banana]);
    }

    #[test]
    fn test_resolve_partition() {
        let (index, apple, _, _) = fruit_index();
        let result = resolve(&["apple", "durian", "elderberry"], &index);

        assert_eq!(result.resolved_ids(), vec![apple]);
        assert_eq!(
            result.unresolved_names(),
            vec!["durian".to_string(), "elderberry".to_string()]
        );
    }

    #[test]
    fn test_resolve_deduplicates() {
        let (index, apple, _, _) = fruit_index();
        let result = resolve(&["apple", "apple", "kiwi", "kiwi"], &index);

        assert_eq!(result.resolved.len(), 1);
        assert!(result.resolved.contains(&apple));
        assert_eq!(result.unresolved_names(), vec!["kiwi".to_string()]);
    }

    #[test]
    fn test_resolve_against_empty_mapping() {
        let result = resolve(&["apple", "banana"], &NameIndex::new());

        assert!(result.resolved.is_empty());
        assert_eq!(result.unresolved.len(), 2);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let (index, _, _, _) = fruit_index();
        let result = resolve(&["Apple"], &index);
        assert_eq!(result.unresolved_names(), vec!["Apple".to_string()]);
    }
}

// ── Property-Based Tests ────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::{BTreeSet, HashMap};
    use types::ids::ItemId;

    fn catalog_names() -> impl Strategy<Value = BTreeSet<String>> {
        prop::collection::btree_set("[a-f]{1,3}", 0..12)
    }

    fn requested_names() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-f]{1,3}", 0..20)
    }

    fn index_for(names: &BTreeSet<String>) -> NameIndex {
        names.iter().map(|n| (n.clone(), ItemId::new())).collect()
    }

    proptest! {
        #[test]
        fn prop_every_name_classified_exactly_once(
            catalog in catalog_names(),
            requested in requested_names(),
        ) {
            let index = index_for(&catalog);
            let by_id: HashMap<ItemId, String> =
                index.iter().map(|(name, id)| (*id, name.clone())).collect();

            let result = resolve(&requested, &index);

            let resolved_names: BTreeSet<String> =
                result.resolved.iter().map(|id| by_id[id].clone()).collect();
            let deduped: BTreeSet<String> = requested.iter().cloned().collect();

            prop_assert!(resolved_names.is_disjoint(&result.unresolved));
            let union: BTreeSet<String> =
                resolved_names.union(&result.unresolved).cloned().collect();
            prop_assert_eq!(union, deduped);
        }

        #[test]
        fn prop_unresolved_absent_from_mapping(
            catalog in catalog_names(),
            requested in requested_names(),
        ) {
            let index = index_for(&catalog);
            let result = resolve(&requested, &index);

            for name in &result.unresolved {
                prop_assert!(!index.contains_key(name));
            }
        }

        #[test]
        fn prop_resolve_idempotent(
            catalog in catalog_names(),
            requested in requested_names(),
        ) {
            let index = index_for(&catalog);
            prop_assert_eq!(resolve(&requested, &index), resolve(&requested, &index));
        }

        #[test]
        fn prop_request_order_irrelevant(
            catalog in catalog_names(),
            requested in requested_names(),
        ) {
            let index = index_for(&catalog);
            let mut reversed = requested.clone();
            reversed.reverse();
            prop_assert_eq!(resolve(&requested, &index), resolve(&reversed, &index));
        }
    }
}
