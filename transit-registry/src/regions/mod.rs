//! The region hierarchy.
//!
//! Regions form a forest: every region has at most one parent and any
//! number of subregions, and links are add-only. A region that has
//! never been attached anywhere is the root of its own tree.

use crate::domain::{Coord, RegionId};
use std::collections::{HashMap, HashSet};
use tracing::debug;

#[derive(Debug, Clone)]
struct RegionRecord {
    name: String,
    boundary: Vec<Coord>,
    parent: Option<RegionId>,
    children: Vec<RegionId>,
}

/// Owns every region and the parent/child links between them.
///
/// # Examples
///
/// ```
/// use transit_registry::domain::RegionId;
/// use transit_registry::regions::RegionForest;
///
/// let mut forest = RegionForest::new();
/// assert!(forest.add(RegionId::new(1), "Uusimaa".to_string(), Vec::new()));
/// assert!(forest.add(RegionId::new(2), "Helsinki".to_string(), Vec::new()));
/// assert!(forest.attach_subregion(RegionId::new(2), RegionId::new(1)));
/// assert_eq!(forest.ancestor_chain(RegionId::new(2)), vec![RegionId::new(1)]);
/// ```
#[derive(Debug, Default)]
pub struct RegionForest {
    regions: HashMap<RegionId, RegionRecord>,
    insertion_order: Vec<RegionId>,
}

impl RegionForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every region and link.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.insertion_order.clear();
    }

    /// Add a region with no parent and no subregions. Returns `false`
    /// if the id is already taken.
    pub fn add(&mut self, id: RegionId, name: String, boundary: Vec<Coord>) -> bool {
        if self.regions.contains_key(&id) {
            return false;
        }
        self.regions.insert(
            id,
            RegionRecord {
                name,
                boundary,
                parent: None,
                children: Vec::new(),
            },
        );
        self.insertion_order.push(id);
        true
    }

    pub fn contains(&self, id: RegionId) -> bool {
        self.regions.contains_key(&id)
    }

    /// Number of regions currently stored.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Every region id, in insertion order.
    pub fn all_ids(&self) -> &[RegionId] {
        &self.insertion_order
    }

    /// The region's display name, or `None` for an unknown id.
    pub fn name(&self, id: RegionId) -> Option<&str> {
        self.regions.get(&id).map(|record| record.name.as_str())
    }

    /// The region's boundary polygon exactly as given to
    /// [`RegionForest::add`], or `None` for an unknown id.
    pub fn boundary(&self, id: RegionId) -> Option<&[Coord]> {
        self.regions.get(&id).map(|record| record.boundary.as_slice())
    }

    /// Make `child` a subregion of `parent`. Returns `false` if either
    /// id is unknown, `child` already has a parent, or the link would
    /// close a cycle.
    pub fn attach_subregion(&mut self, child: RegionId, parent: RegionId) -> bool {
        let Some(child_record) = self.regions.get(&child) else {
            return false;
        };
        if child_record.parent.is_some() || !self.regions.contains_key(&parent) {
            return false;
        }
        if self.would_close_cycle(child, parent) {
            debug!(child = %child, parent = %parent, "refused subregion link that would close a cycle");
            return false;
        }

        if let Some(record) = self.regions.get_mut(&parent) {
            record.children.push(child);
        }
        if let Some(record) = self.regions.get_mut(&child) {
            record.parent = Some(parent);
        }
        true
    }

    /// A link from `child` up to `parent` closes a cycle exactly when
    /// `child` already sits on `parent`'s ancestor chain, or is
    /// `parent` itself.
    fn would_close_cycle(&self, child: RegionId, parent: RegionId) -> bool {
        let mut current = Some(parent);
        while let Some(region) = current {
            if region == child {
                return true;
            }
            current = self.regions.get(&region).and_then(|record| record.parent);
        }
        false
    }

    /// The ancestors of `id` from its direct parent upward, nearest
    /// first and excluding `id` itself. Empty for roots and for unknown
    /// ids.
    pub fn ancestor_chain(&self, id: RegionId) -> Vec<RegionId> {
        let mut chain = Vec::new();
        let mut current = self.regions.get(&id).and_then(|record| record.parent);
        while let Some(region) = current {
            chain.push(region);
            current = self.regions.get(&region).and_then(|record| record.parent);
        }
        chain
    }

    /// Every region below `id` in pre-order, excluding `id` itself;
    /// `None` for an unknown id.
    pub fn descendants_of(&self, id: RegionId) -> Option<Vec<RegionId>> {
        let root = self.regions.get(&id)?;

        let mut collected = Vec::new();
        let mut stack: Vec<RegionId> = root.children.iter().rev().copied().collect();
        while let Some(region) = stack.pop() {
            collected.push(region);
            if let Some(record) = self.regions.get(&region) {
                stack.extend(record.children.iter().rev());
            }
        }
        Some(collected)
    }

    /// The nearest region that is a proper ancestor of both arguments,
    /// or `None` if either id is unknown or no common ancestor exists.
    ///
    /// Collects the first argument's ancestor set, then walks the
    /// second argument's chain nearest-first; because the walk is
    /// nearest-first, the first member found in the set is the lowest
    /// common ancestor.
    pub fn lowest_common_ancestor(&self, first: RegionId, second: RegionId) -> Option<RegionId> {
        if !self.regions.contains_key(&first) || !self.regions.contains_key(&second) {
            return None;
        }

        let first_ancestors: HashSet<RegionId> = self.ancestor_chain(first).into_iter().collect();
        self.ancestor_chain(second)
            .into_iter()
            .find(|region| first_ancestors.contains(region))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Builds a forest from `count` regions by attempting the given
    /// (child, parent) links in order; illegal links are refused by
    /// `attach_subregion` and simply skipped.
    fn build_forest(count: u64, links: &[(u64, u64)]) -> RegionForest {
        let mut forest = RegionForest::new();
        for id in 1..=count {
            forest.add(RegionId::new(id), format!("R{id}"), Vec::new());
        }
        for (child, parent) in links {
            forest.attach_subregion(RegionId::new(*child), RegionId::new(*parent));
        }
        forest
    }

    proptest! {
        /// No attach sequence can make an ancestor chain revisit a
        /// region, so every chain is duplicate-free and bounded.
        #[test]
        fn ancestor_chains_never_repeat(
            links in proptest::collection::vec((1u64..=12, 1u64..=12), 0..40),
        ) {
            let forest = build_forest(12, &links);
            for id in 1..=12 {
                let chain = forest.ancestor_chain(RegionId::new(id));
                prop_assert!(chain.len() <= 12);
                let mut deduped = chain.clone();
                deduped.sort();
                deduped.dedup();
                prop_assert_eq!(deduped.len(), chain.len());
            }
        }

        /// The lowest common ancestor does not depend on argument order.
        #[test]
        fn lowest_common_ancestor_is_symmetric(
            links in proptest::collection::vec((1u64..=12, 1u64..=12), 0..40),
            a in 1u64..=12,
            b in 1u64..=12,
        ) {
            let forest = build_forest(12, &links);
            prop_assert_eq!(
                forest.lowest_common_ancestor(RegionId::new(a), RegionId::new(b)),
                forest.lowest_common_ancestor(RegionId::new(b), RegionId::new(a))
            );
        }
    }
}
