use std::collections::HashSet;

use crate::entity::EntityId;
use crate::relationship::{RelationType, Relationship};

/// Append-only edge lists, one per relation kind. Duplicates are kept until
/// [`RelationshipCollector::finalize`].
#[derive(Debug, Clone, Default)]
pub struct RelationshipCollector {
    edges: [Vec<(EntityId, EntityId)>; 12],
}

impl RelationshipCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, relation_type: RelationType, source_id: EntityId, target_id: EntityId) {
        self.edges[relation_type.index()].push((source_id, target_id));
    }

    /// Drops repeated `(source, target)` pairs within each kind. The first
    /// occurrence of a pair keeps its position.
    #[must_use]
    pub fn finalize(self) -> RelationshipSet {
        let mut out: [Vec<Relationship>; 12] = Default::default();

        for (relation_type, pairs) in RelationType::ALL.into_iter().zip(self.edges) {
            let mut seen = HashSet::with_capacity(pairs.len());
            out[relation_type.index()] = pairs
                .into_iter()
                .filter(|pair| seen.insert(*pair))
                .map(|(source, target)| Relationship::new(relation_type, source, target))
                .collect();
        }

        RelationshipSet { edges: out }
    }
}

/// Deduplicated edges, read-only once built.
#[derive(Debug, Clone, Default)]
pub struct RelationshipSet {
    edges: [Vec<Relationship>; 12],
}

impl RelationshipSet {
    #[must_use]
    pub fn edges(&self, relation_type: RelationType) -> &[Relationship] {
        &self.edges[relation_type.index()]
    }

    #[must_use]
    pub fn count(&self, relation_type: RelationType) -> usize {
        self.edges[relation_type.index()].len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.edges.iter().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.edges.iter().flatten()
    }

    #[must_use]
    pub fn contains(&self, relation_type: RelationType, source_id: EntityId, target_id: EntityId) -> bool {
        self.edges(relation_type)
            .iter()
            .any(|r| r.source_id == source_id && r.target_id == target_id)
    }
}
