use std::collections::HashMap;

use crate::entity::{DiseaseAttributes, Entity, EntityId, EntityType};

/// Hands out entity ids from a single counter shared by every entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub const FIRST_ID: u64 = 1;

    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Self::FIRST_ID)
    }

    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId::new(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Entities of one type in first-registration order, keyed by name.
#[derive(Debug, Clone, Default)]
struct TypedEntities {
    entities: Vec<Entity>,
    by_name: HashMap<String, usize>,
}

/// Owns every entity registered during extraction. Names are unique per type.
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    ids: IdAllocator,
    tables: [TypedEntities; 9],
}

impl EntityRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_allocator(ids: IdAllocator) -> Self {
        Self {
            ids,
            tables: Default::default(),
        }
    }

    /// Returns the entity named `name` of type `entity_type`, registering it
    /// first if it is new. On the already-seen path `attributes` is ignored,
    /// as it is for types without attribute columns.
    pub fn get_or_create(
        &mut self,
        entity_type: EntityType,
        name: &str,
        attributes: Option<DiseaseAttributes>,
    ) -> &Entity {
        let table = &mut self.tables[entity_type.index()];

        let idx = match table.by_name.get(name) {
            Some(&idx) => idx,
            None => {
                let mut entity = Entity::new(self.ids.allocate(), entity_type, name.to_string());
                if let Some(attrs) =
                    attributes.filter(|_| !entity_type.attribute_columns().is_empty())
                {
                    entity = entity.with_attributes(attrs);
                }
                let idx = table.entities.len();
                table.entities.push(entity);
                table.by_name.insert(name.to_string(), idx);
                idx
            }
        };

        &table.entities[idx]
    }

    /// Shorthand for [`Self::get_or_create`] without attributes, returning the id.
    pub fn id_of(&mut self, entity_type: EntityType, name: &str) -> EntityId {
        self.get_or_create(entity_type, name, None).id
    }

    #[must_use]
    pub fn get(&self, entity_type: EntityType, name: &str) -> Option<&Entity> {
        let table = &self.tables[entity_type.index()];
        table.by_name.get(name).map(|&idx| &table.entities[idx])
    }

    /// Entities of one type in first-registration order.
    pub fn entities(&self, entity_type: EntityType) -> impl Iterator<Item = &Entity> {
        self.tables[entity_type.index()].entities.iter()
    }

    pub fn names(&self, entity_type: EntityType) -> impl Iterator<Item = &str> {
        self.entities(entity_type).map(|e| e.name.as_str())
    }

    #[must_use]
    pub fn count(&self, entity_type: EntityType) -> usize {
        self.tables[entity_type.index()].entities.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.tables.iter().map(|t| t.entities.len()).sum()
    }

    #[must_use]
    pub const fn allocator(&self) -> &IdAllocator {
        &self.ids
    }

    /// Gives the allocator back so a later registry can continue the id space.
    #[must_use]
    pub fn into_allocator(self) -> IdAllocator {
        self.ids
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut registry = EntityRegistry::new();
        let first = registry.id_of(EntityType::Symptom, "发热");
        let second = registry.id_of(EntityType::Symptom, "发热");

        assert_eq!(first, second);
        assert_eq!(registry.count(EntityType::Symptom), 1);
    }

    #[test]
    fn test_ids_are_shared_across_types() {
        let mut registry = EntityRegistry::new();
        let disease = registry.id_of(EntityType::Disease, "感冒");
        let drug = registry.id_of(EntityType::Drug, "感冒");
        let food = registry.id_of(EntityType::Food, "鸡蛋");
        let recipe = registry.id_of(EntityType::Recipe, "鸡蛋");

        assert_eq!(disease, EntityId::new(1));
        let ids: HashSet<_> = [disease, drug, food, recipe].into_iter().collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(registry.total(), 4);
    }

    #[test]
    fn test_first_seen_attributes_win() {
        let mut registry = EntityRegistry::new();
        let attrs = DiseaseAttributes {
            desc: Some("first".into()),
            ..Default::default()
        };
        registry.get_or_create(EntityType::Disease, "肺炎", Some(attrs));

        let later = DiseaseAttributes {
            desc: Some("second".into()),
            ..Default::default()
        };
        let entity = registry.get_or_create(EntityType::Disease, "肺炎", Some(later));

        assert_eq!(
            entity.attributes.as_ref().and_then(|a| a.desc.as_deref()),
            Some("first")
        );
    }

    #[test]
    fn test_bare_registration_keeps_no_attributes() {
        let mut registry = EntityRegistry::new();
        registry.id_of(EntityType::Disease, "肺炎");
        let attrs = DiseaseAttributes {
            cause: Some("细菌".into()),
            ..Default::default()
        };
        let entity = registry.get_or_create(EntityType::Disease, "肺炎", Some(attrs));

        assert!(entity.attributes.is_none());
        assert_eq!(registry.count(EntityType::Disease), 1);
    }

    #[test]
    fn test_attributes_dropped_for_types_without_columns() {
        let mut registry = EntityRegistry::new();
        let entity = registry.get_or_create(
            EntityType::Drug,
            "阿司匹林",
            Some(DiseaseAttributes {
                desc: Some("止痛".into()),
                ..Default::default()
            }),
        );

        assert!(entity.attributes.is_none());
        assert!(entity.attribute_values().is_empty());
    }

    #[test]
    fn test_names_keep_registration_order() {
        let mut registry = EntityRegistry::new();
        for name in ["c", "a", "b", "a"] {
            registry.id_of(EntityType::Check, name);
        }
        let names: Vec<_> = registry.names(EntityType::Check).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_registries_do_not_share_counters() {
        let mut a = EntityRegistry::new();
        let mut b = EntityRegistry::new();
        a.id_of(EntityType::Drug, "x");
        a.id_of(EntityType::Drug, "y");

        assert_eq!(b.id_of(EntityType::Drug, "z"), EntityId::new(1));
    }

    #[test]
    fn test_allocator_hand_off() {
        let mut first = EntityRegistry::new();
        first.id_of(EntityType::Food, "x");
        let ids = first.into_allocator();
        assert_eq!(ids, IdAllocator::starting_at(2));

        let mut second = EntityRegistry::with_allocator(ids);
        assert_eq!(second.id_of(EntityType::Food, "y"), EntityId::new(2));
    }
}
