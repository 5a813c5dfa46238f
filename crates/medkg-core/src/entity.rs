use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityType {
    Disease,
    Symptom,
    Drug,
    Check,
    Department,
    Food,
    Recipe,
    PharmCompany,
    Treatment,
}

impl EntityType {
    pub const ALL: [Self; 9] = [
        Self::Disease,
        Self::Symptom,
        Self::Drug,
        Self::Check,
        Self::Department,
        Self::Food,
        Self::Recipe,
        Self::PharmCompany,
        Self::Treatment,
    ];

    /// Node label written to the `:LABEL` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Disease => "Disease",
            Self::Symptom => "Symptom",
            Self::Drug => "Drug",
            Self::Check => "Check",
            Self::Department => "Department",
            Self::Food => "Food",
            Self::Recipe => "Recipe",
            Self::PharmCompany => "PharmCompany",
            Self::Treatment => "Treatment",
        }
    }

    /// Base name of the node and dictionary files for this type.
    #[must_use]
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Disease => "disease",
            Self::Symptom => "symptom",
            Self::Drug => "drug",
            Self::Check => "check",
            Self::Department => "department",
            Self::Food => "food",
            Self::Recipe => "recipe",
            Self::PharmCompany => "pharm_company",
            Self::Treatment => "treatment",
        }
    }

    /// Attribute columns carried between `name` and the id column.
    #[must_use]
    pub const fn attribute_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Disease => &DiseaseAttributes::COLUMNS,
            _ => &[],
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Globally unique node id. Shared by all entity types, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive fields copied verbatim from a disease record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub susceptible_populations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_cycle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cure_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatment_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_healthcare_disease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevalence_ratio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub infection_mode: Option<String>,
}

impl DiseaseAttributes {
    pub const COLUMNS: [&'static str; 10] = [
        "desc",
        "prevent",
        "cause",
        "susceptible_populations",
        "treatment_cycle",
        "cure_rate",
        "treatment_cost",
        "is_healthcare_disease",
        "prevalence_ratio",
        "infection_mode",
    ];

    /// Values in [`Self::COLUMNS`] order.
    #[must_use]
    pub fn values(&self) -> [Option<&str>; 10] {
        [
            self.desc.as_deref(),
            self.prevent.as_deref(),
            self.cause.as_deref(),
            self.susceptible_populations.as_deref(),
            self.treatment_cycle.as_deref(),
            self.cure_rate.as_deref(),
            self.treatment_cost.as_deref(),
            self.is_healthcare_disease.as_deref(),
            self.prevalence_ratio.as_deref(),
            self.infection_mode.as_deref(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub entity_type: EntityType,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<DiseaseAttributes>,
}

impl Entity {
    #[must_use]
    pub const fn new(id: EntityId, entity_type: EntityType, name: String) -> Self {
        Self {
            id,
            entity_type,
            name,
            attributes: None,
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: DiseaseAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    /// Attribute cells in [`EntityType::attribute_columns`] order. Empty for
    /// entities registered without attributes.
    #[must_use]
    pub fn attribute_values(&self) -> Vec<Option<&str>> {
        match (&self.attributes, self.entity_type.attribute_columns().len()) {
            (_, 0) => Vec::new(),
            (Some(attrs), _) => attrs.values().to_vec(),
            (None, n) => vec![None; n],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_labels_and_file_stems_are_unique() {
        let labels: HashSet<_> = EntityType::ALL.iter().map(EntityType::as_str).collect();
        let stems: HashSet<_> = EntityType::ALL.iter().map(EntityType::file_stem).collect();
        assert_eq!(labels.len(), EntityType::ALL.len());
        assert_eq!(stems.len(), EntityType::ALL.len());
        assert_eq!(EntityType::PharmCompany.to_string(), "PharmCompany");
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, t) in EntityType::ALL.into_iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_complication_disease_has_blank_attribute_cells() {
        let entity = Entity::new(EntityId::new(7), EntityType::Disease, "肺炎".into());
        let values = entity.attribute_values();
        assert_eq!(values.len(), DiseaseAttributes::COLUMNS.len());
        assert!(values.iter().all(Option::is_none));
    }

    #[test]
    fn test_non_disease_has_no_attribute_cells() {
        let entity = Entity::new(EntityId::new(1), EntityType::Drug, "阿莫西林".into());
        assert!(entity.attribute_values().is_empty());

        let entity = entity.with_attributes(DiseaseAttributes::default());
        assert!(entity.attribute_values().is_empty());
    }
}
