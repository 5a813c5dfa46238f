use serde::{Deserialize, Serialize};

use crate::entity::{EntityId, EntityType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationType {
    // Department hierarchy
    BelongsTo,

    // Diet
    AvoidEat,
    AdviseEat,
    RecommendRecipe,

    // Medication and care, in export order
    CommonDrug,
    RecommendDrug,
    NeedCheck,
    ProduceDrug,
    HasComplication,
    HasSymptom,
    TreatDepartment,
    TreatmentMethod,
}

impl RelationType {
    pub const ALL: [Self; 12] = [
        Self::BelongsTo,
        Self::AvoidEat,
        Self::AdviseEat,
        Self::RecommendRecipe,
        Self::CommonDrug,
        Self::RecommendDrug,
        Self::NeedCheck,
        Self::ProduceDrug,
        Self::HasComplication,
        Self::HasSymptom,
        Self::TreatDepartment,
        Self::TreatmentMethod,
    ];

    /// Edge label written to the `:TYPE` column.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BelongsTo => "BELONGS_TO",
            Self::AvoidEat => "AVOID_EAT",
            Self::AdviseEat => "ADVISE_EAT",
            Self::RecommendRecipe => "RECOMMEND_RECIPE",
            Self::CommonDrug => "COMMON_DRUG",
            Self::RecommendDrug => "RECOMMEND_DRUG",
            Self::ProduceDrug => "PRODUCE_DRUG",
            Self::NeedCheck => "NEED_CHECK",
            Self::HasComplication => "HAS_COMPLICATION",
            Self::HasSymptom => "HAS_SYMPTOM",
            Self::TreatDepartment => "TREAT_DEPARTMENT",
            Self::TreatmentMethod => "TREATMENT_METHOD",
        }
    }

    #[must_use]
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::BelongsTo => "belongs_to",
            Self::AvoidEat => "avoid_eat",
            Self::AdviseEat => "advise_eat",
            Self::RecommendRecipe => "recommend_recipe",
            Self::CommonDrug => "common_drug",
            Self::RecommendDrug => "recommend_drug",
            Self::ProduceDrug => "produce_drug",
            Self::NeedCheck => "need_check",
            Self::HasComplication => "has_complication",
            Self::HasSymptom => "has_symptom",
            Self::TreatDepartment => "treat_department",
            Self::TreatmentMethod => "treatment_method",
        }
    }

    #[must_use]
    pub const fn source_type(&self) -> EntityType {
        match self {
            Self::BelongsTo => EntityType::Department,
            Self::ProduceDrug => EntityType::PharmCompany,
            _ => EntityType::Disease,
        }
    }

    #[must_use]
    pub const fn target_type(&self) -> EntityType {
        match self {
            Self::BelongsTo | Self::TreatDepartment => EntityType::Department,
            Self::AvoidEat | Self::AdviseEat => EntityType::Food,
            Self::RecommendRecipe => EntityType::Recipe,
            Self::CommonDrug | Self::RecommendDrug | Self::ProduceDrug => EntityType::Drug,
            Self::NeedCheck => EntityType::Check,
            Self::HasComplication => EntityType::Disease,
            Self::HasSymptom => EntityType::Symptom,
            Self::TreatmentMethod => EntityType::Treatment,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed edge between two registered entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source_id: EntityId,
    pub target_id: EntityId,
    pub relation_type: RelationType,
}

impl Relationship {
    #[must_use]
    pub const fn new(relation_type: RelationType, source_id: EntityId, target_id: EntityId) -> Self {
        Self {
            source_id,
            target_id,
            relation_type,
        }
    }
}
