use serde::Deserialize;
use serde_json::Value;

use crate::entity::DiseaseAttributes;

/// One line of the corpus. Every field is optional at this level; a record
/// without a usable `name` is skipped by the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicalRecord {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub desc: Option<Value>,
    #[serde(default)]
    pub prevent: Option<Value>,
    #[serde(default)]
    pub cause: Option<Value>,
    #[serde(default)]
    pub easy_get: Option<Value>,
    #[serde(default)]
    pub cure_lasttime: Option<Value>,
    #[serde(default)]
    pub cured_prob: Option<Value>,
    #[serde(default)]
    pub cost_money: Option<Value>,
    #[serde(default)]
    pub yibao_status: Option<Value>,
    #[serde(default)]
    pub get_prob: Option<Value>,
    #[serde(default)]
    pub get_way: Option<Value>,

    #[serde(default)]
    pub recommand_drug: Option<Vec<String>>,
    #[serde(default)]
    pub recommand_eat: Option<Vec<String>>,
    #[serde(default)]
    pub not_eat: Option<Vec<String>>,
    #[serde(default)]
    pub do_eat: Option<Vec<String>>,
    #[serde(default)]
    pub symptom: Option<Vec<String>>,
    #[serde(default)]
    pub acompany: Option<Vec<String>>,
    #[serde(default)]
    pub common_drug: Option<Vec<String>>,
    #[serde(default)]
    pub check: Option<Vec<String>>,
    #[serde(default)]
    pub cure_department: Option<Vec<String>>,
    #[serde(default)]
    pub drug_detail: Option<Vec<String>>,
    #[serde(default)]
    pub cure_way: Option<Vec<String>>,
}

impl MedicalRecord {
    pub fn from_line(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    /// The disease name, if present and non-empty.
    #[must_use]
    pub fn disease_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    #[must_use]
    pub fn disease_attributes(&self) -> DiseaseAttributes {
        DiseaseAttributes {
            desc: cell_text(self.desc.as_ref()),
            prevent: cell_text(self.prevent.as_ref()),
            cause: cell_text(self.cause.as_ref()),
            susceptible_populations: cell_text(self.easy_get.as_ref()),
            treatment_cycle: cell_text(self.cure_lasttime.as_ref()),
            cure_rate: cell_text(self.cured_prob.as_ref()),
            treatment_cost: cell_text(self.cost_money.as_ref()),
            is_healthcare_disease: cell_text(self.yibao_status.as_ref()),
            prevalence_ratio: cell_text(self.get_prob.as_ref()),
            infection_mode: cell_text(self.get_way.as_ref()),
        }
    }
}

/// Strings are kept as-is and booleans become `True`/`False`. Other JSON
/// values keep their JSON text.
fn cell_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("True".to_string()),
        Value::Bool(false) => Some("False".to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let line = r#"{"name":"感冒","desc":"常见病","cured_prob":"90%","symptom":["发热","咳嗽"],"cure_department":["内科","呼吸内科"]}"#;
        let record = MedicalRecord::from_line(line).unwrap();

        assert_eq!(record.disease_name(), Some("感冒"));
        assert_eq!(record.symptom.as_deref().map(<[String]>::len), Some(2));

        let attrs = record.disease_attributes();
        assert_eq!(attrs.desc.as_deref(), Some("常见病"));
        assert_eq!(attrs.cure_rate.as_deref(), Some("90%"));
        assert!(attrs.prevent.is_none());
    }

    #[test]
    fn test_empty_name_is_missing() {
        let record = MedicalRecord::from_line(r#"{"name":"","symptom":["x"]}"#).unwrap();
        assert!(record.disease_name().is_none());

        let record = MedicalRecord::from_line(r#"{"symptom":["x"]}"#).unwrap();
        assert!(record.disease_name().is_none());
    }

    #[test]
    fn test_non_string_attribute_cells() {
        let record =
            MedicalRecord::from_line(r#"{"name":"a","get_prob":0.5,"yibao_status":true,"cause":null}"#)
                .unwrap();
        let attrs = record.disease_attributes();

        assert_eq!(attrs.prevalence_ratio.as_deref(), Some("0.5"));
        assert_eq!(attrs.is_healthcare_disease.as_deref(), Some("True"));
        assert!(attrs.cause.is_none());

        let record = MedicalRecord::from_line(r#"{"name":"b","yibao_status":false}"#).unwrap();
        assert_eq!(
            record.disease_attributes().is_healthcare_disease.as_deref(),
            Some("False")
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let record = MedicalRecord::from_line(r#"{"name":"a","_id":{"$oid":"1"},"category":["x"]}"#)
            .unwrap();
        assert_eq!(record.disease_name(), Some("a"));
    }

    #[test]
    fn test_malformed_line_errors() {
        assert!(MedicalRecord::from_line("{\"name\": ").is_err());
        assert!(MedicalRecord::from_line("not json").is_err());
    }
}
