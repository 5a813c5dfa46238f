use regex::Regex;

/// Company and drug pulled out of a `drug_detail` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugProducer {
    pub company: String,
    pub drug: String,
}

/// Parses `<company>(<drug>)` prefixes such as `"同仁堂(六味地黄丸)"`.
///
/// Both parts are runs of word characters. Only the start of the text has to
/// match; anything after the closing parenthesis is ignored. When the company
/// capture still contains the drug name, every occurrence is stripped from it.
#[derive(Debug, Clone)]
pub struct DrugDetailParser {
    pattern: Regex,
}

impl DrugDetailParser {
    pub const PATTERN: &'static str = r"^(?P<company>\w+)\((?P<drug>\w+)\)";

    pub fn new() -> Result<Self, regex::Error> {
        Self::with_pattern(Self::PATTERN)
    }

    /// The pattern must define `company` and `drug` groups.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    #[must_use]
    pub fn parse(&self, text: &str) -> Option<DrugProducer> {
        let caps = self.pattern.captures(text)?;
        let drug = caps.name("drug")?.as_str();
        // "X(X)" strips down to an empty company name, which is kept
        let company = caps.name("company")?.as_str().replace(drug, "");

        Some(DrugProducer {
            company,
            drug: drug.to_string(),
        })
    }
}
