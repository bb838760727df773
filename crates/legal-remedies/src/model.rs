use serde::{Deserialize, Serialize};

/// A thematic grouping of remedies (e.g., "Domestic Violence", "Road Incidents").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique key, e.g. "domestic-violence"
    pub id: String,
    /// Display name, e.g. "Domestic Violence"
    pub name: String,
    /// One-line description of the situations covered
    pub description: String,
    /// Keywords matched exactly against query tokens
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A coarse classification used as a filter facet (e.g., statute vs. constitutional right).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalType {
    /// Unique key, e.g. "statute"
    pub id: String,
    /// Display name, e.g. "Statutory Right"
    pub name: String,
}

/// A single legal remedy entry in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Remedy {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Statute or article text, e.g. "Section 18, Protection of Women from Domestic Violence Act, 2005"
    pub legal_reference: String,
    /// Newline-separated steps
    pub how_to_use: String,
    pub eligibility: String,
    pub time_limit: String,
    pub authority: String,
    pub legal_type_id: String,
    #[serde(default)]
    pub category_ids: Vec<String>,
}

impl Remedy {
    /// Split the how-to-use text into trimmed, non-empty steps.
    ///
    /// Accepts both real newlines and the escaped two-character `\n` sequence.
    pub fn how_to_use_steps(&self) -> Vec<String> {
        self.how_to_use
            .replace("\\n", "\n")
            .lines()
            .map(str::trim)
            .filter(|step| !step.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// A remedy with its legal type name resolved. Empty `legal_type` when unresolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRemedy {
    #[serde(flatten)]
    pub remedy: Remedy,
    pub legal_type: String,
}

/// A ranked search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub remedy: Remedy,
    pub legal_type: String,
    /// Relevance score, higher is better. Zero for unranked browse results.
    pub score: f64,
}

const MAX_SUMMARY_LEN: usize = 200;

impl SearchResult {
    /// Description shortened to at most 200 characters, with "..." when cut.
    pub fn summary(&self) -> String {
        let text = &self.remedy.description;
        if text.chars().count() > MAX_SUMMARY_LEN {
            format!("{}...", text.chars().take(MAX_SUMMARY_LEN).collect::<String>())
        } else {
            text.clone()
        }
    }
}

/// Inputs to a search. Both fields are optional, mirroring the calling surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub filters: Option<Vec<String>>,
}

#[cfg(test)]
impl SearchRequest {
    pub fn query(query: &str) -> Self {
        Self {
            query: Some(query.to_string()),
            filters: None,
        }
    }

    pub fn filtered(query: &str, filters: &[&str]) -> Self {
        Self {
            query: Some(query.to_string()),
            filters: Some(filters.iter().map(|f| f.to_string()).collect()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
    pub matched_categories: Vec<Category>,
}
