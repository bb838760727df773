use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SearchRemediesParams {
    /// Free-text description of the situation, e.g. "violence in household".
    pub query: Option<String>,
    /// Legal type ids to restrict results to, e.g. ["statute"].
    pub filters: Option<Vec<String>>,
    /// Maximum number of results to return (default: all matches, max: 100).
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetRemedyParams {
    /// Remedy id such as "zero-fir" or "motor-accident-claim".
    pub remedy_id: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCategoryParams {
    /// Category id such as "domestic-violence" or "workplace".
    pub category_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemedySearchResult {
    pub id: String,
    pub title: String,
    pub legal_reference: String,
    pub legal_type: String,
    pub legal_type_id: String,
    pub category_ids: Vec<String>,
    pub score: f64,
    /// Description, shortened for listing.
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub remedy_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchRemediesResponse {
    pub results: Vec<RemedySearchResult>,
    pub matched_categories: Vec<CategoryInfo>,
    /// Number of matches before `limit` was applied.
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemedyDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub legal_reference: String,
    pub legal_type: String,
    pub legal_type_id: String,
    pub eligibility: String,
    pub time_limit: String,
    pub authority: String,
    /// How-to-use text split into ordered steps.
    pub steps: Vec<String>,
    /// Categories that resolve in the catalog; unknown ids are omitted.
    pub categories: Vec<CategoryRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemedyDetailResponse {
    pub found: bool,
    pub remedy: Option<RemedyDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<CategoryInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RemedySummary {
    pub id: String,
    pub title: String,
    pub legal_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryRemediesResponse {
    pub category: CategoryInfo,
    pub remedies: Vec<RemedySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LegalTypeInfo {
    pub id: String,
    pub name: String,
    pub remedy_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LegalTypeListResponse {
    pub legal_types: Vec<LegalTypeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogInfoResponse {
    /// "bundled" or the catalog file path.
    pub origin: String,
    /// SHA-256 of the catalog document.
    pub fingerprint: String,
    pub remedy_count: usize,
    pub category_count: usize,
    pub legal_type_count: usize,
}
