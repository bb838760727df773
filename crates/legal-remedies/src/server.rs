/// MCP server implementation for the legal remedies catalog.
///
/// Exposes six tools:
/// - `search_remedies`: Ranked free-text search with optional legal type filters
/// - `get_remedy`: Full detail of one remedy by id
/// - `list_categories`: All categories with remedy counts
/// - `list_category`: Remedies in one category
/// - `list_legal_types`: Legal types usable as search filters
/// - `catalog_info`: Catalog origin, fingerprint and counts
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::model::{Category, ResolvedRemedy, SearchRequest, SearchResult};
use crate::search::SearchEngine;
use remedy_common::mcp_api::{
    CatalogInfoResponse, CategoryInfo, CategoryListResponse, CategoryRef, CategoryRemediesResponse,
    GetRemedyParams, LegalTypeInfo, LegalTypeListResponse, ListCategoryParams, RemedyDetail,
    RemedyDetailResponse, RemedySearchResult, RemedySummary, SearchRemediesParams,
    SearchRemediesResponse,
};

const MAX_LIMIT: usize = 100;

#[derive(Clone)]
pub struct LegalRemediesServer {
    search_engine: Arc<SearchEngine>,
    tool_router: ToolRouter<LegalRemediesServer>,
}

impl LegalRemediesServer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            search_engine: Arc::new(SearchEngine::new(catalog)),
            tool_router: Self::tool_router(),
        }
    }

    fn catalog(&self) -> &Catalog {
        self.search_engine.catalog()
    }

    fn category_info(&self, category: &Category) -> CategoryInfo {
        let remedy_count = self.catalog().remedies_in_category(&category.id).count();
        CategoryInfo {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            keywords: category.keywords.clone(),
            remedy_count,
        }
    }
}

#[tool_router]
impl LegalRemediesServer {
    #[tool(description = "Search Indian legal rights and remedies by describing a situation in plain words (e.g. 'violence in household', 'road quarrel'). Optional filters restrict results to legal type ids from list_legal_types. With no query and no filters the whole catalog is returned.")]
    async fn search_remedies(
        &self,
        Parameters(params): Parameters<SearchRemediesParams>,
    ) -> Result<Json<SearchRemediesResponse>, String> {
        let limit = match params.limit {
            Some(0) => return Err("limit must be at least 1".to_string()),
            Some(n) => (n as usize).min(MAX_LIMIT),
            None => MAX_LIMIT,
        };

        let request = SearchRequest {
            query: params.query,
            filters: params.filters,
        };
        let response = self.search_engine.search(&request).map_err(|e| {
            warn!(error = %e, "search rejected");
            format!("search failed: {e}")
        })?;

        let total = response.results.len();
        let results: Vec<RemedySearchResult> = response
            .results
            .into_iter()
            .take(limit)
            .map(to_api_result)
            .collect();
        let matched_categories = response
            .matched_categories
            .iter()
            .map(|c| self.category_info(c))
            .collect();

        info!(
            query = request.query.as_deref().unwrap_or(""),
            total,
            returned = results.len(),
            "search_remedies"
        );

        Ok(Json(SearchRemediesResponse {
            results,
            matched_categories,
            total,
        }))
    }

    #[tool(description = "Get the full detail of a legal remedy by id: description, legal reference, eligibility, time limit, authority and step-by-step instructions. Reports found=false for unknown ids.")]
    async fn get_remedy(
        &self,
        Parameters(params): Parameters<GetRemedyParams>,
    ) -> Result<Json<RemedyDetailResponse>, String> {
        let remedy_id = params.remedy_id.trim();
        if remedy_id.is_empty() {
            return Err("remedy_id must not be empty".to_string());
        }

        let remedy = self
            .search_engine
            .get_by_id(remedy_id)
            .map(|resolved| to_api_detail(self.catalog(), resolved));

        Ok(Json(RemedyDetailResponse {
            found: remedy.is_some(),
            remedy,
        }))
    }

    #[tool(description = "List all categories of situations (e.g. 'domestic-violence', 'workplace') with the number of remedies in each.")]
    async fn list_categories(&self) -> Result<Json<CategoryListResponse>, String> {
        let counts = self.catalog().category_counts();
        let categories = self
            .catalog()
            .categories()
            .iter()
            .map(|c| CategoryInfo {
                id: c.id.clone(),
                name: c.name.clone(),
                description: c.description.clone(),
                keywords: c.keywords.clone(),
                remedy_count: counts.get(c.id.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Ok(Json(CategoryListResponse { categories }))
    }

    #[tool(description = "List the remedies in one category. Use category ids from list_categories such as 'domestic-violence', 'road-quarrel' or 'cyber-crime'.")]
    async fn list_category(
        &self,
        Parameters(params): Parameters<ListCategoryParams>,
    ) -> Result<Json<CategoryRemediesResponse>, String> {
        let category_id = params.category_id.trim();
        if category_id.is_empty() {
            return Err("category_id must not be empty".to_string());
        }

        let catalog = self.catalog();
        let category = catalog
            .categories()
            .iter()
            .find(|c| c.id.eq_ignore_ascii_case(category_id))
            .ok_or_else(|| {
                let available: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
                format!(
                    "unknown category: '{category_id}'. Available categories: {}",
                    available.join(", ")
                )
            })?;

        let remedies = catalog
            .remedies_in_category(&category.id)
            .map(|r| RemedySummary {
                id: r.id.clone(),
                title: r.title.clone(),
                legal_type: catalog.legal_type_name(&r.legal_type_id),
            })
            .collect();

        Ok(Json(CategoryRemediesResponse {
            category: self.category_info(category),
            remedies,
        }))
    }

    #[tool(description = "List legal types (e.g. statutory right, constitutional right). Their ids are the values accepted by search_remedies filters.")]
    async fn list_legal_types(&self) -> Result<Json<LegalTypeListResponse>, String> {
        let counts = self.catalog().legal_type_counts();
        let legal_types = self
            .catalog()
            .legal_types()
            .iter()
            .map(|t| LegalTypeInfo {
                id: t.id.clone(),
                name: t.name.clone(),
                remedy_count: counts.get(t.id.as_str()).copied().unwrap_or(0),
            })
            .collect();

        Ok(Json(LegalTypeListResponse { legal_types }))
    }

    #[tool(description = "Describe the loaded catalog: where it came from, its SHA-256 fingerprint and entry counts.")]
    async fn catalog_info(&self) -> Result<Json<CatalogInfoResponse>, String> {
        let catalog = self.catalog();
        Ok(Json(CatalogInfoResponse {
            origin: catalog.origin().to_string(),
            fingerprint: catalog.fingerprint().to_string(),
            remedy_count: catalog.remedies().len(),
            category_count: catalog.categories().len(),
            legal_type_count: catalog.legal_types().len(),
        }))
    }
}

fn to_api_result(result: SearchResult) -> RemedySearchResult {
    let summary = result.summary();
    RemedySearchResult {
        id: result.remedy.id,
        title: result.remedy.title,
        legal_reference: result.remedy.legal_reference,
        legal_type: result.legal_type,
        legal_type_id: result.remedy.legal_type_id,
        category_ids: result.remedy.category_ids,
        score: result.score,
        summary,
    }
}

fn to_api_detail(catalog: &Catalog, resolved: ResolvedRemedy) -> RemedyDetail {
    let steps = resolved.remedy.how_to_use_steps();
    let categories = catalog
        .categories_of(&resolved.remedy)
        .map(|c| CategoryRef {
            id: c.id.clone(),
            name: c.name.clone(),
        })
        .collect();
    let remedy = resolved.remedy;

    RemedyDetail {
        id: remedy.id,
        title: remedy.title,
        description: remedy.description,
        legal_reference: remedy.legal_reference,
        legal_type: resolved.legal_type,
        legal_type_id: remedy.legal_type_id,
        eligibility: remedy.eligibility,
        time_limit: remedy.time_limit,
        authority: remedy.authority,
        steps,
        categories,
    }
}

#[tool_handler]
impl ServerHandler for LegalRemediesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "legal-remedies".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Legal rights finder for Indian law. Use search_remedies with a plain \
                 description of the situation, get_remedy for full detail and steps, \
                 list_categories / list_category to browse, and list_legal_types for \
                 filter values. The information is educational only and is not legal \
                 advice; users should consult a qualified lawyer or their District Legal \
                 Services Authority."
                    .to_string(),
            ),
        }
    }
}
