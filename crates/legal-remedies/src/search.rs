/// Lexical search engine over the remedy catalog.
///
/// Tokenizes the query, expands tokens through the synonym table, scores every remedy with
/// fixed additive weights and returns the ranked list plus the categories whose metadata
/// matches the query. Scores are not normalized: longer entries that repeat query terms
/// accumulate more.
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::AppError;
use crate::model::{Category, Remedy, ResolvedRemedy, SearchRequest, SearchResponse, SearchResult};
use crate::text::{expand_tokens, tokenize};

const TITLE_WEIGHT: f64 = 6.0;
const DESCRIPTION_WEIGHT: f64 = 4.0;
const LEGAL_REFERENCE_WEIGHT: f64 = 3.0;
const HOW_TO_USE_WEIGHT: f64 = 2.0;
const WHOLE_WORD_WEIGHT: f64 = 1.5;
const EXPANDED_TERM_WEIGHT: f64 = 1.0;
const MIN_EXPANDED_TERM_LEN: usize = 3;
const CATEGORY_NAME_WEIGHT: f64 = 3.0;
const CATEGORY_DESCRIPTION_WEIGHT: f64 = 2.0;
const CATEGORY_KEYWORD_BONUS: f64 = 4.0;
const FILTER_BONUS: f64 = 5.0;

pub const MAX_QUERY_LEN: usize = 1000;

/// Query text broken into raw tokens and their synonym expansion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedQuery {
    /// Tokens in query order, duplicates kept.
    pub tokens: Vec<String>,
    /// Deduplicated tokens plus synonyms. Empty when `tokens` is empty.
    pub expanded: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(query: &str) -> Self {
        let query = query.trim();
        if query.is_empty() {
            return Self::default();
        }
        let tokens = tokenize(query);
        let expanded = if tokens.is_empty() {
            Vec::new()
        } else {
            expand_tokens(&tokens)
        };
        Self { tokens, expanded }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub struct SearchEngine {
    catalog: Arc<Catalog>,
}

impl SearchEngine {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Rank the catalog against a query and optional legal type filters.
    ///
    /// - No tokens and no filters: the whole catalog in catalog order, score 0.
    /// - No tokens but filters: every remedy of the filtered legal types.
    /// - Otherwise: remedies with a positive score, best first, ties in catalog order,
    ///   then restricted to the filtered legal types.
    ///
    /// Only a malformed request is an error. No matches is an empty list.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, AppError> {
        let query = request.query.as_deref().unwrap_or("").trim();
        if query.chars().count() > MAX_QUERY_LEN {
            return Err(AppError::InvalidRequest(format!(
                "query exceeds {MAX_QUERY_LEN} characters"
            )));
        }

        let filters: HashSet<&str> = request
            .filters
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        let parsed = ParsedQuery::parse(query);

        let matched_categories = if parsed.is_empty() {
            Vec::new()
        } else {
            self.matched_categories(&parsed.tokens)
        };

        let remedies = self.catalog.remedies();

        if parsed.is_empty() && filters.is_empty() {
            debug!(remedies = remedies.len(), "no query or filters, returning full catalog");
            let results = remedies.iter().map(|r| self.project(r, 0.0)).collect();
            return Ok(SearchResponse {
                results,
                matched_categories,
            });
        }

        let browsing = parsed.is_empty();
        let mut scored: Vec<(usize, f64)> = (0..remedies.len())
            .map(|position| (position, self.score(position, &parsed, &filters)))
            .filter(|&(_, score)| score > 0.0 || browsing)
            .collect();
        // `sort_by` is stable, so equal scores keep catalog order.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let results: Vec<SearchResult> = scored
            .into_iter()
            .map(|(position, score)| (&remedies[position], score))
            .filter(|(remedy, _)| filters.is_empty() || filters.contains(remedy.legal_type_id.as_str()))
            .map(|(remedy, score)| self.project(remedy, score))
            .collect();

        debug!(
            query,
            tokens = ?parsed.tokens,
            filters = filters.len(),
            results = results.len(),
            matched_categories = matched_categories.len(),
            "search complete"
        );

        Ok(SearchResponse {
            results,
            matched_categories,
        })
    }

    /// Look up one remedy with its legal type resolved. Unknown ids are `None`.
    pub fn get_by_id(&self, id: &str) -> Option<ResolvedRemedy> {
        self.catalog.resolve(id)
    }

    /// Categories whose name or description contains a token, or whose keywords equal one.
    pub fn matched_categories(&self, tokens: &[String]) -> Vec<Category> {
        self.catalog
            .categories()
            .iter()
            .filter(|category| {
                let name = category.name.to_lowercase();
                let description = category.description.to_lowercase();
                tokens
                    .iter()
                    .any(|t| name.contains(t.as_str()) || description.contains(t.as_str()))
                    || keyword_hit(category, tokens)
            })
            .cloned()
            .collect()
    }

    /// Relevance of the remedy at `position` in catalog order. Never negative.
    pub fn score(&self, position: usize, query: &ParsedQuery, filters: &HashSet<&str>) -> f64 {
        if query.tokens.is_empty() && filters.is_empty() {
            return 0.0;
        }

        let remedy = &self.catalog.remedies()[position];
        let text = self.catalog.text_at(position);
        let mut score = 0.0;

        for token in &query.tokens {
            let token = token.as_str();
            if text.title.contains(token) {
                score += TITLE_WEIGHT;
            }
            if text.description.contains(token) {
                score += DESCRIPTION_WEIGHT;
            }
            if text.legal_reference.contains(token) {
                score += LEGAL_REFERENCE_WEIGHT;
            }
            if text.how_to_use.contains(token) {
                score += HOW_TO_USE_WEIGHT;
            }
            score += count_whole_words(&text.corpus, token) as f64 * WHOLE_WORD_WEIGHT;
        }

        for term in &query.expanded {
            if term.len() >= MIN_EXPANDED_TERM_LEN && text.corpus.contains(term.as_str()) {
                score += EXPANDED_TERM_WEIGHT;
            }
        }

        for category in self.catalog.categories_of(remedy) {
            let name = category.name.to_lowercase();
            let description = category.description.to_lowercase();
            for token in &query.tokens {
                if name.contains(token.as_str()) {
                    score += CATEGORY_NAME_WEIGHT;
                }
                if description.contains(token.as_str()) {
                    score += CATEGORY_DESCRIPTION_WEIGHT;
                }
            }
            if keyword_hit(category, &query.tokens) {
                score += CATEGORY_KEYWORD_BONUS;
            }
        }

        // Filters are applied again after ranking, so this only reorders survivors.
        if !filters.is_empty() && filters.contains(remedy.legal_type_id.as_str()) {
            score += FILTER_BONUS;
        }

        score
    }

    fn project(&self, remedy: &Remedy, score: f64) -> SearchResult {
        SearchResult {
            legal_type: self.catalog.legal_type_name(&remedy.legal_type_id),
            remedy: remedy.clone(),
            score,
        }
    }
}

fn keyword_hit(category: &Category, tokens: &[String]) -> bool {
    category
        .keywords
        .iter()
        .any(|keyword| tokens.contains(&keyword.to_lowercase()))
}

/// Count occurrences of `word` in `haystack` bounded by non-word characters on both sides.
/// Word characters are ASCII alphanumerics and `_`.
fn count_whole_words(haystack: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    haystack
        .match_indices(word)
        .filter(|&(start, _)| {
            let before = haystack[..start].chars().next_back();
            let after = haystack[start + word.len()..].chars().next();
            !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
        })
        .count()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
