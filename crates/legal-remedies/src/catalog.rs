/// Static, read-only catalog of categories, legal types and remedies.
///
/// The catalog is decoded once from a JSON document and then indexed:
/// - id → position maps for each entity set
/// - a lowercased text index per remedy, used as the scoring substrate
///
/// Dangling references (a remedy pointing at an unknown legal type or category) are logged
/// and tolerated. Duplicate ids are rejected because lookups by id would be ambiguous.
use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::error::AppError;
use crate::model::{Category, LegalType, Remedy, ResolvedRemedy};
use remedy_common::source::CatalogSource;

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    legal_types: Vec<LegalType>,
    #[serde(default)]
    remedies: Vec<Remedy>,
}

/// Lowercased copies of the remedy fields that scoring inspects.
#[derive(Debug, Clone)]
pub struct RemedyText {
    pub title: String,
    pub description: String,
    pub legal_reference: String,
    pub how_to_use: String,
    /// Title, description, legal reference, how-to-use, eligibility and authority joined by spaces.
    pub corpus: String,
}

impl RemedyText {
    fn new(remedy: &Remedy) -> Self {
        let corpus = [
            remedy.title.as_str(),
            remedy.description.as_str(),
            remedy.legal_reference.as_str(),
            remedy.how_to_use.as_str(),
            remedy.eligibility.as_str(),
            remedy.authority.as_str(),
        ]
        .join(" ")
        .to_lowercase();

        Self {
            title: remedy.title.to_lowercase(),
            description: remedy.description.to_lowercase(),
            legal_reference: remedy.legal_reference.to_lowercase(),
            how_to_use: remedy.how_to_use.to_lowercase(),
            corpus,
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    categories: Vec<Category>,
    legal_types: Vec<LegalType>,
    remedies: Vec<Remedy>,
    texts: Vec<RemedyText>,
    category_index: HashMap<String, usize>,
    legal_type_index: HashMap<String, usize>,
    remedy_index: HashMap<String, usize>,
    origin: String,
    fingerprint: String,
}

impl Catalog {
    /// The catalog compiled into the binary.
    pub fn bundled() -> Result<Self, AppError> {
        Self::load(CatalogSource::bundled(BUNDLED_CATALOG))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        Self::load(CatalogSource::from_file(path)?)
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        Self::load(CatalogSource::new(text, "inline"))
    }

    pub fn load(source: CatalogSource) -> Result<Self, AppError> {
        let document: CatalogDocument = source.decode()?;

        let category_index = build_index("category", document.categories.iter().map(|c| c.id.as_str()))?;
        let legal_type_index =
            build_index("legal type", document.legal_types.iter().map(|t| t.id.as_str()))?;
        let remedy_index = build_index("remedy", document.remedies.iter().map(|r| r.id.as_str()))?;

        for remedy in &document.remedies {
            if !legal_type_index.contains_key(&remedy.legal_type_id) {
                warn!(
                    remedy = %remedy.id,
                    legal_type_id = %remedy.legal_type_id,
                    "remedy references unknown legal type"
                );
            }
            for category_id in &remedy.category_ids {
                if !category_index.contains_key(category_id) {
                    warn!(
                        remedy = %remedy.id,
                        category_id = %category_id,
                        "remedy references unknown category, it will be skipped"
                    );
                }
            }
        }

        let texts = document.remedies.iter().map(RemedyText::new).collect();

        info!(
            origin = %source.origin,
            fingerprint = %source.fingerprint,
            remedies = document.remedies.len(),
            categories = document.categories.len(),
            legal_types = document.legal_types.len(),
            "catalog loaded"
        );

        Ok(Self {
            categories: document.categories,
            legal_types: document.legal_types,
            remedies: document.remedies,
            texts,
            category_index,
            legal_type_index,
            remedy_index,
            origin: source.origin,
            fingerprint: source.fingerprint,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Legal types in catalog order.
    pub fn legal_types(&self) -> &[LegalType] {
        &self.legal_types
    }

    /// Remedies in catalog order.
    pub fn remedies(&self) -> &[Remedy] {
        &self.remedies
    }

    /// Lowercased text of the remedy at `position` in catalog order.
    pub fn text_at(&self, position: usize) -> &RemedyText {
        &self.texts[position]
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.category_index.get(id).map(|&i| &self.categories[i])
    }

    pub fn legal_type(&self, id: &str) -> Option<&LegalType> {
        self.legal_type_index.get(id).map(|&i| &self.legal_types[i])
    }

    /// Display name of a legal type, or an empty string when the id does not resolve.
    pub fn legal_type_name(&self, id: &str) -> String {
        self.legal_type(id).map(|t| t.name.clone()).unwrap_or_default()
    }

    pub fn remedy(&self, id: &str) -> Option<&Remedy> {
        self.remedy_index.get(id).map(|&i| &self.remedies[i])
    }

    /// Look up a remedy and resolve its legal type name. `None` for unknown ids.
    pub fn resolve(&self, id: &str) -> Option<ResolvedRemedy> {
        let remedy = self.remedy(id)?;
        Some(ResolvedRemedy {
            legal_type: self.legal_type_name(&remedy.legal_type_id),
            remedy: remedy.clone(),
        })
    }

    /// Categories of a remedy that resolve, in the remedy's declared order.
    pub fn categories_of<'a>(&'a self, remedy: &'a Remedy) -> impl Iterator<Item = &'a Category> + 'a {
        remedy.category_ids.iter().filter_map(|id| self.category(id))
    }

    /// Remedies tagged with `category_id`, in catalog order.
    pub fn remedies_in_category<'a>(&'a self, category_id: &'a str) -> impl Iterator<Item = &'a Remedy> + 'a {
        self.remedies
            .iter()
            .filter(move |r| r.category_ids.iter().any(|c| c == category_id))
    }

    /// Number of remedies per category id. Categories with no remedies map to zero.
    pub fn category_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> =
            self.categories.iter().map(|c| (c.id.as_str(), 0)).collect();
        for remedy in &self.remedies {
            for category_id in &remedy.category_ids {
                if let Some(count) = counts.get_mut(category_id.as_str()) {
                    *count += 1;
                }
            }
        }
        counts
    }

    /// Number of remedies per legal type id.
    pub fn legal_type_counts(&self) -> HashMap<&str, usize> {
        let mut counts: HashMap<&str, usize> =
            self.legal_types.iter().map(|t| (t.id.as_str(), 0)).collect();
        for remedy in &self.remedies {
            if let Some(count) = counts.get_mut(remedy.legal_type_id.as_str()) {
                *count += 1;
            }
        }
        counts
    }
}

fn build_index<'a>(
    kind: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, AppError> {
    let mut index = HashMap::new();
    for (position, id) in ids.enumerate() {
        if index.insert(id.to_string(), position).is_some() {
            return Err(AppError::Catalog(format!("duplicate {kind} id: {id}")));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::SMALL_CATALOG;
    use remedy_common::error::CommonError;

    #[test]
    fn bundled_catalog_loads_with_resolved_references() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.remedies().is_empty());
        assert_eq!(catalog.origin(), "bundled");
        assert_eq!(catalog.fingerprint().len(), 64);

        for remedy in catalog.remedies() {
            assert!(
                catalog.legal_type(&remedy.legal_type_id).is_some(),
                "{} has unknown legal type {}",
                remedy.id,
                remedy.legal_type_id
            );
            assert_eq!(
                catalog.categories_of(remedy).count(),
                remedy.category_ids.len(),
                "{} has an unknown category",
                remedy.id
            );
            assert!(!remedy.how_to_use_steps().is_empty(), "{} has no steps", remedy.id);
        }
    }

    #[test]
    fn indexes_preserve_catalog_order() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let ids: Vec<&str> = catalog.remedies().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["dv-protection", "road-claim", "arrest-rights", "orphan"]);
        assert_eq!(catalog.remedy("road-claim").unwrap().title, "Road Accident Claim");
        assert!(catalog.remedy("missing").is_none());
    }

    #[test]
    fn remedy_text_is_lowercased_and_joined() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let text = catalog.text_at(0);
        assert_eq!(text.title, "domestic violence protection order");
        assert!(text.corpus.starts_with("domestic violence protection order "));
        assert!(text.corpus.contains("magistrate"));
        // Time limit is not part of the corpus.
        assert!(!text.corpus.contains("sixty days"));
    }

    #[test]
    fn unresolved_legal_type_resolves_to_empty_name() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let orphan = catalog.resolve("orphan").unwrap();
        assert_eq!(orphan.legal_type, "");
        let known = catalog.resolve("dv-protection").unwrap();
        assert_eq!(known.legal_type, "Statutory Right");
        assert!(catalog.resolve("nope").is_none());
    }

    #[test]
    fn unresolved_categories_are_skipped() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let orphan = catalog.remedy("orphan").unwrap();
        assert_eq!(orphan.category_ids.len(), 2);
        let resolved: Vec<&str> = catalog.categories_of(orphan).map(|c| c.id.as_str()).collect();
        assert_eq!(resolved, vec!["road"]);
    }

    #[test]
    fn counts_per_category_and_legal_type() {
        let catalog = Catalog::from_json(SMALL_CATALOG).unwrap();
        let by_category = catalog.category_counts();
        assert_eq!(by_category["domestic"], 1);
        assert_eq!(by_category["road"], 2);
        assert_eq!(by_category["police"], 1);
        assert_eq!(by_category["empty"], 0);

        let by_type = catalog.legal_type_counts();
        assert_eq!(by_type["statute"], 2);
        assert_eq!(by_type["constitutional"], 1);

        let in_road: Vec<&str> = catalog.remedies_in_category("road").map(|r| r.id.as_str()).collect();
        assert_eq!(in_road, vec!["road-claim", "orphan"]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{
            "categories": [],
            "legalTypes": [{"id": "statute", "name": "A"}, {"id": "statute", "name": "B"}],
            "remedies": []
        }"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
        assert!(err.to_string().contains("duplicate legal type id: statute"));
    }

    #[test]
    fn malformed_document_is_a_decode_error() {
        let err = Catalog::from_json("{\"remedies\": [{\"id\": 1}]}").unwrap_err();
        assert!(matches!(err, AppError::Common(CommonError::Json(_))));
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.remedies().is_empty());
        assert!(catalog.categories().is_empty());
        assert!(catalog.legal_types().is_empty());
    }

    #[test]
    fn bundled_file_matches_bundled_text() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/catalog.json");
        let from_file = Catalog::from_file(&path).unwrap();
        let bundled = Catalog::bundled().unwrap();
        assert_eq!(from_file.fingerprint(), bundled.fingerprint());
        assert_eq!(from_file.remedies(), bundled.remedies());
    }
}
