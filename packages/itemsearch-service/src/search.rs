pub mod filter;
pub mod query;

use serde::{Deserialize, Serialize};

use itemsearch_domain::{Dimension, Item, Locale, StoredDocument, project};
use itemsearch_engine::Hit;

use crate::{Error, ItemSearchService, Result, search::query::PageCursor};

fn default_lang() -> String {
	"en".to_string()
}

/// One search call's parameters, exactly as they arrive at the boundary.
/// Bounds are optional: an absent parameter means "no filter", and zero is a
/// legitimate bound value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
	#[serde(rename = "q")]
	pub query: String,
	#[serde(default = "default_lang")]
	pub lang: String,
	/// Opaque pagination cursor: the sort-key values of the previous page's
	/// last hit, as `<score>,<timestamp>`.
	#[serde(rename = "a", default, skip_serializing_if = "Option::is_none")]
	pub after: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_length: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_height: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_height: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_width: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_width: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_depth: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_depth: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_weight: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_weight: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_diameter: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_diameter: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_volume: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_volume: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_thickness: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_thickness: Option<f64>,
}

impl SearchRequest {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			lang: default_lang(),
			after: None,
			min_length: None,
			max_length: None,
			min_height: None,
			max_height: None,
			min_width: None,
			max_width: None,
			min_depth: None,
			max_depth: None,
			min_weight: None,
			max_weight: None,
			min_diameter: None,
			max_diameter: None,
			min_volume: None,
			max_volume: None,
			min_thickness: None,
			max_thickness: None,
		}
	}

	pub(crate) fn bounds(&self, dimension: Dimension) -> (Option<f64>, Option<f64>) {
		match dimension {
			Dimension::Length => (self.min_length, self.max_length),
			Dimension::Height => (self.min_height, self.max_height),
			Dimension::Width => (self.min_width, self.max_width),
			Dimension::Depth => (self.min_depth, self.max_depth),
			Dimension::Weight => (self.min_weight, self.max_weight),
			Dimension::Diameter => (self.min_diameter, self.max_diameter),
			Dimension::Volume => (self.min_volume, self.max_volume),
			Dimension::Thickness => (self.min_thickness, self.max_thickness),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub total: u64,
	pub items: Vec<Item>,
}

impl ItemSearchService {
	/// Runs one search end to end: validate, compile, query the engine,
	/// project every hit. Any failure aborts the whole request; no partial
	/// result is ever returned.
	pub async fn search(&self, request: SearchRequest) -> Result<SearchResponse> {
		let query_text = request.query.trim();

		if query_text.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Query text must be non-empty.".to_string(),
			});
		}

		let locale = Locale::parse(request.lang.trim())?;
		let cursor = request.after.as_deref().map(PageCursor::parse).transpose()?;
		let filters = filter::range_filters(&request);
		let body = query::compile(query_text, locale, &filters, cursor.as_ref());

		tracing::debug!(
			index = %self.cfg.engine.index,
			%locale,
			filters = filters.len(),
			paginated = cursor.is_some(),
			"Executing item search.",
		);

		let envelope = self.engine.search(&self.cfg.engine, &body).await?;
		let mut items = Vec::with_capacity(envelope.hits.len());

		for hit in envelope.hits {
			let Hit { id, score, source } = hit;
			let document: StoredDocument =
				serde_json::from_value(source).map_err(|err| Error::Decode {
					message: format!("Hit {id} carries a malformed document: {err}."),
				})?;

			items.push(project(document, id, score, locale)?);
		}

		tracing::debug!(total = envelope.total, returned = items.len(), "Search completed.");

		Ok(SearchResponse { total: envelope.total, items })
	}
}
