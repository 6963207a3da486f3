use serde_json::{Map, Value, json};

use itemsearch_domain::Locale;

use crate::{Error, Result, search::filter::RangeFilter};

/// Every page has this size; the caller cannot adjust it.
pub const PAGE_SIZE: u32 = 25;

/// A validated pagination cursor: the sort-key values of the previous page's
/// last hit, matching the compiled query's two-key sort exactly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageCursor {
	pub score: f64,
	pub timestamp: u64,
}

impl PageCursor {
	/// Parses the opaque `<score>,<timestamp>` form. The shape is checked
	/// here so a caller-supplied cursor can never alter query structure.
	pub fn parse(raw: &str) -> Result<Self> {
		let invalid = || Error::InvalidRequest {
			message: "Pagination cursor must be \"<score>,<timestamp>\".".to_string(),
		};
		let mut parts = raw.split(',');
		let score: f64 = parts.next().ok_or_else(invalid)?.trim().parse().map_err(|_| invalid())?;
		let timestamp: u64 =
			parts.next().ok_or_else(invalid)?.trim().parse().map_err(|_| invalid())?;

		if parts.next().is_some() || !score.is_finite() {
			return Err(invalid());
		}

		Ok(Self { score, timestamp })
	}
}

/// Compiles the full engine query document: ranked multi-field text match,
/// filter-context range clauses, fixed page size, deterministic sort, and an
/// optional resume point. Pure transform; all inputs are validated upstream.
pub fn compile(
	query: &str,
	locale: Locale,
	filters: &[RangeFilter],
	cursor: Option<&PageCursor>,
) -> Value {
	let filter_clauses: Vec<Value> = filters.iter().map(range_clause).collect();
	let mut body = json!({
		"query": {
			"bool": {
				"must": [{
					"multi_match": {
						"query": query,
						"fields": [
							format!("name.{locale}^10"),
							format!("categories.{locale}^3"),
							format!("description.{locale}"),
						],
						"operator": "and",
					}
				}],
				"filter": filter_clauses,
			}
		},
		"size": PAGE_SIZE,
		"sort": [{ "_score": "desc" }, { "timestamp": "asc" }],
	});

	if let Some(cursor) = cursor {
		body["search_after"] = json!([cursor.score, cursor.timestamp]);
	}

	body
}

fn range_clause(filter: &RangeFilter) -> Value {
	let mut comparator = Map::new();

	comparator.insert(filter.bound.as_str().to_string(), filter.value.into());

	let mut range = Map::new();

	range.insert(format!("dimensions.{}", filter.dimension), Value::Object(comparator));

	json!({ "range": range })
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::search::filter::Bound;
	use itemsearch_domain::Dimension;

	#[test]
	fn page_size_and_sort_are_fixed() {
		let body = compile("red box", Locale::En, &[], None);

		assert_eq!(body["size"], 25);
		assert_eq!(body["sort"], json!([{ "_score": "desc" }, { "timestamp": "asc" }]));
	}

	#[test]
	fn text_match_targets_requested_locale_fields() {
		let body = compile("boîte rouge", Locale::Fr, &[], None);
		let multi_match = &body["query"]["bool"]["must"][0]["multi_match"];

		assert_eq!(multi_match["query"], "boîte rouge");
		assert_eq!(
			multi_match["fields"],
			json!(["name.fr^10", "categories.fr^3", "description.fr"])
		);
		assert_eq!(multi_match["operator"], "and");
	}

	#[test]
	fn filters_land_in_filter_context_in_order() {
		let filters = [
			RangeFilter { dimension: Dimension::Height, bound: Bound::Gte, value: 40.0 },
			RangeFilter { dimension: Dimension::Height, bound: Bound::Lte, value: 80.0 },
		];
		let body = compile("chair", Locale::En, &filters, None);

		assert_eq!(
			body["query"]["bool"]["filter"],
			json!([
				{ "range": { "dimensions.height": { "gte": 40.0 } } },
				{ "range": { "dimensions.height": { "lte": 80.0 } } },
			])
		);
	}

	#[test]
	fn cursor_becomes_search_after() {
		let cursor = PageCursor { score: 3.1, timestamp: 1_588_000_000 };
		let body = compile("red box", Locale::En, &[], Some(&cursor));

		assert_eq!(body["search_after"], json!([3.1, 1_588_000_000u64]));
	}

	#[test]
	fn no_cursor_means_no_search_after() {
		let body = compile("red box", Locale::En, &[], None);

		assert!(body.get("search_after").is_none());
	}

	#[test]
	fn parses_well_formed_cursor() {
		let cursor = PageCursor::parse("3.1,1588000000").expect("cursor must parse");

		assert_eq!(cursor, PageCursor { score: 3.1, timestamp: 1_588_000_000 });
	}

	#[test]
	fn rejects_malformed_cursors() {
		for raw in ["", "3.1", "3.1,2,3", "abc,1588000000", "3.1,-5", "3.1,12.5", "nan,1"] {
			assert!(PageCursor::parse(raw).is_err(), "cursor {raw:?} must be rejected");
		}
	}

	#[test]
	fn cursor_text_cannot_change_query_structure() {
		// A structured body means injection attempts fail shape validation
		// instead of being spliced into the query.
		assert!(PageCursor::parse("1],\"boom\":[1").is_err());
	}
}
