use itemsearch_domain::Dimension;

use crate::SearchRequest;

/// Which side of a range a clause constrains. Both comparators are
/// inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
	Gte,
	Lte,
}

impl Bound {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Gte => "gte",
			Self::Lte => "lte",
		}
	}
}

/// One range-filter clause over a physical dimension. Only materialized for
/// bounds the caller actually supplied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeFilter {
	pub dimension: Dimension,
	pub bound: Bound,
	pub value: f64,
}

/// Builds the filter clause list for a request. The order is fixed —
/// `Dimension::ALL`, lower bound before upper — so identical input always
/// produces an identical clause sequence.
pub fn range_filters(request: &SearchRequest) -> Vec<RangeFilter> {
	let mut filters = Vec::new();

	for dimension in Dimension::ALL {
		let (min, max) = request.bounds(dimension);

		if let Some(value) = min {
			filters.push(RangeFilter { dimension, bound: Bound::Gte, value });
		}
		if let Some(value) = max {
			filters.push(RangeFilter { dimension, bound: Bound::Lte, value });
		}
	}

	filters
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn no_bounds_yield_no_clauses() {
		let request = SearchRequest::new("chair");

		assert!(range_filters(&request).is_empty());
	}

	#[test]
	fn emits_lower_then_upper_per_dimension() {
		let mut request = SearchRequest::new("chair");
		request.min_height = Some(40.0);
		request.max_height = Some(80.0);

		let filters = range_filters(&request);

		assert_eq!(filters, vec![
			RangeFilter { dimension: Dimension::Height, bound: Bound::Gte, value: 40.0 },
			RangeFilter { dimension: Dimension::Height, bound: Bound::Lte, value: 80.0 },
		]);
	}

	#[test]
	fn single_sided_bounds_emit_one_clause() {
		let mut request = SearchRequest::new("chair");
		request.max_weight = Some(2.5);

		let filters = range_filters(&request);

		assert_eq!(filters, vec![RangeFilter {
			dimension: Dimension::Weight,
			bound: Bound::Lte,
			value: 2.5,
		}]);
	}

	#[test]
	fn zero_is_a_legitimate_bound() {
		let mut request = SearchRequest::new("chair");
		request.min_depth = Some(0.0);

		let filters = range_filters(&request);

		assert_eq!(filters, vec![RangeFilter {
			dimension: Dimension::Depth,
			bound: Bound::Gte,
			value: 0.0,
		}]);
	}

	#[test]
	fn clause_order_follows_dimension_enumeration() {
		let mut request = SearchRequest::new("chair");
		request.min_thickness = Some(1.0);
		request.max_length = Some(10.0);
		request.min_weight = Some(0.5);

		let dimensions: Vec<_> =
			range_filters(&request).iter().map(|filter| filter.dimension).collect();

		// Length precedes weight precedes thickness, regardless of the order
		// the caller supplied them in.
		assert_eq!(dimensions, vec![Dimension::Length, Dimension::Weight, Dimension::Thickness]);
	}

	#[test]
	fn repeated_calls_are_identical() {
		let mut request = SearchRequest::new("chair");
		request.min_height = Some(40.0);
		request.max_volume = Some(3.0);

		assert_eq!(range_filters(&request), range_filters(&request));
	}
}
