use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// A decoded engine response envelope: the engine-reported total plus the
/// current page of hits, in engine ranking order.
#[derive(Clone, Debug)]
pub struct Envelope {
	pub total: u64,
	pub hits: Vec<Hit>,
}

/// One matching document. The per-hit payload stays undecoded here; the
/// caller decides what shape to decode it into.
#[derive(Clone, Debug)]
pub struct Hit {
	pub id: String,
	pub score: f64,
	pub source: Value,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
	hits: RawHits,
}

#[derive(Debug, Deserialize)]
struct RawHits {
	total: RawTotal,
	#[serde(default)]
	hits: Vec<RawHit>,
}

#[derive(Debug, Deserialize)]
struct RawTotal {
	value: u64,
}

#[derive(Debug, Deserialize)]
struct RawHit {
	#[serde(rename = "_id")]
	id: String,
	#[serde(rename = "_score", default)]
	score: Option<f64>,
	#[serde(rename = "_source", default)]
	source: Value,
}

pub fn parse(bytes: &[u8]) -> Result<Envelope> {
	let value: Value = serde_json::from_slice(bytes).map_err(Error::Decode)?;

	// The engine reports query-execution failures in the body; surface its
	// diagnostic instead of a shape mismatch.
	if value.get("error").is_some() {
		return Err(Error::Engine { message: error_reason(&value) });
	}

	let raw: RawResponse = serde_json::from_value(value).map_err(Error::Decode)?;
	let hits = raw
		.hits
		.hits
		.into_iter()
		.map(|hit| Hit { id: hit.id, score: hit.score.unwrap_or_default(), source: hit.source })
		.collect();

	Ok(Envelope { total: raw.hits.total.value, hits })
}

/// Extracts the engine's diagnostic message from an error body. Falls back
/// to a generic message so raw bytes never reach the caller.
pub(crate) fn error_reason(value: &Value) -> String {
	let error = &value["error"];

	if let Some(reason) = error["reason"].as_str() {
		return reason.to_string();
	}
	if let Some(message) = error.as_str() {
		return message.to_string();
	}

	"Engine reported an unspecified failure.".to_string()
}
