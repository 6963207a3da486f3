//! Canned engine documents and envelopes for tests.

use serde_json::{Value, json};

use itemsearch_engine::{Envelope, Hit};

/// A fully bilingual stored document, as the engine would return it in
/// `_source`. English and French variants are derived from the given names
/// so assertions can tell the locales apart.
pub fn bilingual_document(name_en: &str, name_fr: &str, timestamp: u64) -> Value {
	json!({
		"source": "fixture",
		"timestamp": timestamp,
		"image_urls": [format!("https://img.example/{}.jpg", slug(name_en))],
		"dimensions": { "height": 40.0, "weight": 2.5 },
		"name": { "en": name_en, "fr": name_fr },
		"description": {
			"en": format!("{name_en} for testing."),
			"fr": format!("{name_fr} pour les tests.")
		},
		"urls": {
			"en": [format!("https://example.com/{}", slug(name_en))],
			"fr": [format!("https://example.fr/{}", slug(name_fr))]
		},
		"categories": { "en": ["fixtures"], "fr": ["échantillons"] },
		"price": {
			"en": { "amount": 10.0, "currency": "USD" },
			"fr": { "amount": 9.0, "currency": "EUR" }
		}
	})
}

/// A document missing every French variant.
pub fn english_only_document(name_en: &str, timestamp: u64) -> Value {
	json!({
		"source": "fixture",
		"timestamp": timestamp,
		"image_urls": [],
		"dimensions": {},
		"name": { "en": name_en },
		"description": { "en": format!("{name_en} for testing.") },
		"urls": { "en": [] },
		"categories": { "en": ["fixtures"] },
		"price": { "en": { "amount": 10.0, "currency": "USD" } }
	})
}

/// Assembles a decoded envelope from (id, score, document) triples.
pub fn envelope(total: u64, hits: Vec<(&str, f64, Value)>) -> Envelope {
	Envelope {
		total,
		hits: hits
			.into_iter()
			.map(|(id, score, source)| Hit { id: id.to_string(), score, source })
			.collect(),
	}
}

/// The raw wire form of an envelope, for exercising the response parser.
pub fn envelope_json(total: u64, hits: Vec<(&str, f64, Value)>) -> Value {
	json!({
		"took": 1,
		"hits": {
			"total": { "value": total, "relation": "eq" },
			"hits": hits
				.into_iter()
				.map(|(id, score, source)| json!({
					"_id": id,
					"_score": score,
					"_source": source
				}))
				.collect::<Vec<_>>()
		}
	})
}

fn slug(name: &str) -> String {
	name.to_lowercase().replace(' ', "-")
}
