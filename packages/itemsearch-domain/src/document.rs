use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Dimension, Error, Locale, Result};

/// Per-locale variants of a stored field. Variants are optional at decode
/// time; whether a missing variant is an error is decided at projection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Localized<T> {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub en: Option<T>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fr: Option<T>,
}

// Not derived: a derived impl would require `T: Default`.
impl<T> Default for Localized<T> {
	fn default() -> Self {
		Self { en: None, fr: None }
	}
}

impl<T> Localized<T> {
	pub fn get(&self, locale: Locale) -> Option<&T> {
		match locale {
			Locale::En => self.en.as_ref(),
			Locale::Fr => self.fr.as_ref(),
		}
	}

	fn take(self, locale: Locale, field: &'static str) -> Result<T> {
		match locale {
			Locale::En => self.en,
			Locale::Fr => self.fr,
		}
		.ok_or(Error::MissingVariant { field, locale })
	}
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
	pub amount: f64,
	pub currency: String,
}

/// An item as stored in the engine index: locale-invariant attributes plus
/// per-locale variants for every localized field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredDocument {
	#[serde(default)]
	pub source: String,
	#[serde(default)]
	pub timestamp: u64,
	#[serde(default)]
	pub image_urls: Vec<String>,
	/// Keys are present only for the dimensions the item actually has.
	#[serde(default)]
	pub dimensions: BTreeMap<Dimension, f64>,
	#[serde(default)]
	pub name: Localized<String>,
	#[serde(default)]
	pub description: Localized<String>,
	#[serde(default)]
	pub urls: Localized<Vec<String>>,
	#[serde(default)]
	pub categories: Localized<Vec<String>>,
	#[serde(default)]
	pub price: Localized<Price>,
}

/// A single-locale, flat response item.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
	pub id: String,
	pub score: f64,
	pub source: String,
	pub timestamp: u64,
	pub name: String,
	pub description: String,
	pub urls: Vec<String>,
	pub categories: Vec<String>,
	pub image_urls: Vec<String>,
	pub dimensions: BTreeMap<Dimension, f64>,
	pub price: Price,
}

/// Resolves a stored document into the requested locale.
///
/// Locale-varying fields take the variant matching `locale`; invariant fields
/// are copied through unchanged. A localized field without the requested
/// variant is an error rather than a silent fallback to another locale.
pub fn project(document: StoredDocument, id: String, score: f64, locale: Locale) -> Result<Item> {
	let StoredDocument {
		source,
		timestamp,
		image_urls,
		dimensions,
		name,
		description,
		urls,
		categories,
		price,
	} = document;

	Ok(Item {
		id,
		score,
		source,
		timestamp,
		name: name.take(locale, "name")?,
		description: description.take(locale, "description")?,
		urls: urls.take(locale, "urls")?,
		categories: categories.take(locale, "categories")?,
		image_urls,
		dimensions,
		price: price.take(locale, "price")?,
	})
}
