use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A supported response locale. Closed set: anything outside it is rejected
/// up front instead of falling back to another language or an empty value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
	En,
	Fr,
}

impl Locale {
	pub fn parse(value: &str) -> Result<Self> {
		match value {
			"en" => Ok(Self::En),
			"fr" => Ok(Self::Fr),
			_ => Err(Error::UnsupportedLocale { value: value.to_string() }),
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::En => "en",
			Self::Fr => "fr",
		}
	}
}

impl std::fmt::Display for Locale {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}
