use itemsearch_domain::Locale;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Unsupported locale {value:?}.")]
	UnsupportedLocale { value: String },
	#[error("Document has no {locale} variant for {field}.")]
	MissingLocaleVariant { field: &'static str, locale: Locale },
	#[error("Engine unavailable: {message}")]
	EngineUnavailable { message: String },
	#[error("Engine error: {message}")]
	Engine { message: String },
	#[error("Malformed engine response: {message}")]
	Decode { message: String },
}

impl From<itemsearch_domain::Error> for Error {
	fn from(err: itemsearch_domain::Error) -> Self {
		match err {
			itemsearch_domain::Error::UnsupportedLocale { value } =>
				Self::UnsupportedLocale { value },
			itemsearch_domain::Error::MissingVariant { field, locale } =>
				Self::MissingLocaleVariant { field, locale },
		}
	}
}

impl From<itemsearch_engine::Error> for Error {
	fn from(err: itemsearch_engine::Error) -> Self {
		match err {
			itemsearch_engine::Error::Unavailable(inner) =>
				Self::EngineUnavailable { message: inner.to_string() },
			itemsearch_engine::Error::Engine { message } => Self::Engine { message },
			itemsearch_engine::Error::Decode(inner) =>
				Self::Decode { message: inner.to_string() },
		}
	}
}
