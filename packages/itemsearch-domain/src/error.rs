pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unsupported locale {value:?}.")]
	UnsupportedLocale { value: String },
	#[error("Document has no {locale} variant for {field}.")]
	MissingVariant { field: &'static str, locale: crate::Locale },
}
