pub mod dimension;
pub mod document;
pub mod locale;

mod error;

pub use dimension::Dimension;
pub use document::{Item, Localized, Price, StoredDocument, project};
pub use error::{Error, Result};
pub use locale::Locale;
