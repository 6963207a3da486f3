use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub engine: Engine,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// Connection settings for the external search engine.
#[derive(Debug, Clone, Deserialize)]
pub struct Engine {
	pub url: String,
	/// Optional. Requests are sent unauthenticated when unset.
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub password: Option<String>,
	pub index: String,
	pub timeout_ms: u64,
}
