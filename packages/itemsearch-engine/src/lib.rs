pub mod response;

mod error;

pub use error::{Error, Result};
pub use response::{Envelope, Hit};

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

/// Executes one compiled query against the engine's search endpoint and
/// decodes the response envelope.
pub async fn search(cfg: &itemsearch_config::Engine, body: &Value) -> Result<Envelope> {
	let client = Client::builder()
		.timeout(Duration::from_millis(cfg.timeout_ms))
		.build()
		.map_err(Error::Unavailable)?;
	let url = format!("{}/{}/_search", cfg.url, cfg.index);
	let mut request = client.post(url).json(body);

	if let Some(username) = cfg.username.as_deref() {
		request = request.basic_auth(username, cfg.password.as_deref());
	}

	let res = request.send().await.map_err(Error::Unavailable)?;
	let status = res.status();
	let bytes = res.bytes().await.map_err(Error::Unavailable)?;

	if !status.is_success() {
		let value: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

		return Err(Error::Engine { message: response::error_reason(&value) });
	}

	response::parse(&bytes)
}
