pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Transport-level failure: the engine could not be reached or the
	/// connection died mid-request. Safe for the caller to retry.
	#[error("Engine unreachable.")]
	Unavailable(#[source] reqwest::Error),
	/// The engine executed the request and reported a failure of its own.
	#[error("Engine error: {message}")]
	Engine { message: String },
	/// The response arrived but did not match the expected envelope shape.
	#[error("Failed to decode engine response.")]
	Decode(#[source] serde_json::Error),
}
