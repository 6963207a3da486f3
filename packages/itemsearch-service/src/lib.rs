pub mod search;

mod error;

pub use error::{Error, Result};
pub use search::{SearchRequest, SearchResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use itemsearch_config::Config;
use itemsearch_engine::Envelope;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam for the outbound engine call, the service's only side effect. Tests
/// substitute a canned implementation here.
pub trait EngineClient
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		cfg: &'a itemsearch_config::Engine,
		query: &'a Value,
	) -> BoxFuture<'a, itemsearch_engine::Result<Envelope>>;
}

struct DefaultEngine;

impl EngineClient for DefaultEngine {
	fn search<'a>(
		&'a self,
		cfg: &'a itemsearch_config::Engine,
		query: &'a Value,
	) -> BoxFuture<'a, itemsearch_engine::Result<Envelope>> {
		Box::pin(itemsearch_engine::search(cfg, query))
	}
}

pub struct ItemSearchService {
	pub cfg: Config,
	pub engine: Arc<dyn EngineClient>,
}

impl ItemSearchService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, engine: Arc::new(DefaultEngine) }
	}

	pub fn with_engine(cfg: Config, engine: Arc<dyn EngineClient>) -> Self {
		Self { cfg, engine }
	}
}
