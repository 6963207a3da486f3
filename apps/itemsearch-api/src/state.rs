use std::sync::Arc;

use itemsearch_service::ItemSearchService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<ItemSearchService>,
}

impl AppState {
	pub fn new(config: itemsearch_config::Config) -> Self {
		Self { service: Arc::new(ItemSearchService::new(config)) }
	}
}
