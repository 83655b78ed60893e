//! Shared context for commands: one store client, one query cache.

use crate::cache::QueryCache;
use crate::client::StoreClient;

pub struct App {
    pub client: StoreClient,
    pub cache: QueryCache,
}

impl App {
    pub fn new(store_url: impl Into<String>) -> Self {
        App {
            client: StoreClient::new(store_url),
            cache: QueryCache::new(),
        }
    }
}
