use crate::modules::accounts::adapters::outbound::event_store_repository::EventStoreAccountRepository;
use crate::modules::accounts::application::account_service::AccountService;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

/// Backend picked at startup: Postgres when configured, in memory otherwise.
pub type AccountRepository = EventStoreAccountRepository<dyn EventStore>;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService<AccountRepository>>,
}

impl AppState {
    /// Wires the account service onto the process-wide store handle.
    pub fn new(event_store: Arc<dyn EventStore>) -> Self {
        let repository = Arc::new(EventStoreAccountRepository::new(event_store));
        Self {
            accounts: Arc::new(AccountService::new(repository)),
        }
    }
}
