use std::sync::Arc;

use crate::config::StoreConfig;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::infrastructure::stores::json_file::JsonFileStore;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(store_config: &StoreConfig) -> Self {
        let store = JsonFileStore::new(&store_config.path);

        Container {
            account_service: account_service(store, store_config),
        }
    }
}

fn account_service(store: JsonFileStore, store_config: &StoreConfig) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> =
        Arc::new(AccountRepositoryImpl::open(store));

    Arc::new(AccountServiceImpl::new(
        account_repository,
        store_config.email_policy(),
    ))
}
