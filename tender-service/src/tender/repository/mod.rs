use {
    super::entities,
    crate::kernel::entities::TenderId,
    std::collections::HashMap,
    tokio::sync::Mutex,
};

mod add_tender;
mod book_tender;
mod get_or_create_in_memory_tender_lock;
mod get_tender;
mod get_tenders;
mod models;
mod remove_in_memory_tender_lock;
mod remove_tender;
mod update_tender;

pub use models::*;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub tender_lock: Mutex<HashMap<TenderId, entities::TenderLock>>,
}

#[derive(Debug)]
pub struct Repository {
    pub in_memory_store: InMemoryStore,
    pub db:              Box<dyn Database>,
}

impl Repository {
    pub fn new(db: impl Database) -> Self {
        Self {
            in_memory_store: InMemoryStore::default(),
            db:              Box::new(db),
        }
    }
}
