use {
    super::Repository,
    crate::{
        kernel::entities::TenderId,
        tender::entities,
    },
};

impl Repository {
    #[tracing::instrument(skip_all)]
    pub async fn get_or_create_in_memory_tender_lock(
        &self,
        key: TenderId,
    ) -> entities::TenderLock {
        self.in_memory_store
            .tender_lock
            .lock()
            .await
            .entry(key)
            .or_default()
            .clone()
    }
}
