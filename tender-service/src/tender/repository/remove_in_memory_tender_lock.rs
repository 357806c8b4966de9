use {
    super::Repository,
    crate::kernel::entities::TenderId,
    std::sync::Arc,
};

impl Repository {
    pub async fn remove_in_memory_tender_lock(&self, key: &TenderId) {
        let mut mutex_guard = self.in_memory_store.tender_lock.lock().await;
        let tender_lock = mutex_guard.get(key);
        if let Some(tender_lock) = tender_lock {
            // Whenever there is no task borrowing a lock for this key, we can remove it from the locks HashMap.
            if Arc::strong_count(tender_lock) == 1 {
                mutex_guard.remove(key);
            }
        }
    }
}
