use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::{
            EntityKind,
            TenderId,
        },
        tender::entities,
    },
};

impl Repository {
    pub async fn remove_tender(&self, tender_id: TenderId) -> Result<entities::Tender, RestError> {
        self.db
            .remove_tender(tender_id)
            .await?
            .ok_or(RestError::NotFound {
                entity: EntityKind::Tender,
                id:     tender_id,
            })
    }
}
