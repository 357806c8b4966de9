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
    pub async fn update_tender(
        &self,
        tender_id: TenderId,
        update: entities::TenderUpdate,
    ) -> Result<entities::Tender, RestError> {
        self.db
            .update_tender(tender_id, &update)
            .await?
            .ok_or(RestError::NotFound {
                entity: EntityKind::Tender,
                id:     tender_id,
            })
    }
}
