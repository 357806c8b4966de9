use {
    super::{
        verify_duration,
        Service,
    },
    crate::{
        api::RestError,
        kernel::entities::EntityKind,
        tender::entities,
    },
};

pub struct CreateTenderInput {
    pub tender: entities::TenderCreate,
}

impl Service {
    /// Create a new open tender.
    ///
    /// A caller supplied id is only used to detect duplicates, the store always assigns the id
    /// of the created tender.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn create_tender(
        &self,
        input: CreateTenderInput,
    ) -> Result<entities::Tender, RestError> {
        verify_duration(input.tender.duration_in_days)?;
        if let Some(tender_id) = input.tender.id {
            match self.repo.get_tender(tender_id).await {
                Ok(_) => {
                    return Err(RestError::AlreadyExists {
                        entity: EntityKind::Tender,
                        id:     tender_id,
                    })
                }
                Err(RestError::NotFound { .. }) => {}
                Err(e) => return Err(e),
            }
        }
        let tender = self.repo.add_tender(input.tender).await?;
        tracing::info!(tender_id = tender.id, "Tender created");
        Ok(tender)
    }
}
