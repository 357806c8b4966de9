use {
    super::Service,
    crate::{
        api::RestError,
        kernel::entities::TenderId,
        tender::entities,
    },
};

pub struct RemoveTenderInput {
    pub tender_id: TenderId,
}

impl Service {
    /// Remove a tender and return it as it was before removal.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(tender_id = input.tender_id))]
    pub async fn remove_tender(
        &self,
        input: RemoveTenderInput,
    ) -> Result<entities::Tender, RestError> {
        let tender = self.repo.remove_tender(input.tender_id).await?;
        tracing::info!("Tender removed");
        Ok(tender)
    }
}
