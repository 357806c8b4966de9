use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::TenderId,
    },
};

pub struct GetTenderBidsInput {
    pub tender_id: TenderId,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(tender_id = input.tender_id))]
    pub async fn get_tender_bids(
        &self,
        input: GetTenderBidsInput,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let tender = self.tender_repo.get_tender(input.tender_id).await?;
        self.repo.get_bids_by_tender(tender.id).await
    }
}
