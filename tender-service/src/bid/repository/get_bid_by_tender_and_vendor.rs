use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            TenderId,
            VendorId,
        },
    },
};

impl Repository {
    pub async fn get_bid_by_tender_and_vendor(
        &self,
        tender_id: TenderId,
        vendor_id: VendorId,
    ) -> Result<Option<entities::Bid>, RestError> {
        self.db
            .get_bid_by_tender_and_vendor(tender_id, vendor_id)
            .await
    }
}
