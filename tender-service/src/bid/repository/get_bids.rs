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
    pub async fn get_bids_by_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db.get_bids_by_tender(tender_id).await
    }

    pub async fn get_bids_by_vendor(
        &self,
        vendor_id: VendorId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        self.db.get_bids_by_vendor(vendor_id).await
    }
}
