use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::VendorId,
    },
};

pub struct GetVendorBidsInput {
    pub vendor_id: VendorId,
}

impl Service {
    /// List the bids a vendor has placed, oldest first.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(vendor_id = input.vendor_id))]
    pub async fn get_vendor_bids(
        &self,
        input: GetVendorBidsInput,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let vendor = self.vendor_repo.get_vendor(input.vendor_id).await?;
        self.repo.get_bids_by_vendor(vendor.id).await
    }
}
