use {
    super::Service,
    crate::{
        api::RestError,
        bid,
        kernel::entities::{
            TenderId,
            VendorId,
        },
        tender::entities::TenderLock,
    },
};

#[derive(Debug, Clone, Copy)]
pub struct SettleAwardInput {
    pub tender_id: TenderId,
    pub vendor_id: VendorId,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    async fn settle_award_for_lock(
        &self,
        input: SettleAwardInput,
        lock: TenderLock,
    ) -> Result<bid::entities::Bid, RestError> {
        let _lock = lock.lock().await;

        // Every check runs before the first write.
        let tender = self.tender_repo.get_tender(input.tender_id).await?;
        let vendor = self.vendor_repo.get_vendor(input.vendor_id).await?;
        vendor.check_eligible()?;
        let bid = self
            .bid_repo
            .get_bid_by_tender_and_vendor(tender.id, vendor.id)
            .await?
            .ok_or(RestError::BidNotFound {
                tender_id: tender.id,
                vendor_id: vendor.id,
            })?;
        tender.check_open()?;

        // Losing this compare-and-set means nothing was written.
        self.tender_repo.book_tender(tender.id, vendor.id).await?;

        match self
            .bid_repo
            .update_bid_status(bid.id, bid::entities::BidStatus::Approved)
            .await
        {
            Ok(bid) => {
                tracing::info!(bid_id = bid.id, "Tender awarded");
                Ok(bid)
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    tender_id = tender.id,
                    vendor_id = vendor.id,
                    bid_id = bid.id,
                    "Tender was booked but the winning bid could not be approved"
                );
                Err(RestError::PartialCommit {
                    tender_id: tender.id,
                    bid_id:    bid.id,
                })
            }
        }
    }

    /// Assign an open tender to an active, eligible vendor that bid on it.
    ///
    /// The tender is booked for the vendor and the vendor's bid is approved. Settlements of the
    /// same tender are serialized in process, and the booking itself only succeeds on an open
    /// tender so concurrent processes cannot both win.
    #[tracing::instrument(
        skip_all,
        err(level = tracing::Level::TRACE),
        fields(tender_id = input.tender_id, vendor_id = input.vendor_id)
    )]
    pub async fn settle_award(
        &self,
        input: SettleAwardInput,
    ) -> Result<bid::entities::Bid, RestError> {
        let tender_lock = self
            .tender_repo
            .get_or_create_in_memory_tender_lock(input.tender_id)
            .await;
        let result = self.settle_award_for_lock(input, tender_lock).await;
        self.tender_repo
            .remove_in_memory_tender_lock(&input.tender_id)
            .await;
        result
    }
}
