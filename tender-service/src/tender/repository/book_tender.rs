use {
    super::Repository,
    crate::{
        api::RestError,
        kernel::entities::{
            TenderId,
            VendorId,
        },
    },
};

impl Repository {
    /// Book an open tender for the vendor.
    ///
    /// When the booking does not apply, the tender is read again to report why: it was removed,
    /// closed, or booked by a competing award.
    pub async fn book_tender(
        &self,
        tender_id: TenderId,
        vendor_id: VendorId,
    ) -> Result<(), RestError> {
        if self.db.book_tender(tender_id, vendor_id).await? {
            return Ok(());
        }
        let tender = self.get_tender(tender_id).await?;
        tender.check_open()?;
        Err(RestError::AlreadyBooked { tender_id })
    }
}
