use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::EntityKind,
    },
};

impl Repository {
    /// Add a pending bid. Fails with `AlreadyExists` if the vendor already bid on the tender,
    /// including when a concurrent command inserted that bid first.
    pub async fn add_bid(&self, bid: entities::BidCreate) -> Result<entities::Bid, RestError> {
        if let Some(bid) = self.db.add_bid(&bid).await? {
            return Ok(bid);
        }
        match self
            .db
            .get_bid_by_tender_and_vendor(bid.tender_id, bid.vendor_id)
            .await?
        {
            Some(existing) => Err(RestError::AlreadyExists {
                entity: EntityKind::Bid,
                id:     existing.id,
            }),
            None => {
                tracing::error!(bid = ?bid, "Bid insert conflicted but no existing bid was found");
                Err(RestError::TemporarilyUnavailable)
            }
        }
    }
}
