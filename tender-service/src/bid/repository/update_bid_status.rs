use {
    super::Repository,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::{
            BidId,
            EntityKind,
        },
    },
};

impl Repository {
    pub async fn update_bid_status(
        &self,
        bid_id: BidId,
        status: entities::BidStatus,
    ) -> Result<entities::Bid, RestError> {
        self.db
            .update_bid_status(bid_id, status)
            .await?
            .ok_or(RestError::NotFound {
                entity: EntityKind::Bid,
                id:     bid_id,
            })
    }
}
