use {
    crate::kernel::entities::{
        BidAmount,
        BidId,
        TenderId,
        VendorId,
    },
    tender_api_types::bid as api,
    time::OffsetDateTime,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BidStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:            BidId,
    pub tender_id:     TenderId,
    pub vendor_id:     VendorId,
    pub amount:        BidAmount,
    pub status:        BidStatus,
    pub creation_time: OffsetDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub tender_id: TenderId,
    pub vendor_id: VendorId,
    pub amount:    BidAmount,
}

impl From<BidStatus> for api::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Pending => api::BidStatus::Pending,
            BidStatus::Approved => api::BidStatus::Approved,
            BidStatus::Rejected => api::BidStatus::Rejected,
        }
    }
}

impl From<Bid> for api::Bid {
    fn from(bid: Bid) -> Self {
        api::Bid {
            id:            bid.id,
            tender_id:     bid.tender_id,
            vendor_id:     bid.vendor_id,
            amount:        bid.amount,
            status:        bid.status.into(),
            creation_time: bid.creation_time,
        }
    }
}

impl From<api::BidCreate> for BidCreate {
    fn from(bid: api::BidCreate) -> Self {
        BidCreate {
            tender_id: bid.tender_id,
            vendor_id: bid.vendor_id,
            amount:    bid.amount,
        }
    }
}
