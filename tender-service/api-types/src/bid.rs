use {
    crate::{
        BidId,
        MinorUnits,
        TenderId,
        VendorId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    time::OffsetDateTime,
};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BidStatus {
    /// The bid is waiting for the tender to be assigned.
    Pending,
    /// The bid won the tender.
    Approved,
    /// The bid was turned down.
    Rejected,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Bid {
    pub id:            BidId,
    pub tender_id:     TenderId,
    pub vendor_id:     VendorId,
    pub amount:        MinorUnits,
    pub status:        BidStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time: OffsetDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BidCreate {
    pub tender_id: TenderId,
    pub vendor_id: VendorId,
    pub amount:    MinorUnits,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Bids {
    pub items: Vec<Bid>,
}
