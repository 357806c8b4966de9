use strum::Display;

pub type TenderId = i64;
pub type VendorId = i64;
pub type BidId = i64;

/// Price of a tender in the smallest currency unit.
pub type TenderPrice = u64;
/// Amount offered by a bid in the smallest currency unit.
pub type BidAmount = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum EntityKind {
    Tender,
    Vendor,
    Bid,
}
