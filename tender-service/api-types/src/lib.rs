use serde::{
    Deserialize,
    Serialize,
};

pub mod bid;
pub mod tender;
pub mod vendor;

pub type TenderId = i64;
pub type VendorId = i64;
pub type BidId = i64;

/// Amount of money expressed in the smallest currency unit.
pub type MinorUnits = u64;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorBodyResponse {
    pub error: String,
}
