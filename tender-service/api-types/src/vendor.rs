use {
    crate::VendorId,
    serde::{
        Deserialize,
        Serialize,
    },
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vendor {
    pub id:          VendorId,
    pub name:        String,
    /// Whether the vendor account is usable.
    pub is_active:   bool,
    /// Whether the vendor may be assigned tenders.
    pub is_eligible: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VendorCreate {
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vendors {
    pub items: Vec<Vendor>,
}
