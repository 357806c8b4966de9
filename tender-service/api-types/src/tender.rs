use {
    crate::{
        MinorUnits,
        TenderId,
        VendorId,
    },
    serde::{
        Deserialize,
        Serialize,
    },
    strum::EnumString,
    time::OffsetDateTime,
};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderStatus {
    /// The tender accepts bids and can be assigned.
    Open,
    /// The tender was assigned to a vendor.
    Booked,
    /// The tender no longer accepts bids.
    Closed,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tender {
    pub id:               TenderId,
    pub title:            String,
    pub description:      String,
    pub tender_price:     MinorUnits,
    pub duration_in_days: u32,
    pub status:           TenderStatus,
    /// The vendor the tender was assigned to. Only present when the tender is booked.
    pub assigned_vendor:  Option<VendorId>,
    #[serde(with = "time::serde::rfc3339")]
    pub creation_time:    OffsetDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TenderCreate {
    /// Optional id of the tender. Creation fails if a tender with this id already exists.
    #[serde(default)]
    pub id:               Option<TenderId>,
    pub title:            String,
    pub description:      String,
    pub tender_price:     MinorUnits,
    pub duration_in_days: u32,
}

/// Fields to overwrite on an existing tender. Missing fields are left untouched.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TenderUpdate {
    #[serde(default)]
    pub title:            Option<String>,
    #[serde(default)]
    pub description:      Option<String>,
    #[serde(default)]
    pub tender_price:     Option<MinorUnits>,
    #[serde(default)]
    pub duration_in_days: Option<u32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Tenders {
    pub items: Vec<Tender>,
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::str::FromStr,
    };

    #[test]
    fn test_status_names_are_screaming_snake_case() {
        assert_eq!(TenderStatus::from_str("OPEN").unwrap(), TenderStatus::Open);
        assert!(TenderStatus::from_str("open").is_err());
        assert_eq!(
            serde_json::to_string(&TenderStatus::Closed).unwrap(),
            "\"CLOSED\""
        );
    }

    #[test]
    fn test_update_fields_default_to_none() {
        let update: TenderUpdate = serde_json::from_str(r#"{"title": "Bridge"}"#).unwrap();
        assert_eq!(
            update,
            TenderUpdate {
                title: Some("Bridge".to_string()),
                ..Default::default()
            }
        );
    }
}
