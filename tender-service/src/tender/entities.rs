use {
    crate::{
        api::RestError,
        kernel::entities::{
            TenderId,
            TenderPrice,
            VendorId,
        },
    },
    std::sync::Arc,
    tender_api_types::tender as api,
    time::OffsetDateTime,
    tokio::sync::Mutex,
};

pub type TenderLock = Arc<Mutex<()>>;

/// Lifecycle of a tender. Only a booked tender has an assigned vendor.
#[derive(Clone, Debug, PartialEq)]
pub enum TenderStatus {
    Open,
    Booked { vendor_id: VendorId },
    Closed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tender {
    pub id:               TenderId,
    pub title:            String,
    pub description:      String,
    pub price:            TenderPrice,
    pub duration_in_days: u32,
    pub status:           TenderStatus,
    pub creation_time:    OffsetDateTime,
}

impl Tender {
    pub fn assigned_vendor(&self) -> Option<VendorId> {
        match self.status {
            TenderStatus::Booked { vendor_id } => Some(vendor_id),
            _ => None,
        }
    }

    /// Fails unless the tender still accepts bids and can be assigned.
    pub fn check_open(&self) -> Result<(), RestError> {
        match self.status {
            TenderStatus::Open => Ok(()),
            TenderStatus::Booked { .. } => Err(RestError::AlreadyBooked { tender_id: self.id }),
            TenderStatus::Closed => Err(RestError::TenderClosed { tender_id: self.id }),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TenderCreate {
    pub id:               Option<TenderId>,
    pub title:            String,
    pub description:      String,
    pub price:            TenderPrice,
    pub duration_in_days: u32,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct TenderUpdate {
    pub title:            Option<String>,
    pub description:      Option<String>,
    pub price:            Option<TenderPrice>,
    pub duration_in_days: Option<u32>,
}

impl From<TenderStatus> for api::TenderStatus {
    fn from(status: TenderStatus) -> Self {
        match status {
            TenderStatus::Open => api::TenderStatus::Open,
            TenderStatus::Booked { .. } => api::TenderStatus::Booked,
            TenderStatus::Closed => api::TenderStatus::Closed,
        }
    }
}

impl From<Tender> for api::Tender {
    fn from(tender: Tender) -> Self {
        api::Tender {
            id:               tender.id,
            assigned_vendor:  tender.assigned_vendor(),
            title:            tender.title,
            description:      tender.description,
            tender_price:     tender.price,
            duration_in_days: tender.duration_in_days,
            status:           tender.status.into(),
            creation_time:    tender.creation_time,
        }
    }
}

impl From<api::TenderCreate> for TenderCreate {
    fn from(tender: api::TenderCreate) -> Self {
        TenderCreate {
            id:               tender.id,
            title:            tender.title,
            description:      tender.description,
            price:            tender.tender_price,
            duration_in_days: tender.duration_in_days,
        }
    }
}

impl From<api::TenderUpdate> for TenderUpdate {
    fn from(tender: api::TenderUpdate) -> Self {
        TenderUpdate {
            title:            tender.title,
            description:      tender.description,
            price:            tender.tender_price,
            duration_in_days: tender.duration_in_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tender(status: TenderStatus) -> Tender {
        Tender {
            id: 1,
            title: "Road repair".to_string(),
            description: "Resurface the main road".to_string(),
            price: 500_000,
            duration_in_days: 30,
            status,
            creation_time: OffsetDateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn test_only_booked_tender_has_assigned_vendor() {
        assert_eq!(tender(TenderStatus::Open).assigned_vendor(), None);
        assert_eq!(tender(TenderStatus::Closed).assigned_vendor(), None);
        assert_eq!(
            tender(TenderStatus::Booked { vendor_id: 10 }).assigned_vendor(),
            Some(10)
        );
    }

    #[test]
    fn test_check_open() {
        assert_eq!(tender(TenderStatus::Open).check_open(), Ok(()));
        assert_eq!(
            tender(TenderStatus::Booked { vendor_id: 10 }).check_open(),
            Err(RestError::AlreadyBooked { tender_id: 1 })
        );
        assert_eq!(
            tender(TenderStatus::Closed).check_open(),
            Err(RestError::TenderClosed { tender_id: 1 })
        );
    }

    #[test]
    fn test_api_tender_carries_assigned_vendor() {
        let api_tender: api::Tender = tender(TenderStatus::Booked { vendor_id: 10 }).into();
        assert_eq!(api_tender.status, api::TenderStatus::Booked);
        assert_eq!(api_tender.assigned_vendor, Some(10));
    }
}
