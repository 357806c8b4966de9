use {
    crate::kernel::entities::{
        BidId,
        EntityKind,
        TenderId,
        VendorId,
    },
    http::StatusCode,
    tender_api_types::ErrorBodyResponse,
};

#[derive(Debug, Clone, PartialEq)]
pub enum RestError {
    /// The request contained invalid parameters
    BadParameters(String),
    /// The referenced entity does not exist
    NotFound { entity: EntityKind, id: i64 },
    /// The entity to create already exists
    AlreadyExists { entity: EntityKind, id: i64 },
    /// The vendor account is not active
    InactiveAccount,
    /// The vendor is barred from being assigned tenders
    Ineligible,
    /// The vendor never bid on the tender
    BidNotFound {
        tender_id: TenderId,
        vendor_id: VendorId,
    },
    /// The tender was already assigned to a vendor
    AlreadyBooked { tender_id: TenderId },
    /// The tender no longer accepts bids or assignments
    TenderClosed { tender_id: TenderId },
    /// The listing has no entries
    EmptyResult(String),
    /// The tender was booked but the winning bid could not be approved
    PartialCommit {
        tender_id: TenderId,
        bid_id:    BidId,
    },
    /// Internal error occurred during processing the request
    TemporarilyUnavailable,
}

impl RestError {
    pub fn to_status_and_message(&self) -> (StatusCode, String) {
        match self {
            RestError::BadParameters(msg) => {
                (StatusCode::BAD_REQUEST, format!("Bad parameters: {}", msg))
            }
            RestError::NotFound { entity, id } => (
                StatusCode::NOT_FOUND,
                format!("{} with id {} was not found", entity, id),
            ),
            RestError::AlreadyExists { entity, id } => (
                StatusCode::CONFLICT,
                format!("{} with id {} already exists", entity, id),
            ),
            RestError::InactiveAccount => (
                StatusCode::BAD_REQUEST,
                "Vendor account is not active".to_string(),
            ),
            RestError::Ineligible => (
                StatusCode::BAD_REQUEST,
                "Vendor is not eligible for bidding".to_string(),
            ),
            RestError::BidNotFound {
                tender_id,
                vendor_id,
            } => (
                StatusCode::NOT_FOUND,
                format!(
                    "Vendor {} has not placed a bid on tender {}",
                    vendor_id, tender_id
                ),
            ),
            RestError::AlreadyBooked { tender_id } => (
                StatusCode::CONFLICT,
                format!("Tender {} is already booked", tender_id),
            ),
            RestError::TenderClosed { tender_id } => (
                StatusCode::CONFLICT,
                format!("Tender {} is closed", tender_id),
            ),
            RestError::EmptyResult(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            RestError::PartialCommit { tender_id, bid_id } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!(
                    "Tender {} was booked but bid {} could not be approved, operator attention required",
                    tender_id, bid_id
                ),
            ),
            RestError::TemporarilyUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "This service is temporarily unavailable".to_string(),
            ),
        }
    }

    pub fn to_error_body(&self) -> ErrorBodyResponse {
        let (_, error) = self.to_status_and_message();
        ErrorBodyResponse { error }
    }
}

impl std::fmt::Display for RestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (status, msg) = self.to_status_and_message();
        write!(f, "{} ({})", msg, status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (
                RestError::NotFound {
                    entity: EntityKind::Tender,
                    id:     99,
                },
                StatusCode::NOT_FOUND,
            ),
            (
                RestError::AlreadyExists {
                    entity: EntityKind::Tender,
                    id:     1,
                },
                StatusCode::CONFLICT,
            ),
            (
                RestError::AlreadyBooked { tender_id: 1 },
                StatusCode::CONFLICT,
            ),
            (RestError::Ineligible, StatusCode::BAD_REQUEST),
            (RestError::InactiveAccount, StatusCode::BAD_REQUEST),
            (
                RestError::PartialCommit {
                    tender_id: 1,
                    bid_id:    100,
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(error.to_status_and_message().0, status);
        }
    }

    #[test]
    fn test_error_body_message() {
        let error = RestError::NotFound {
            entity: EntityKind::Tender,
            id:     99,
        };
        assert_eq!(
            error.to_error_body(),
            ErrorBodyResponse {
                error: "Tender with id 99 was not found".to_string(),
            }
        );
    }
}
