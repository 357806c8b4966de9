#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        bid::entities,
        kernel::{
            db::{
                from_numeric,
                to_numeric,
                to_offset_date_time,
                to_primitive_date_time,
                DB,
            },
            entities::{
                BidId,
                EntityKind,
                TenderId,
                VendorId,
            },
        },
    },
    async_trait::async_trait,
    sqlx::{
        types::BigDecimal,
        FromRow,
    },
    std::fmt::Debug,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
    },
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "bid_status", rename_all = "lowercase")]
pub enum BidStatus {
    Pending,
    Approved,
    Rejected,
}

impl From<entities::BidStatus> for BidStatus {
    fn from(status: entities::BidStatus) -> Self {
        match status {
            entities::BidStatus::Pending => BidStatus::Pending,
            entities::BidStatus::Approved => BidStatus::Approved,
            entities::BidStatus::Rejected => BidStatus::Rejected,
        }
    }
}

impl From<BidStatus> for entities::BidStatus {
    fn from(status: BidStatus) -> Self {
        match status {
            BidStatus::Pending => entities::BidStatus::Pending,
            BidStatus::Approved => entities::BidStatus::Approved,
            BidStatus::Rejected => entities::BidStatus::Rejected,
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Bid {
    pub id:            i64,
    pub tender_id:     i64,
    pub vendor_id:     i64,
    pub amount:        BigDecimal,
    pub status:        BidStatus,
    pub creation_time: PrimitiveDateTime,
}

impl Bid {
    pub fn get_bid_entity(&self) -> anyhow::Result<entities::Bid> {
        Ok(entities::Bid {
            id:            self.id,
            tender_id:     self.tender_id,
            vendor_id:     self.vendor_id,
            amount:        from_numeric(&self.amount)?,
            status:        self.status.into(),
            creation_time: to_offset_date_time(self.creation_time),
        })
    }
}

fn to_entity(bid: &Bid) -> Result<entities::Bid, RestError> {
    bid.get_bid_entity().map_err(|e| {
        tracing::error!(error = e.to_string(), bid = ?bid, "Failed to convert bid to entity");
        RestError::TemporarilyUnavailable
    })
}

fn to_entities(bids: Vec<Bid>) -> Result<Vec<entities::Bid>, RestError> {
    bids.iter().map(to_entity).collect()
}

/// The entity a foreign key violation on the bid table points at.
fn referenced_entity(constraint: Option<&str>) -> EntityKind {
    match constraint {
        Some(constraint) if constraint.contains("vendor") => EntityKind::Vendor,
        _ => EntityKind::Tender,
    }
}

// The tender or vendor of a bid can be removed between validation and insert.
fn missing_reference(error: &sqlx::Error) -> Option<EntityKind> {
    match error {
        sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
            Some(referenced_entity(e.constraint()))
        }
        _ => None,
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    /// Insert a pending bid. Returns None when the vendor already bid on the tender.
    async fn add_bid(&self, bid: &entities::BidCreate)
        -> Result<Option<entities::Bid>, RestError>;
    async fn get_bid_by_tender_and_vendor(
        &self,
        tender_id: TenderId,
        vendor_id: VendorId,
    ) -> Result<Option<entities::Bid>, RestError>;
    async fn get_bids_by_tender(&self, tender_id: TenderId)
        -> Result<Vec<entities::Bid>, RestError>;
    async fn get_bids_by_vendor(&self, vendor_id: VendorId)
        -> Result<Vec<entities::Bid>, RestError>;
    async fn update_bid_status(
        &self,
        bid_id: BidId,
        status: entities::BidStatus,
    ) -> Result<Option<entities::Bid>, RestError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        name = "db_add_bid",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn add_bid(
        &self,
        bid: &entities::BidCreate,
    ) -> Result<Option<entities::Bid>, RestError> {
        let model: Option<Bid> = sqlx::query_as(
            "INSERT INTO bid (tender_id, vendor_id, amount, status, creation_time) \
             VALUES ($1, $2, $3, $4, $5) ON CONFLICT (tender_id, vendor_id) DO NOTHING RETURNING *",
        )
        .bind(bid.tender_id)
        .bind(bid.vendor_id)
        .bind(to_numeric(bid.amount))
        .bind(BidStatus::Pending)
        .bind(to_primitive_date_time(OffsetDateTime::now_utc()))
        .fetch_optional(self)
        .await
        .map_err(|e| {
            if let Some(entity) = missing_reference(&e) {
                return RestError::NotFound {
                    entity,
                    id: match entity {
                        EntityKind::Vendor => bid.vendor_id,
                        _ => bid.tender_id,
                    },
                };
            }
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), bid = ?bid, "Failed to insert bid");
            RestError::TemporarilyUnavailable
        })?;
        model.as_ref().map(to_entity).transpose()
    }

    #[instrument(
        name = "db_get_bid_by_tender_and_vendor",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn get_bid_by_tender_and_vendor(
        &self,
        tender_id: TenderId,
        vendor_id: VendorId,
    ) -> Result<Option<entities::Bid>, RestError> {
        let model: Option<Bid> =
            sqlx::query_as("SELECT * FROM bid WHERE tender_id = $1 AND vendor_id = $2")
                .bind(tender_id)
                .bind(vendor_id)
                .fetch_optional(self)
                .await
                .map_err(|e| {
                    tracing::Span::current().record("result", "error");
                    tracing::error!(
                        error = e.to_string(),
                        tender_id = tender_id,
                        vendor_id = vendor_id,
                        "Failed to get bid from db"
                    );
                    RestError::TemporarilyUnavailable
                })?;
        model.as_ref().map(to_entity).transpose()
    }

    #[instrument(
        name = "db_get_bids_by_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn get_bids_by_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let models: Vec<Bid> =
            sqlx::query_as("SELECT * FROM bid WHERE tender_id = $1 ORDER BY id ASC")
                .bind(tender_id)
                .fetch_all(self)
                .await
                .map_err(|e| {
                    tracing::Span::current().record("result", "error");
                    tracing::error!("DB: Failed to fetch bids: {} - tender_id: {}", e, tender_id);
                    RestError::TemporarilyUnavailable
                })?;
        to_entities(models)
    }

    #[instrument(
        name = "db_get_bids_by_vendor",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn get_bids_by_vendor(
        &self,
        vendor_id: VendorId,
    ) -> Result<Vec<entities::Bid>, RestError> {
        let models: Vec<Bid> =
            sqlx::query_as("SELECT * FROM bid WHERE vendor_id = $1 ORDER BY id ASC")
                .bind(vendor_id)
                .fetch_all(self)
                .await
                .map_err(|e| {
                    tracing::Span::current().record("result", "error");
                    tracing::error!("DB: Failed to fetch bids: {} - vendor_id: {}", e, vendor_id);
                    RestError::TemporarilyUnavailable
                })?;
        to_entities(models)
    }

    #[instrument(
        name = "db_update_bid_status",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn update_bid_status(
        &self,
        bid_id: BidId,
        status: entities::BidStatus,
    ) -> Result<Option<entities::Bid>, RestError> {
        let model: Option<Bid> =
            sqlx::query_as("UPDATE bid SET status = $1 WHERE id = $2 RETURNING *")
                .bind(BidStatus::from(status))
                .bind(bid_id)
                .fetch_optional(self)
                .await
                .map_err(|e| {
                    tracing::Span::current().record("result", "error");
                    tracing::error!(
                        error = e.to_string(),
                        bid_id = bid_id,
                        status = ?status,
                        "Failed to update bid status"
                    );
                    RestError::TemporarilyUnavailable
                })?;
        model.as_ref().map(to_entity).transpose()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        time::macros::datetime,
    };

    #[test]
    fn test_bid_model_converts_to_entity() {
        let bid = Bid {
            id:            100,
            tender_id:     1,
            vendor_id:     10,
            amount:        BigDecimal::from(480_000),
            status:        BidStatus::Approved,
            creation_time: datetime!(2024-03-02 08:30),
        }
        .get_bid_entity()
        .unwrap();
        assert_eq!(bid.amount, 480_000);
        assert_eq!(bid.status, entities::BidStatus::Approved);
        assert_eq!(bid.creation_time, datetime!(2024-03-02 08:30 UTC));
    }

    #[test]
    fn test_foreign_key_violation_names_missing_entity() {
        assert_eq!(
            referenced_entity(Some("bid_vendor_id_fkey")),
            EntityKind::Vendor
        );
        assert_eq!(
            referenced_entity(Some("bid_tender_id_fkey")),
            EntityKind::Tender
        );
        assert_eq!(referenced_entity(None), EntityKind::Tender);
    }

    #[test]
    fn test_negative_amount_is_rejected() {
        let bid = Bid {
            id:            100,
            tender_id:     1,
            vendor_id:     10,
            amount:        BigDecimal::from(-1),
            status:        BidStatus::Pending,
            creation_time: datetime!(2024-03-02 08:30),
        };
        assert!(bid.get_bid_entity().is_err());
    }
}
