#[cfg(test)]
use mockall::automock;
use {
    crate::{
        api::RestError,
        kernel::{
            db::{
                from_numeric,
                to_numeric,
                to_offset_date_time,
                to_primitive_date_time,
                DB,
            },
            entities::{
                TenderId,
                VendorId,
            },
        },
        tender::entities,
    },
    async_trait::async_trait,
    sqlx::{
        types::BigDecimal,
        FromRow,
        QueryBuilder,
    },
    std::fmt::Debug,
    tender_api_types::tender as api,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
    },
    tracing::instrument,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "tender_status", rename_all = "lowercase")]
pub enum TenderStatus {
    Open,
    Booked,
    Closed,
}

impl From<api::TenderStatus> for TenderStatus {
    fn from(status: api::TenderStatus) -> Self {
        match status {
            api::TenderStatus::Open => TenderStatus::Open,
            api::TenderStatus::Booked => TenderStatus::Booked,
            api::TenderStatus::Closed => TenderStatus::Closed,
        }
    }
}

#[derive(Clone, FromRow, Debug)]
pub struct Tender {
    pub id:                 i64,
    pub title:              String,
    pub description:        String,
    pub tender_price:       BigDecimal,
    pub duration_in_days:   i32,
    pub status:             TenderStatus,
    pub assigned_vendor_id: Option<i64>,
    pub creation_time:      PrimitiveDateTime,
}

impl Tender {
    pub fn get_tender_entity(&self) -> anyhow::Result<entities::Tender> {
        let status = match (self.status, self.assigned_vendor_id) {
            (TenderStatus::Open, None) => entities::TenderStatus::Open,
            (TenderStatus::Booked, Some(vendor_id)) => entities::TenderStatus::Booked { vendor_id },
            (TenderStatus::Closed, None) => entities::TenderStatus::Closed,
            (status, assigned_vendor_id) => {
                return Err(anyhow::anyhow!(
                    "Tender status {:?} does not match assigned vendor {:?}",
                    status,
                    assigned_vendor_id
                ))
            }
        };
        Ok(entities::Tender {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            price: from_numeric(&self.tender_price)?,
            duration_in_days: u32::try_from(self.duration_in_days)?,
            status,
            creation_time: to_offset_date_time(self.creation_time),
        })
    }
}

fn to_duration(duration_in_days: u32) -> Result<i32, RestError> {
    i32::try_from(duration_in_days).map_err(|_| {
        RestError::BadParameters(format!(
            "Duration of {} days is too long",
            duration_in_days
        ))
    })
}

fn to_entities(tenders: Vec<Tender>) -> Result<Vec<entities::Tender>, RestError> {
    tenders
        .into_iter()
        .map(|tender| to_entity(&tender))
        .collect()
}

fn to_entity(tender: &Tender) -> Result<entities::Tender, RestError> {
    tender.get_tender_entity().map_err(|e| {
        tracing::error!(error = e.to_string(), tender = ?tender, "Failed to convert tender to entity");
        RestError::TemporarilyUnavailable
    })
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait Database: Debug + Send + Sync + 'static {
    async fn add_tender(
        &self,
        tender: &entities::TenderCreate,
    ) -> Result<entities::Tender, RestError>;
    async fn get_tender(&self, tender_id: TenderId) -> Result<Option<entities::Tender>, RestError>;
    async fn get_tenders(
        &self,
        status: Option<TenderStatus>,
    ) -> Result<Vec<entities::Tender>, RestError>;
    async fn update_tender(
        &self,
        tender_id: TenderId,
        update: &entities::TenderUpdate,
    ) -> Result<Option<entities::Tender>, RestError>;
    async fn remove_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Option<entities::Tender>, RestError>;
    /// Move an open tender to booked, assigning the vendor. Returns false if the tender was not open.
    async fn book_tender(&self, tender_id: TenderId, vendor_id: VendorId)
        -> Result<bool, RestError>;
}

#[async_trait]
impl Database for DB {
    #[instrument(
        name = "db_add_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn add_tender(
        &self,
        tender: &entities::TenderCreate,
    ) -> Result<entities::Tender, RestError> {
        let model: Tender = sqlx::query_as(
            "INSERT INTO tender (title, description, tender_price, duration_in_days, status, creation_time) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(&tender.title)
        .bind(&tender.description)
        .bind(to_numeric(tender.price))
        .bind(to_duration(tender.duration_in_days)?)
        .bind(TenderStatus::Open)
        .bind(to_primitive_date_time(OffsetDateTime::now_utc()))
        .fetch_one(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(error = e.to_string(), tender = ?tender, "Failed to insert tender");
            RestError::TemporarilyUnavailable
        })?;
        to_entity(&model)
    }

    #[instrument(
        name = "db_get_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn get_tender(&self, tender_id: TenderId) -> Result<Option<entities::Tender>, RestError> {
        let model: Option<Tender> = sqlx::query_as("SELECT * FROM tender WHERE id = $1")
            .bind(tender_id)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(
                    error = e.to_string(),
                    tender_id = tender_id,
                    "Failed to get tender from db"
                );
                RestError::TemporarilyUnavailable
            })?;
        model.as_ref().map(to_entity).transpose()
    }

    #[instrument(
        name = "db_get_tenders",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn get_tenders(
        &self,
        status: Option<TenderStatus>,
    ) -> Result<Vec<entities::Tender>, RestError> {
        let mut query = QueryBuilder::new("SELECT * FROM tender");
        if let Some(status) = status {
            query.push(" WHERE status = ");
            query.push_bind(status);
        }
        query.push(" ORDER BY id ASC");
        let models: Vec<Tender> = query.build_query_as().fetch_all(self).await.map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!("DB: Failed to fetch tenders: {} - status: {:?}", e, status);
            RestError::TemporarilyUnavailable
        })?;
        to_entities(models)
    }

    #[instrument(
        name = "db_update_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn update_tender(
        &self,
        tender_id: TenderId,
        update: &entities::TenderUpdate,
    ) -> Result<Option<entities::Tender>, RestError> {
        let duration_in_days = update.duration_in_days.map(to_duration).transpose()?;
        let model: Option<Tender> = sqlx::query_as(
            "UPDATE tender SET title = COALESCE($1, title), description = COALESCE($2, description), \
             tender_price = COALESCE($3, tender_price), duration_in_days = COALESCE($4, duration_in_days) \
             WHERE id = $5 RETURNING *",
        )
        .bind(update.title.clone())
        .bind(update.description.clone())
        .bind(update.price.map(to_numeric))
        .bind(duration_in_days)
        .bind(tender_id)
        .fetch_optional(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(
                error = e.to_string(),
                tender_id = tender_id,
                update = ?update,
                "Failed to update tender"
            );
            RestError::TemporarilyUnavailable
        })?;
        model.as_ref().map(to_entity).transpose()
    }

    #[instrument(
        name = "db_remove_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn remove_tender(
        &self,
        tender_id: TenderId,
    ) -> Result<Option<entities::Tender>, RestError> {
        let model: Option<Tender> = sqlx::query_as("DELETE FROM tender WHERE id = $1 RETURNING *")
            .bind(tender_id)
            .fetch_optional(self)
            .await
            .map_err(|e| {
                tracing::Span::current().record("result", "error");
                tracing::error!(
                    error = e.to_string(),
                    tender_id = tender_id,
                    "Failed to remove tender"
                );
                RestError::TemporarilyUnavailable
            })?;
        model.as_ref().map(to_entity).transpose()
    }

    #[instrument(
        name = "db_book_tender",
        fields(category = "db_queries", result = "success"),
        skip_all
    )]
    async fn book_tender(
        &self,
        tender_id: TenderId,
        vendor_id: VendorId,
    ) -> Result<bool, RestError> {
        let result = sqlx::query(
            "UPDATE tender SET status = $1, assigned_vendor_id = $2 WHERE id = $3 AND status = $4",
        )
        .bind(TenderStatus::Booked)
        .bind(vendor_id)
        .bind(tender_id)
        .bind(TenderStatus::Open)
        .execute(self)
        .await
        .map_err(|e| {
            tracing::Span::current().record("result", "error");
            tracing::error!(
                error = e.to_string(),
                tender_id = tender_id,
                vendor_id = vendor_id,
                "Failed to book tender"
            );
            RestError::TemporarilyUnavailable
        })?;
        Ok(result.rows_affected() > 0)
    }
}
