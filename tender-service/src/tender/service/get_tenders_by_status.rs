use {
    super::Service,
    crate::{
        api::RestError,
        tender::entities,
    },
    std::str::FromStr,
    tender_api_types::tender::TenderStatus,
};

pub struct GetTendersByStatusInput {
    /// Exact, case sensitive status name such as `OPEN`.
    pub status: String,
}

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(status = %input.status))]
    pub async fn get_tenders_by_status(
        &self,
        input: GetTendersByStatusInput,
    ) -> Result<Vec<entities::Tender>, RestError> {
        // A name that matches no status matches no tender either.
        let tenders = match TenderStatus::from_str(&input.status) {
            Ok(status) => self.repo.get_tenders(Some(status.into())).await?,
            Err(_) => vec![],
        };
        self.config.listing.check_listing(tenders, || {
            format!("No tender available with the status {}", input.status)
        })
    }
}
