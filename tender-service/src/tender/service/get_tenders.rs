use {
    super::Service,
    crate::{
        api::RestError,
        tender::entities,
    },
};

impl Service {
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE))]
    pub async fn get_tenders(&self) -> Result<Vec<entities::Tender>, RestError> {
        let tenders = self.repo.get_tenders(None).await?;
        self.config
            .listing
            .check_listing(tenders, || "No tenders available".to_string())
    }
}
