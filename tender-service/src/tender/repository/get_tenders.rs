use {
    super::{
        Repository,
        TenderStatus,
    },
    crate::{
        api::RestError,
        tender::entities,
    },
};

impl Repository {
    pub async fn get_tenders(
        &self,
        status: Option<TenderStatus>,
    ) -> Result<Vec<entities::Tender>, RestError> {
        self.db.get_tenders(status).await
    }
}
