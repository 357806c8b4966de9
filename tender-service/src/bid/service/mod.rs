use {
    super::repository::Repository,
    crate::{
        tender,
        vendor,
    },
    std::sync::Arc,
};

pub mod get_tender_bids;
pub mod get_vendor_bids;
pub mod place_bid;

pub struct ServiceInner {
    repo:        Arc<Repository>,
    tender_repo: Arc<tender::repository::Repository>,
    vendor_repo: Arc<vendor::repository::Repository>,
}

#[derive(Clone)]
pub struct Service(Arc<ServiceInner>);
impl std::ops::Deref for Service {
    type Target = ServiceInner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Service {
    pub fn new(
        repo: Arc<Repository>,
        tender_repo: Arc<tender::repository::Repository>,
        vendor_repo: Arc<vendor::repository::Repository>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            repo,
            tender_repo,
            vendor_repo,
        }))
    }
}
