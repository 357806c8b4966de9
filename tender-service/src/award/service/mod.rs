use {
    crate::{
        bid,
        tender,
        vendor,
    },
    std::sync::Arc,
};

pub mod settle_award;

pub struct ServiceInner {
    tender_repo: Arc<tender::repository::Repository>,
    vendor_repo: Arc<vendor::repository::Repository>,
    bid_repo:    Arc<bid::repository::Repository>,
}

/// Assigns tenders to vendors, keeping tender and bid records in step.
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
        tender_repo: Arc<tender::repository::Repository>,
        vendor_repo: Arc<vendor::repository::Repository>,
        bid_repo: Arc<bid::repository::Repository>,
    ) -> Self {
        Self(Arc::new(ServiceInner {
            tender_repo,
            vendor_repo,
            bid_repo,
        }))
    }
}
