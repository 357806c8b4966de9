use {
    crate::{
        award,
        bid,
        config::Config,
        kernel::db::DB,
        tender,
        vendor,
    },
    std::sync::Arc,
};

/// Services sharing one set of repositories, so that the in-memory tender locks are shared
/// between bidding and awarding.
#[derive(Clone)]
pub struct Store {
    pub tender_service: tender::service::Service,
    pub vendor_service: vendor::service::Service,
    pub bid_service:    bid::service::Service,
    pub award_service:  award::service::Service,
}

impl Store {
    pub fn new(
        tender_repo: Arc<tender::repository::Repository>,
        vendor_repo: Arc<vendor::repository::Repository>,
        bid_repo: Arc<bid::repository::Repository>,
        config: Config,
    ) -> Self {
        Self {
            tender_service: tender::service::Service::new(
                tender_repo.clone(),
                tender::service::Config {
                    listing: config.listing.clone(),
                },
            ),
            vendor_service: vendor::service::Service::new(
                vendor_repo.clone(),
                vendor::service::Config {
                    listing: config.listing,
                },
            ),
            bid_service:    bid::service::Service::new(
                bid_repo.clone(),
                tender_repo.clone(),
                vendor_repo.clone(),
            ),
            award_service:  award::service::Service::new(tender_repo, vendor_repo, bid_repo),
        }
    }

    pub fn from_db(db: DB, config: Config) -> Self {
        Self::new(
            Arc::new(tender::repository::Repository::new(db.clone())),
            Arc::new(vendor::repository::Repository::new(db.clone())),
            Arc::new(bid::repository::Repository::new(db)),
            config,
        )
    }
}
