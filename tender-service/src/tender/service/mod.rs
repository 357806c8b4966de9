use {
    super::repository::Repository,
    crate::{
        api::RestError,
        config::ListingConfig,
    },
    std::sync::Arc,
};

pub mod create_tender;
pub mod get_tender;
pub mod get_tenders;
pub mod get_tenders_by_status;
pub mod remove_tender;
pub mod update_tender;

pub struct Config {
    pub listing: ListingConfig,
}

pub struct ServiceInner {
    config: Config,
    repo:   Arc<Repository>,
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
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        Self(Arc::new(ServiceInner { config, repo }))
    }
}

fn verify_duration(duration_in_days: u32) -> Result<(), RestError> {
    if duration_in_days == 0 {
        return Err(RestError::BadParameters(
            "Duration in days must be positive".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
pub mod tests {
    use {
        super::*,
        crate::{
            kernel::entities::TenderId,
            tender::{
                entities,
                repository::MockDatabase,
            },
        },
        time::OffsetDateTime,
    };

    impl Service {
        pub fn new_with_mocks(db: MockDatabase) -> Self {
            Self::new_with_listing(db, ListingConfig::default())
        }

        pub fn new_with_listing(db: MockDatabase, listing: ListingConfig) -> Self {
            Service::new(Arc::new(Repository::new(db)), Config { listing })
        }
    }

    pub fn get_tender(id: TenderId, status: entities::TenderStatus) -> entities::Tender {
        entities::Tender {
            id,
            title: format!("tender-{}", id),
            description: "Supply of office furniture".to_string(),
            price: 1_000_000,
            duration_in_days: 14,
            status,
            creation_time: OffsetDateTime::UNIX_EPOCH,
        }
    }
}
