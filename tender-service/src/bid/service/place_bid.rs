use {
    super::Service,
    crate::{
        api::RestError,
        bid::entities,
        kernel::entities::EntityKind,
        tender::entities::TenderLock,
    },
};

pub struct PlaceBidInput {
    pub bid: entities::BidCreate,
}

impl Service {
    /// Place a pending bid on an open tender.
    ///
    /// Runs under the tender lock so a bid never lands on a tender that is being awarded.
    #[tracing::instrument(
        skip_all,
        err(level = tracing::Level::TRACE),
        fields(tender_id = input.bid.tender_id, vendor_id = input.bid.vendor_id)
    )]
    pub async fn place_bid(&self, input: PlaceBidInput) -> Result<entities::Bid, RestError> {
        if input.bid.amount == 0 {
            return Err(RestError::BadParameters(
                "Bid amount must be positive".to_string(),
            ));
        }
        let tender_id = input.bid.tender_id;
        // Lock the tender to keep bids out of a running award
        let tender_lock = self
            .tender_repo
            .get_or_create_in_memory_tender_lock(tender_id)
            .await;
        let result = self.place_bid_for_lock(input, tender_lock).await;
        self.tender_repo
            .remove_in_memory_tender_lock(&tender_id)
            .await;
        result
    }

    async fn place_bid_for_lock(
        &self,
        input: PlaceBidInput,
        lock: TenderLock,
    ) -> Result<entities::Bid, RestError> {
        let _lock = lock.lock().await;
        let tender = self.tender_repo.get_tender(input.bid.tender_id).await?;
        let vendor = self.vendor_repo.get_vendor(input.bid.vendor_id).await?;
        vendor.check_eligible()?;
        tender.check_open()?;

        if let Some(bid) = self
            .repo
            .get_bid_by_tender_and_vendor(tender.id, vendor.id)
            .await?
        {
            return Err(RestError::AlreadyExists {
                entity: EntityKind::Bid,
                id:     bid.id,
            });
        }

        let bid = self.repo.add_bid(input.bid).await?;
        tracing::info!(bid_id = bid.id, "Bid placed");
        Ok(bid)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::PlaceBidInput,
        crate::{
            api::RestError,
            bid::{
                entities::BidCreate,
                repository::MockDatabase,
                service::{
                    tests::get_bid,
                    Service,
                },
            },
            kernel::entities::EntityKind,
            tender::{
                self,
                entities::TenderStatus,
            },
            vendor::{
                self,
                entities::Vendor,
            },
        },
        mockall::predicate::eq,
        std::sync::{
            atomic::{
                AtomicBool,
                Ordering,
            },
            Arc,
        },
    };

    fn input(amount: u64) -> PlaceBidInput {
        PlaceBidInput {
            bid: BidCreate {
                tender_id: 1,
                vendor_id: 10,
                amount,
            },
        }
    }

    fn tender_db(status: TenderStatus) -> tender::repository::MockDatabase {
        let mut tender_db = tender::repository::MockDatabase::default();
        tender_db.expect_get_tender().returning(move |id| {
            Ok(Some(tender::service::tests::get_tender(id, status.clone())))
        });
        tender_db
    }

    fn vendor_db(vendor: Vendor) -> vendor::repository::MockDatabase {
        let mut vendor_db = vendor::repository::MockDatabase::default();
        vendor_db
            .expect_get_vendor()
            .returning(move |_| Ok(Some(vendor.clone())));
        vendor_db
    }

    #[tokio::test]
    async fn test_place_bid() {
        let mut db = MockDatabase::default();
        db.expect_get_bid_by_tender_and_vendor()
            .with(eq(1), eq(10))
            .returning(|_, _| Ok(None));
        db.expect_add_bid()
            .times(1)
            .returning(|bid| Ok(Some(get_bid(100, bid.tender_id, bid.vendor_id))));
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Open),
            vendor_db(vendor::service::tests::get_vendor(10)),
        );

        let bid = service.place_bid(input(900_000)).await.unwrap();
        assert_eq!(bid.id, 100);
        assert_eq!(bid.tender_id, 1);
        assert_eq!(bid.vendor_id, 10);
        assert!(service
            .tender_repo
            .in_memory_store
            .tender_lock
            .lock()
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn test_place_second_bid_for_same_vendor() {
        let mut db = MockDatabase::default();
        db.expect_get_bid_by_tender_and_vendor()
            .returning(|tender_id, vendor_id| Ok(Some(get_bid(100, tender_id, vendor_id))));
        db.expect_add_bid().never();
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Open),
            vendor_db(vendor::service::tests::get_vendor(10)),
        );

        assert_eq!(
            service.place_bid(input(900_000)).await.unwrap_err(),
            RestError::AlreadyExists {
                entity: EntityKind::Bid,
                id:     100,
            }
        );
    }

    #[tokio::test]
    async fn test_place_bid_losing_insert_race() {
        // A competing command inserts the same pair after the duplicate check.
        let inserted = Arc::new(AtomicBool::new(false));
        let mut db = MockDatabase::default();
        let read_inserted = inserted.clone();
        db.expect_get_bid_by_tender_and_vendor()
            .times(2)
            .returning(move |tender_id, vendor_id| {
                if read_inserted.load(Ordering::SeqCst) {
                    Ok(Some(get_bid(101, tender_id, vendor_id)))
                } else {
                    Ok(None)
                }
            });
        db.expect_add_bid().times(1).returning(move |_| {
            inserted.store(true, Ordering::SeqCst);
            Ok(None)
        });
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Open),
            vendor_db(vendor::service::tests::get_vendor(10)),
        );

        assert_eq!(
            service.place_bid(input(900_000)).await.unwrap_err(),
            RestError::AlreadyExists {
                entity: EntityKind::Bid,
                id:     101,
            }
        );
    }

    #[tokio::test]
    async fn test_place_bid_on_tender_removed_before_insert() {
        let mut db = MockDatabase::default();
        db.expect_get_bid_by_tender_and_vendor()
            .returning(|_, _| Ok(None));
        db.expect_add_bid().times(1).returning(|bid| {
            Err(RestError::NotFound {
                entity: EntityKind::Tender,
                id:     bid.tender_id,
            })
        });
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Open),
            vendor_db(vendor::service::tests::get_vendor(10)),
        );

        assert_eq!(
            service.place_bid(input(900_000)).await.unwrap_err(),
            RestError::NotFound {
                entity: EntityKind::Tender,
                id:     1,
            }
        );
    }

    #[tokio::test]
    async fn test_place_bid_on_booked_tender() {
        let mut db = MockDatabase::default();
        db.expect_add_bid().never();
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Booked { vendor_id: 11 }),
            vendor_db(vendor::service::tests::get_vendor(10)),
        );

        assert_eq!(
            service.place_bid(input(900_000)).await.unwrap_err(),
            RestError::AlreadyBooked { tender_id: 1 }
        );
    }

    #[tokio::test]
    async fn test_place_bid_by_barred_vendor() {
        let mut db = MockDatabase::default();
        db.expect_add_bid().never();
        let service = Service::new_with_mocks(
            db,
            tender_db(TenderStatus::Open),
            vendor_db(Vendor {
                is_eligible: false,
                ..vendor::service::tests::get_vendor(10)
            }),
        );

        assert_eq!(
            service.place_bid(input(900_000)).await.unwrap_err(),
            RestError::Ineligible
        );
    }

    #[tokio::test]
    async fn test_place_bid_with_zero_amount() {
        let mut tender_db = tender::repository::MockDatabase::default();
        tender_db.expect_get_tender().never();
        let service = Service::new_with_mocks(
            MockDatabase::default(),
            tender_db,
            vendor::repository::MockDatabase::default(),
        );

        assert!(matches!(
            service.place_bid(input(0)).await,
            Err(RestError::BadParameters(_))
        ));
    }
}
