use {
    super::{
        verify_duration,
        Service,
    },
    crate::{
        api::RestError,
        kernel::entities::TenderId,
        tender::entities,
    },
};

pub struct UpdateTenderInput {
    pub tender_id: TenderId,
    pub update:    entities::TenderUpdate,
}

impl Service {
    /// Overwrite the supplied descriptive fields of a tender. Status and id never change here.
    #[tracing::instrument(skip_all, err(level = tracing::Level::TRACE), fields(tender_id = input.tender_id))]
    pub async fn update_tender(
        &self,
        input: UpdateTenderInput,
    ) -> Result<entities::Tender, RestError> {
        if let Some(duration_in_days) = input.update.duration_in_days {
            verify_duration(duration_in_days)?;
        }
        self.repo
            .update_tender(input.tender_id, input.update)
            .await
    }
}

#[cfg(test)]
mod tests {
    use {
        super::UpdateTenderInput,
        crate::{
            api::RestError,
            kernel::entities::EntityKind,
            tender::{
                entities::{
                    Tender,
                    TenderStatus,
                    TenderUpdate,
                },
                repository::MockDatabase,
                service::{
                    tests::get_tender,
                    Service,
                },
            },
        },
    };

    #[tokio::test]
    async fn test_update_tender_keeps_status() {
        let mut db = MockDatabase::default();
        db.expect_update_tender()
            .times(1)
            .returning(|id, update: &TenderUpdate| {
                let tender = get_tender(id, TenderStatus::Booked { vendor_id: 10 });
                Ok(Some(Tender {
                    title: update.title.clone().unwrap_or(tender.title.clone()),
                    price: update.price.unwrap_or(tender.price),
                    ..tender
                }))
            });
        let service = Service::new_with_mocks(db);

        let tender = service
            .update_tender(UpdateTenderInput {
                tender_id: 1,
                update:    TenderUpdate {
                    title: Some("New title".to_string()),
                    price: Some(42),
                    ..Default::default()
                },
            })
            .await
            .unwrap();
        assert_eq!(tender.title, "New title");
        assert_eq!(tender.price, 42);
        assert_eq!(tender.status, TenderStatus::Booked { vendor_id: 10 });
    }

    #[tokio::test]
    async fn test_update_missing_tender() {
        let mut db = MockDatabase::default();
        db.expect_update_tender().returning(|_, _| Ok(None));
        let service = Service::new_with_mocks(db);

        assert_eq!(
            service
                .update_tender(UpdateTenderInput {
                    tender_id: 5,
                    update:    TenderUpdate::default(),
                })
                .await
                .unwrap_err(),
            RestError::NotFound {
                entity: EntityKind::Tender,
                id:     5,
            }
        );
    }

    #[tokio::test]
    async fn test_update_tender_with_zero_duration() {
        let mut db = MockDatabase::default();
        db.expect_update_tender().never();
        let service = Service::new_with_mocks(db);

        let result = service
            .update_tender(UpdateTenderInput {
                tender_id: 1,
                update:    TenderUpdate {
                    duration_in_days: Some(0),
                    ..Default::default()
                },
            })
            .await;
        assert!(matches!(result, Err(RestError::BadParameters(_))));
    }
}
