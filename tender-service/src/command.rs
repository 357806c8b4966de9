use {
    crate::{
        api::RestError,
        award::service::settle_award::SettleAwardInput,
        bid::service::{
            get_tender_bids::GetTenderBidsInput,
            get_vendor_bids::GetVendorBidsInput,
            place_bid::PlaceBidInput,
        },
        config::{
            BidCommand,
            Command,
            Config,
            Options,
            TenderCommand,
            VendorCommand,
        },
        kernel::db,
        state::Store,
        tender::service::{
            create_tender::CreateTenderInput,
            get_tender::GetTenderInput,
            get_tenders_by_status::GetTendersByStatusInput,
            remove_tender::RemoveTenderInput,
            update_tender::UpdateTenderInput,
        },
        vendor::service::{
            bar_vendor::BarVendorInput,
            deactivate_vendor::DeactivateVendorInput,
            get_vendor::GetVendorInput,
            register_vendor::RegisterVendorInput,
        },
    },
    anyhow::anyhow,
    serde::Serialize,
    std::process::ExitCode,
    tender_api_types::{
        bid as bid_api,
        tender as tender_api,
        vendor as vendor_api,
    },
};

pub async fn run(options: Options) -> anyhow::Result<ExitCode> {
    let config = match &options.run.config.config {
        Some(path) => Config::load(path).map_err(|err| {
            anyhow!(
                "Failed to load config from file({path}): {:?}",
                err,
                path = path
            )
        })?,
        None => Config::default(),
    };
    let pool = db::connect(&options.run).await?;
    let store = Store::from_db(pool, config);

    match execute(&store, options.command).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", serde_json::to_string(&err.to_error_body())?);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, RestError> {
    serde_json::to_string_pretty(value).map_err(|e| {
        tracing::error!(error = e.to_string(), "Failed to serialize command output");
        RestError::TemporarilyUnavailable
    })
}

fn tenders_json(tenders: Vec<crate::tender::entities::Tender>) -> Result<String, RestError> {
    to_json(&tender_api::Tenders {
        items: tenders.into_iter().map(Into::into).collect(),
    })
}

fn bids_json(bids: Vec<crate::bid::entities::Bid>) -> Result<String, RestError> {
    to_json(&bid_api::Bids {
        items: bids.into_iter().map(Into::into).collect(),
    })
}

/// Runs a single command against the services and renders its result as JSON.
pub async fn execute(store: &Store, command: Command) -> Result<String, RestError> {
    match command {
        Command::Tender(command) => execute_tender(store, command).await,
        Command::Vendor(command) => execute_vendor(store, command).await,
        Command::Bid(BidCommand::Place {
            tender_id,
            vendor_id,
            amount,
        }) => {
            let bid = store
                .bid_service
                .place_bid(PlaceBidInput {
                    bid: bid_api::BidCreate {
                        tender_id,
                        vendor_id,
                        amount,
                    }
                    .into(),
                })
                .await?;
            to_json(&bid_api::Bid::from(bid))
        }
        Command::Assign(assign) => {
            let bid = store
                .award_service
                .settle_award(SettleAwardInput {
                    tender_id: assign.tender_id,
                    vendor_id: assign.vendor_id,
                })
                .await?;
            to_json(&bid_api::Bid::from(bid))
        }
    }
}

async fn execute_tender(store: &Store, command: TenderCommand) -> Result<String, RestError> {
    let service = &store.tender_service;
    match command {
        TenderCommand::Create(tender) => {
            let tender = service
                .create_tender(CreateTenderInput {
                    tender: tender_api::TenderCreate {
                        id:               tender.id,
                        title:            tender.title,
                        description:      tender.description,
                        tender_price:     tender.price,
                        duration_in_days: tender.duration_in_days,
                    }
                    .into(),
                })
                .await?;
            to_json(&tender_api::Tender::from(tender))
        }
        TenderCommand::Remove { id } => {
            let tender = service
                .remove_tender(RemoveTenderInput { tender_id: id })
                .await?;
            to_json(&tender_api::Tender::from(tender))
        }
        TenderCommand::Update(update) => {
            let tender = service
                .update_tender(UpdateTenderInput {
                    tender_id: update.id,
                    update:    tender_api::TenderUpdate {
                        title:            update.title,
                        description:      update.description,
                        tender_price:     update.price,
                        duration_in_days: update.duration_in_days,
                    }
                    .into(),
                })
                .await?;
            to_json(&tender_api::Tender::from(tender))
        }
        TenderCommand::List => tenders_json(service.get_tenders().await?),
        TenderCommand::Get { id } => {
            let tender = service.get_tender(GetTenderInput { tender_id: id }).await?;
            to_json(&tender_api::Tender::from(tender))
        }
        TenderCommand::ListByStatus { status } => tenders_json(
            service
                .get_tenders_by_status(GetTendersByStatusInput { status })
                .await?,
        ),
        TenderCommand::Bids { id } => bids_json(
            store
                .bid_service
                .get_tender_bids(GetTenderBidsInput { tender_id: id })
                .await?,
        ),
    }
}

async fn execute_vendor(store: &Store, command: VendorCommand) -> Result<String, RestError> {
    let service = &store.vendor_service;
    let vendor = match command {
        VendorCommand::Register { name } => {
            service
                .register_vendor(RegisterVendorInput {
                    vendor: vendor_api::VendorCreate { name }.into(),
                })
                .await?
        }
        VendorCommand::List => {
            let vendors = service.get_vendors().await?;
            return to_json(&vendor_api::Vendors {
                items: vendors.into_iter().map(Into::into).collect(),
            });
        }
        VendorCommand::Get { id } => service.get_vendor(GetVendorInput { vendor_id: id }).await?,
        VendorCommand::Deactivate { id } => {
            service
                .deactivate_vendor(DeactivateVendorInput { vendor_id: id })
                .await?
        }
        VendorCommand::Bar { id } => service.bar_vendor(BarVendorInput { vendor_id: id }).await?,
        VendorCommand::Bids { id } => {
            return bids_json(
                store
                    .bid_service
                    .get_vendor_bids(GetVendorBidsInput { vendor_id: id })
                    .await?,
            );
        }
    };
    to_json(&vendor_api::Vendor::from(vendor))
}
