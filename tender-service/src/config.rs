use {
    crate::{
        api::RestError,
        kernel::entities::{
            BidAmount,
            TenderId,
            TenderPrice,
            VendorId,
        },
    },
    anyhow::Result,
    clap::{
        crate_authors,
        crate_description,
        crate_name,
        crate_version,
        Args,
        Parser,
        Subcommand,
    },
    std::fs,
};

mod database;

// `Options` is a structured definition to provide clean command-line args for the tender service.
#[derive(Parser, Debug)]
#[command(name = crate_name!())]
#[command(author = crate_authors!())]
#[command(about = crate_description!())]
#[command(version = crate_version!())]
pub struct Options {
    #[command(flatten)]
    pub run: RunOptions,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Clone, Debug)]
pub struct RunOptions {
    /// Database Options
    #[command(flatten)]
    pub database: database::Options,

    #[command(flatten)]
    pub config: ConfigOptions,
}

#[derive(Args, Clone, Debug)]
#[command(next_help_heading = "Config Options")]
#[group(id = "Config")]
pub struct ConfigOptions {
    /// Path to an optional configuration file. Defaults are used when it is not provided.
    #[arg(long = "config")]
    #[arg(env = "TENDER_CONFIG")]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage tenders.
    #[command(subcommand)]
    Tender(TenderCommand),
    /// Manage vendors.
    #[command(subcommand)]
    Vendor(VendorCommand),
    /// Place and inspect bids.
    #[command(subcommand)]
    Bid(BidCommand),
    /// Assign a tender to a vendor that bid on it.
    Assign(AssignOptions),
}

#[derive(Subcommand, Debug)]
pub enum TenderCommand {
    /// Create a new open tender.
    Create(TenderCreateOptions),
    /// Remove an existing tender.
    Remove {
        #[arg(long = "id")]
        id: TenderId,
    },
    /// Overwrite the descriptive fields of a tender.
    Update(TenderUpdateOptions),
    /// List all tenders.
    List,
    /// Get a tender by its id.
    Get {
        #[arg(long = "id")]
        id: TenderId,
    },
    /// List tenders with the given status (OPEN, BOOKED or CLOSED).
    ListByStatus {
        #[arg(long = "status")]
        status: String,
    },
    /// List the bids placed on a tender.
    Bids {
        #[arg(long = "id")]
        id: TenderId,
    },
}

#[derive(Args, Debug)]
pub struct TenderCreateOptions {
    /// Optional id. Creation fails if a tender with this id already exists.
    #[arg(long = "id")]
    pub id:               Option<TenderId>,
    #[arg(long = "title")]
    pub title:            String,
    #[arg(long = "description")]
    pub description:      String,
    /// Price in the smallest currency unit.
    #[arg(long = "price")]
    pub price:            TenderPrice,
    #[arg(long = "duration-in-days")]
    pub duration_in_days: u32,
}

#[derive(Args, Debug)]
pub struct TenderUpdateOptions {
    #[arg(long = "id")]
    pub id:               TenderId,
    #[arg(long = "title")]
    pub title:            Option<String>,
    #[arg(long = "description")]
    pub description:      Option<String>,
    /// Price in the smallest currency unit.
    #[arg(long = "price")]
    pub price:            Option<TenderPrice>,
    #[arg(long = "duration-in-days")]
    pub duration_in_days: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum VendorCommand {
    /// Register a new active and eligible vendor.
    Register {
        #[arg(long = "name")]
        name: String,
    },
    /// List all vendors.
    List,
    /// Get a vendor by its id.
    Get {
        #[arg(long = "id")]
        id: VendorId,
    },
    /// Deactivate a vendor account.
    Deactivate {
        #[arg(long = "id")]
        id: VendorId,
    },
    /// Bar a vendor from being assigned tenders.
    Bar {
        #[arg(long = "id")]
        id: VendorId,
    },
    /// List the bids placed by a vendor.
    Bids {
        #[arg(long = "id")]
        id: VendorId,
    },
}

#[derive(Subcommand, Debug)]
pub enum BidCommand {
    /// Place a bid on an open tender.
    Place {
        #[arg(long = "tender-id")]
        tender_id: TenderId,
        #[arg(long = "vendor-id")]
        vendor_id: VendorId,
        /// Amount in the smallest currency unit.
        #[arg(long = "amount")]
        amount:    BidAmount,
    },
}

#[derive(Args, Debug)]
pub struct AssignOptions {
    #[arg(long = "tender-id")]
    pub tender_id: TenderId,
    #[arg(long = "vendor-id")]
    pub vendor_id: VendorId,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Config {
    #[serde(default)]
    pub listing: ListingConfig,
}

impl Config {
    pub fn load(path: &str) -> Result<Config> {
        // Open and read the YAML file
        let yaml_content = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&yaml_content)?;
        Ok(config)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListingConfig {
    /// Report an empty listing as an error instead of returning no items.
    #[serde(default = "default_empty_result_is_error")]
    pub empty_result_is_error: bool,
}

fn default_empty_result_is_error() -> bool {
    true
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            empty_result_is_error: default_empty_result_is_error(),
        }
    }
}

impl ListingConfig {
    /// Applies the empty listing policy to the result of a list operation.
    pub fn check_listing<T>(
        &self,
        items: Vec<T>,
        empty_message: impl FnOnce() -> String,
    ) -> Result<Vec<T>, RestError> {
        if items.is_empty() && self.empty_result_is_error {
            return Err(RestError::EmptyResult(empty_message()));
        }
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        clap::CommandFactory,
    };

    #[test]
    fn test_cli_definition_is_consistent() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_parse_assign_command() {
        let options = Options::parse_from([
            "tender-service",
            "--database-url",
            "postgres://localhost/tenders",
            "assign",
            "--tender-id",
            "1",
            "--vendor-id",
            "10",
        ]);
        match options.command {
            Command::Assign(assign) => {
                assert_eq!(assign.tender_id, 1);
                assert_eq!(assign.vendor_id, 10);
            }
            command => panic!("Unexpected command {:?}", command),
        }
        assert_eq!(options.run.database.database_max_connections, 5);
    }

    #[test]
    fn test_config_defaults_to_empty_result_error() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert!(config.listing.empty_result_is_error);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_allows_empty_listings() {
        let config: Config =
            serde_yaml::from_str("listing:\n  empty_result_is_error: false\n").unwrap();
        assert!(!config.listing.empty_result_is_error);
        assert_eq!(
            config
                .listing
                .check_listing(Vec::<u32>::new(), || "No items".to_string()),
            Ok(vec![])
        );
    }

    #[test]
    fn test_empty_listing_is_an_error_by_default() {
        let listing = ListingConfig::default();
        assert_eq!(
            listing.check_listing(Vec::<u32>::new(), || "No items".to_string()),
            Err(RestError::EmptyResult("No items".to_string()))
        );
        assert_eq!(
            listing.check_listing(vec![1], || "No items".to_string()),
            Ok(vec![1])
        );
    }
}
