use {
    crate::config::RunOptions,
    sqlx::{
        postgres::PgPoolOptions,
        types::BigDecimal,
        Pool,
        Postgres,
    },
    std::num::ParseIntError,
    time::{
        OffsetDateTime,
        PrimitiveDateTime,
        UtcOffset,
    },
};

pub type DB = Pool<Postgres>;

pub async fn connect(run_options: &RunOptions) -> anyhow::Result<DB> {
    PgPoolOptions::new()
        .max_connections(run_options.database.database_max_connections)
        .connect(&run_options.database.database_url)
        .await
        .map_err(|err| anyhow::anyhow!("Failed to connect to the database: {:?}", err))
}

// Timestamps are stored without time zone, always in UTC.
pub fn to_primitive_date_time(time: OffsetDateTime) -> PrimitiveDateTime {
    let time = time.to_offset(UtcOffset::UTC);
    PrimitiveDateTime::new(time.date(), time.time())
}

pub fn to_offset_date_time(time: PrimitiveDateTime) -> OffsetDateTime {
    time.assume_offset(UtcOffset::UTC)
}

pub fn to_numeric(amount: u64) -> BigDecimal {
    BigDecimal::from(amount)
}

pub fn from_numeric(amount: &BigDecimal) -> anyhow::Result<u64> {
    amount
        .to_string()
        .parse()
        .map_err(|e: ParseIntError| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        std::str::FromStr,
        time::macros::datetime,
    };

    #[test]
    fn test_numeric_conversion() {
        assert_eq!(from_numeric(&to_numeric(1_250_000)).unwrap(), 1_250_000);
        assert!(from_numeric(&BigDecimal::from_str("12.5").unwrap()).is_err());
        assert!(from_numeric(&BigDecimal::from(-3)).is_err());
    }

    #[test]
    fn test_date_time_is_stored_in_utc() {
        let time = datetime!(2024-03-01 12:00 +02:00);
        let stored = to_primitive_date_time(time);
        assert_eq!(stored, datetime!(2024-03-01 10:00));
        assert_eq!(to_offset_date_time(stored), time);
    }
}
