//! ResPax Command Line Test Harness
//!
//! One subcommand per remote operation:
//! - ping: connectivity check
//! - availability: tour availability lookup
//! - extras: optional extras lookup
//! - price-range: price schedule lookup
//! - pax-types: passenger type lookup
//! - payment-options: payment option lookup
//! - reserve: compose and submit a reservation

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use respax_client::{RespaxClient, SANDBOX_BASE_URL, SANDBOX_PASSWORD, SANDBOX_USERNAME};
use respax_core::pax::PassengerCounts;
use respax_core::pricing::format_amount;
use respax_core::types::{Ticket, TourQuery, Transfers};
use respax_harness::{FormState, ReservationComposer};

#[derive(Parser)]
#[command(name = "respax")]
#[command(version)]
#[command(about = "ResPax API Test Harness - Exercise the booking sandbox endpoints")]
#[command(long_about = None)]
struct Cli {
    /// Base URL of the ResPax service
    #[arg(long, global = true, default_value = SANDBOX_BASE_URL)]
    base_url: String,

    /// Basic-auth username
    #[arg(long, global = true, default_value = SANDBOX_USERNAME)]
    username: String,

    /// Basic-auth password
    #[arg(long, global = true, default_value = SANDBOX_PASSWORD)]
    password: String,

    #[command(subcommand)]
    command: Commands,
}

/// Tour identity shared by the lookup commands
#[derive(Args)]
struct TourArgs {
    /// Host (agency) id scoping the lookup
    #[arg(long, default_value = "SALES")]
    host: String,

    /// Tour code
    #[arg(long, default_value = "CNRCITY")]
    tour: String,

    /// Fare basis id
    #[arg(long, default_value_t = 144)]
    basis: i64,

    /// Fare subbasis id
    #[arg(long, default_value_t = 206)]
    subbasis: i64,

    /// Departure time id
    #[arg(long, default_value_t = 149)]
    time: i64,

    /// Tour date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl TourArgs {
    fn query(&self) -> TourQuery {
        TourQuery {
            host_id: self.host.clone(),
            tour_code: self.tour.clone(),
            basis_id: self.basis,
            subbasis_id: self.subbasis,
            tour_date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            tour_time_id: self.time,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Ping the server
    #[command(about = "Check connectivity to the ResPax service")]
    Ping,

    /// Check tour availability
    #[command(about = "Check availability for a tour date")]
    Availability {
        #[command(flatten)]
        tour: TourArgs,
    },

    /// List optional extras for a tour
    #[command(about = "List the optional extras for a tour")]
    Extras {
        #[command(flatten)]
        tour: TourArgs,
    },

    /// Look up the price schedule for a tour date
    #[command(name = "price-range", about = "Look up the price schedule for a tour date")]
    PriceRange {
        #[command(flatten)]
        tour: TourArgs,
    },

    /// List the passenger types configured for a host
    #[command(name = "pax-types", about = "List the passenger types for a host")]
    PaxTypes {
        /// Host (agency) id
        #[arg(long, default_value = "SALES")]
        host: String,
    },

    /// List the payment options configured for a host
    #[command(name = "payment-options", about = "List the payment options for a host")]
    PaymentOptions {
        /// Host (agency) id
        #[arg(long, default_value = "SALES")]
        host: String,
    },

    /// Compose and submit a reservation
    #[command(about = "Compose and submit a reservation")]
    Reserve(ReserveArgs),
}

#[derive(Args)]
struct ReserveArgs {
    #[command(flatten)]
    tour: TourArgs,

    /// Number of adult passengers
    #[arg(long, default_value_t = 1)]
    adults: u32,

    /// Number of child passengers
    #[arg(long, default_value_t = 0)]
    children: u32,

    /// Number of family passengers
    #[arg(long, default_value_t = 0)]
    families: u32,

    /// Passenger spec "First,Last[,email[,mobile]]"; repeat once per slot,
    /// adults first, then children, then family members
    #[arg(long = "passenger", value_name = "SPEC")]
    passengers: Vec<String>,

    /// Assign an extra to a passenger slot as "slot:extra_id"; repeatable
    #[arg(long = "extra", value_name = "SLOT:EXTRA_ID")]
    extras: Vec<String>,

    /// Voucher reference
    #[arg(long, default_value = "TEST BOOKING")]
    voucher: String,

    /// Payment option code
    #[arg(long, default_value = "comm-agent/bal-pob")]
    payment_option: String,

    /// General comment forwarded with the booking
    #[arg(long, default_value = "RON JSON REQUEST TEST BOOKING")]
    comment: String,

    /// Agent reference forwarded with the booking
    #[arg(long, default_value = "Test ref")]
    reference: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = RespaxClient::new(&cli.base_url, &cli.username, &cli.password);

    match cli.command {
        Commands::Ping => {
            let response = client.ping().await?;
            print_json(&response)
        }
        Commands::Availability { tour } => {
            let response = client
                .check_availability(&tour.query().availability_request())
                .await?;
            print_json(&response)
        }
        Commands::Extras { tour } => {
            let query = tour.query();
            let response = client
                .tour_extras(
                    &query.host_id,
                    &query.tour_code,
                    query.basis_id,
                    query.subbasis_id,
                    query.tour_time_id,
                )
                .await?;
            print_json(&response)
        }
        Commands::PriceRange { tour } => {
            let response = client
                .price_range(&tour.query().price_range_request())
                .await?;
            print_json(&response)
        }
        Commands::PaxTypes { host } => {
            let response = client.pax_types(&host).await?;
            print_json(&response)
        }
        Commands::PaymentOptions { host } => {
            let response = client.payment_options(&host).await?;
            print_json(&response)
        }
        Commands::Reserve(args) => handle_reserve(&client, args).await,
    }
}

async fn handle_reserve(client: &RespaxClient, args: ReserveArgs) -> Result<()> {
    let counts = PassengerCounts::new(args.adults, args.children, args.families);
    if args.passengers.len() != counts.total() {
        bail!(
            "Expected {} passenger specs, got {}",
            counts.total(),
            args.passengers.len()
        );
    }

    let query = args.tour.query();
    let ticket = Ticket {
        tour_code: query.tour_code.clone(),
        basis_id: query.basis_id.to_string(),
        subbasis_id: query.subbasis_id.to_string(),
        tour_time_id: query.tour_time_id.to_string(),
        tour_date: query.tour_date,
        promo_code: None,
        passengers: vec![],
        transfers: Transfers::default(),
    };

    let mut composer = ReservationComposer::new(&query.host_id, ticket, args.payment_option);
    composer.set_voucher_num(args.voucher);
    composer.set_general_comment(args.comment);
    composer.set_agent_reference(args.reference);
    composer.set_counts(counts);

    for (index, spec) in args.passengers.iter().enumerate() {
        let (first, last, email, mobile) = parse_passenger_spec(spec)
            .with_context(|| format!("Invalid passenger spec: '{spec}'"))?;
        let detail = composer
            .detail_mut(index)
            .context("detail list sized to counts")?;
        detail.first_name = first;
        detail.last_name = last;
        detail.email = email;
        detail.mobile = mobile;
    }

    for spec in &args.extras {
        let (slot, extra_id) =
            parse_extra_spec(spec).with_context(|| format!("Invalid extra spec: '{spec}'"))?;
        if slot >= counts.total() {
            bail!("Extra spec '{spec}' names slot {slot}, but there are only {} passengers", counts.total());
        }
        composer.toggle_extra(slot, extra_id);
    }

    composer.refresh(client).await;
    print_price_summary(&composer);

    composer.submit(client).await;
    match composer.state() {
        FormState::Success(response) => {
            println!("Reservation created");
            print_json(response)
        }
        FormState::Error(message) => bail!("{message}"),
        _ => unreachable!("submit always settles"),
    }
}

fn print_price_summary(composer: &ReservationComposer) {
    let Some(breakdown) = composer.price_breakdown() else {
        // No price range loaded for this query; the server prices the
        // booking authoritatively either way.
        return;
    };

    let counts = composer.counts();
    let symbol = &breakdown.currency_symbol;
    println!("Price summary:");
    println!(
        "  Adults ({}): {}",
        counts.adults,
        format_amount(symbol, breakdown.adults_subtotal)
    );
    if counts.children > 0 {
        println!(
            "  Children ({}): {}",
            counts.children,
            format_amount(symbol, breakdown.children_subtotal)
        );
    }
    if counts.families > 0 {
        println!(
            "  Family members ({}): {}",
            counts.families,
            format_amount(symbol, breakdown.families_subtotal)
        );
    }
    if breakdown.fees > 0.0 {
        println!("  Additional fees: {}", format_amount(symbol, breakdown.fees));
    }
    println!("  Total: {}", format_amount(symbol, breakdown.total));
}

/// Parse "First,Last[,email[,mobile]]" into its four fields.
fn parse_passenger_spec(spec: &str) -> Result<(String, String, String, String)> {
    let mut parts = spec.splitn(4, ',').map(str::trim);
    let first = parts.next().unwrap_or_default();
    let last = parts.next().unwrap_or_default();
    if first.is_empty() || last.is_empty() {
        bail!("expected at least 'First,Last'");
    }
    let email = parts.next().unwrap_or_default();
    let mobile = parts.next().unwrap_or_default();
    Ok((
        first.to_string(),
        last.to_string(),
        email.to_string(),
        mobile.to_string(),
    ))
}

/// Parse "slot:extra_id" into a slot index and an extra id.
fn parse_extra_spec(spec: &str) -> Result<(usize, i64)> {
    let (slot, extra_id) = spec
        .split_once(':')
        .context("expected 'slot:extra_id'")?;
    let slot = slot.trim().parse::<usize>().context("slot must be an index")?;
    let extra_id = extra_id
        .trim()
        .parse::<i64>()
        .context("extra_id must be an integer")?;
    Ok((slot, extra_id))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_passenger_spec_full() {
        let (first, last, email, mobile) =
            parse_passenger_spec("Jane,Doe,jane@example.com,0400000000").unwrap();
        assert_eq!(first, "Jane");
        assert_eq!(last, "Doe");
        assert_eq!(email, "jane@example.com");
        assert_eq!(mobile, "0400000000");
    }

    #[test]
    fn test_parse_passenger_spec_name_only() {
        let (first, last, email, mobile) = parse_passenger_spec("Jane,Doe").unwrap();
        assert_eq!(first, "Jane");
        assert_eq!(last, "Doe");
        assert_eq!(email, "");
        assert_eq!(mobile, "");
    }

    #[test]
    fn test_parse_passenger_spec_missing_last_name() {
        assert!(parse_passenger_spec("Jane").is_err());
        assert!(parse_passenger_spec("Jane,").is_err());
    }

    #[test]
    fn test_parse_extra_spec() {
        assert_eq!(parse_extra_spec("0:42").unwrap(), (0, 42));
        assert_eq!(parse_extra_spec("3 : 7").unwrap(), (3, 7));
        assert!(parse_extra_spec("42").is_err());
        assert!(parse_extra_spec("a:b").is_err());
    }
}
