use checkout_flow::application::checkout::CheckoutFlow;
use checkout_flow::domain::form::{CheckoutForm, Field};
use checkout_flow::domain::ports::OrderServiceBox;
use checkout_flow::error::CheckoutError;
use checkout_flow::infrastructure::http::HttpOrderService;
use checkout_flow::infrastructure::in_memory::InMemoryOrderService;
use checkout_flow::infrastructure::notifier::ConsoleNotifier;
use checkout_flow::interfaces::csv::cart_reader::CartReader;
use checkout_flow::interfaces::text::render_text;
use checkout_flow::telemetry::setup_tracing;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart CSV file with a `name,quantity,unit_price` header
    cart: PathBuf,

    #[arg(long)]
    full_name: String,

    #[arg(long)]
    phone: String,

    #[arg(long)]
    email: String,

    /// Delivery address (letters and digits only)
    #[arg(long, default_value = "")]
    address: String,

    /// Latitude of the delivery point picked on the map
    #[arg(long, allow_negative_numbers = true, requires = "lng", value_parser = parse_finite)]
    lat: Option<f64>,

    /// Longitude of the delivery point picked on the map
    #[arg(long, allow_negative_numbers = true, requires = "lat", value_parser = parse_finite)]
    lng: Option<f64>,

    /// Base URL of the orders API. Without it the order is only printed.
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout for the orders API, in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

/// Map coordinates must be real numbers; NaN and infinities have no JSON encoding.
fn parse_finite(value: &str) -> std::result::Result<f64, String> {
    let number: f64 = value.parse().map_err(|e| format!("{e}"))?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("{value} is not a finite number"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_tracing();
    let cli = Cli::parse();

    let cart = CartReader::new(File::open(&cli.cart).into_diagnostic()?)
        .into_cart()
        .into_diagnostic()?;

    let dry_run = InMemoryOrderService::new();
    let service: OrderServiceBox = if let Some(endpoint) = &cli.endpoint {
        Box::new(HttpOrderService::new(
            endpoint.as_str(),
            Duration::from_secs(cli.timeout_secs),
        ))
    } else {
        Box::new(dry_run.clone())
    };

    let flow = CheckoutFlow::new(cart, service, Box::new(ConsoleNotifier::stderr()));
    if let (Some(lat), Some(lng)) = (cli.lat, cli.lng) {
        flow.handle_map_click(lat, lng);
    }

    print!("{}", render_text(&flow.view()));

    let form = CheckoutForm::new()
        .with(Field::FullName, cli.full_name)
        .with(Field::Phone, cli.phone)
        .with(Field::Email, cli.email)
        .with(Field::Address, cli.address);

    match flow.submit_form(&form).await {
        Ok(_) => {}
        Err(CheckoutError::Validation(errors)) => {
            for (field, error) in errors.iter() {
                eprintln!("{}: {}", field.label(), error);
            }
            return Err(CheckoutError::Validation(errors)).into_diagnostic();
        }
        Err(e) => return Err(e).into_diagnostic(),
    }

    if cli.endpoint.is_none() {
        for order in dry_run.submissions().await {
            println!("{}", serde_json::to_string_pretty(&order).into_diagnostic()?);
        }
    }

    Ok(())
}
