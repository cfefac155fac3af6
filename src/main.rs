use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use geoip_location::{config::DATABASE_ENV, distance, Location, LookupService};

#[derive(Parser)]
#[command(name = "geoip-location")]
#[command(about = "Locate IP addresses in a MaxMind city database")]
struct Args {
    /// Path to the city database (.mmdb)
    #[arg(long, env = DATABASE_ENV)]
    database: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show country, region, city, coordinates and time zone
    Lookup {
        #[arg(required = true)]
        ips: Vec<String>,
    },
    /// Great-circle distance between two addresses, in kilometers
    Distance { ipa: String, ipb: String },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let opened;
    let db: &LookupService = match args.database {
        Some(path) => {
            info!("Using database {:?}", path);
            opened = LookupService::open(&path)?;
            &opened
        }
        None => LookupService::global()?,
    };

    match args.command {
        Command::Lookup { ips } => {
            let mut locations = Vec::with_capacity(ips.len());
            for ip in &ips {
                locations.push(Location::new(db, ip)?);
            }

            if args.json {
                println!("{}", serde_json::to_string_pretty(&locations)?);
            } else {
                for location in &locations {
                    print_location(location);
                }
            }
        }
        Command::Distance { ipa, ipb } => {
            let km = distance(db, &ipa, &ipb)?;
            if args.json {
                let body = serde_json::json!({ "from": ipa, "to": ipb, "km": km });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{:.2} km", km);
            }
        }
    }

    Ok(())
}

fn print_location(location: &Location<'_>) {
    println!("{}", location.ip());
    println!("  country:   {}", location.country().unwrap_or("-"));
    println!("  region:    {}", location.region().as_deref().unwrap_or("-"));
    println!("  city:      {}", location.city().unwrap_or("-"));
    match (location.latitude(), location.longitude()) {
        (Some(lat), Some(lon)) => println!("  position:  {:.4}, {:.4}", lat, lon),
        _ => println!("  position:  -"),
    }
    println!("  timezone:  {}", location.timezone().as_deref().unwrap_or("-"));
}
