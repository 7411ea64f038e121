use std::collections::{HashMap, HashSet};

use anyhow::Result;
use clap::{Parser, Subcommand};

use fcdb_core::{
    entities::{Address, OrderStatus, Restaurant, RestaurantId},
    repositories::{MenuRepo as _, OrderRepo as _, RestaurantRepo as _},
    usecases,
};
use fcdb_db_sqlite::Connections;

use crate::{cfg::Cfg, gateways};

#[derive(Debug, Parser)]
#[command(
    name = "foodcartdb",
    version,
    about = "Order fulfillment backend of the FoodCart delivery platform"
)]
struct Args {
    /// URL to the database
    #[arg(long, value_name = "DATABASE_URL")]
    db_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve a postal address and print its coordinates
    Resolve { address: String },
    /// Attach ranked fulfillment candidates to all unprocessed orders
    Enrich,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut cfg = Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }

    log::info!(
        "Connecting to SQLite database '{}' (pool size = {})",
        cfg.db_url,
        cfg.db_connection_pool_size
    );
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    fcdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?);

    let geo = gateways::geocoding_gateway(&cfg)?;

    match args.command {
        Command::Resolve { address } => resolve(&connections, &geo, address),
        Command::Enrich => enrich(&connections, &geo),
    }
}

fn resolve(connections: &Connections, geo: &gateways::GeoGw, address: String) -> Result<()> {
    let address = Address::from(address);
    let addresses = HashSet::from([address.clone()]);
    let db = connections.exclusive()?;
    let resolved = usecases::resolve_addresses(&db, geo, &addresses)?;
    match resolved.get(&address) {
        Some(pos) => println!("{}, {}", pos.lat, pos.lng),
        None => anyhow::bail!("could not resolve '{address}'"),
    }
    Ok(())
}

fn enrich(connections: &Connections, geo: &gateways::GeoGw) -> Result<()> {
    let db = connections.exclusive()?;
    let mut orders = db.orders_with_items(OrderStatus::Unprocessed)?;
    let menu_items = db.available_menu_items()?;
    let mut restaurants: HashMap<RestaurantId, Restaurant> = db
        .all_restaurants()?
        .into_iter()
        .map(|restaurant| (restaurant.id, restaurant))
        .collect();

    usecases::enrich_orders_with_restaurants(&db, geo, &mut orders, &menu_items, &mut restaurants)?;

    if orders.is_empty() {
        println!("No unprocessed orders.");
        return Ok(());
    }
    for order in &orders {
        println!(
            "Order {} ({}, {}):",
            order.id, order.address, order.payment_method
        );
        if order.possible_restaurants.is_empty() {
            println!("  no restaurant can fulfill this order");
        }
        for candidate in &order.possible_restaurants {
            match candidate.distance_km {
                Some(km) => println!("  {} - {km:.2} km", candidate.name),
                None => println!("  {} - distance unknown", candidate.name),
            }
        }
    }
    Ok(())
}
