// demos/resolve_point.rs
//
// Usage: cargo run --example resolve_point -- <stations.csv> <lat> <lon> "<YYYY-MM-DD HH:MM:SS>"
use anyhow::{bail, Context};
use smhi_weather::{parse_timestamp, GeoPoint, StationCatalog, WeatherResolver};
use std::time::Duration;

fn main() -> anyhow::Result<()> {
    // Set RUST_LOG=info (or debug) to see requests and dropped rows
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [stations_path, latitude, longitude, time] = args.as_slice() else {
        bail!("usage: resolve_point <stations.csv> <lat> <lon> \"<YYYY-MM-DD HH:MM:SS>\"");
    };

    let point = GeoPoint::new(
        latitude.parse().context("latitude must be a number")?,
        longitude.parse().context("longitude must be a number")?,
    );
    if !point.is_valid() {
        bail!("({latitude}, {longitude}) is not a valid coordinate");
    }
    let when = parse_timestamp(time)?;

    let catalog = StationCatalog::from_path(stations_path)?;
    println!("Loaded {} stations from {}", catalog.len(), stations_path);

    let resolver = WeatherResolver::builder()
        .timeout(Duration::from_secs(120))
        .build()?;
    let resolution = resolver.resolve(point, when, &catalog)?;

    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}
