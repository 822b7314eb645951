//! Lookups against the reference and geocoding services. No session needed.

use clap::Subcommand;
use estace_core::{AppConfig, Coordinates};
use estace_geo::{GeorefClient, NominatimClient};

#[derive(Debug, Subcommand)]
pub enum GeoCommands {
    /// List every province
    Provinces,
    /// List the localities of a province
    Localities {
        /// Province name as returned by `geo provinces`
        province: String,
    },
    /// Resolve an address to coordinates
    Locate {
        address: String,
        locality: String,
        province: String,
    },
    /// Describe the address nearest to a point
    Reverse {
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        #[arg(allow_negative_numbers = true)]
        lon: f64,
    },
}

pub(crate) async fn run(config: &AppConfig, command: GeoCommands) -> anyhow::Result<()> {
    match command {
        GeoCommands::Provinces => {
            let georef = GeorefClient::with_base_url(&config.georef_url, &config.user_agent)?;
            print_places(&georef.list_provinces().await);
        }
        GeoCommands::Localities { province } => {
            let georef = GeorefClient::with_base_url(&config.georef_url, &config.user_agent)?;
            print_places(&georef.list_localities(&province).await);
        }
        GeoCommands::Locate {
            address,
            locality,
            province,
        } => {
            let nominatim =
                NominatimClient::with_base_url(&config.nominatim_url, &config.user_agent)?;
            match nominatim.forward_geocode(&address, &locality, &province).await {
                Some(found) => {
                    println!(
                        "{:.6}, {:.6}",
                        found.coordinates.latitude, found.coordinates.longitude
                    );
                    println!("{}", found.display_name);
                }
                None => println!("no match for \"{address}\""),
            }
        }
        GeoCommands::Reverse { lat, lon } => {
            let nominatim =
                NominatimClient::with_base_url(&config.nominatim_url, &config.user_agent)?;
            match nominatim.reverse_geocode(Coordinates::new(lat, lon)).await {
                Some(result) => {
                    let line = result.address_line();
                    println!("address:  {}", line.as_deref().unwrap_or("\u{2014}"));
                    println!("locality: {}", or_dash(&result.locality));
                    println!("province: {}", or_dash(&result.province));
                }
                None => println!("reverse lookup failed"),
            }
        }
    }
    Ok(())
}

fn print_places(places: &[estace_geo::GeoPlace]) {
    if places.is_empty() {
        println!("no results");
        return;
    }
    for place in places {
        println!("{:<10}{}", place.id, place.name);
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "\u{2014}"
    } else {
        value
    }
}
