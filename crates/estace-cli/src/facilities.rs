//! Read-only facility commands.

use clap::Subcommand;
use estace_api::ApiClient;
use estace_form::FacilityDraft;

#[derive(Debug, Subcommand)]
pub enum FacilityCommands {
    /// List the signed-in owner's facilities
    List,
    /// Show one facility in detail
    Show { id: i64 },
}

pub(crate) async fn run(api: &ApiClient, command: FacilityCommands) -> anyhow::Result<()> {
    crate::require_owner(api).await?;
    match command {
        FacilityCommands::List => {
            let facilities = api.list_my_facilities().await?;
            if facilities.is_empty() {
                println!("no facilities registered");
                return Ok(());
            }
            println!("{:<6}{:<28}{:<22}{:<18}HOURS", "ID", "NAME", "LOCALITY", "DAYS");
            for f in &facilities {
                println!(
                    "{:<6}{:<28}{:<22}{:<18}{}",
                    f.id, f.nombre, f.localidad, f.dias_atencion, f.hra_atencion
                );
            }
        }
        FacilityCommands::Show { id } => {
            let facility = api.get_facility(id).await?;
            let draft = FacilityDraft::from_facility(&facility);
            println!("{} (#{})", facility.nombre, facility.id);
            println!(
                "address:   {}, {}, {}",
                facility.direccion, facility.localidad, facility.provincia
            );
            println!("location:  {:.6}, {:.6}", facility.latitud, facility.longitud);
            println!("weekdays:  {} {}", draft.weekday_range, draft.weekday_hours);
            if draft.weekend_enabled {
                println!("weekend:   {}", draft.weekend_hours);
            } else {
                println!("weekend:   closed");
            }
            println!("holidays:  {}", open_closed(draft.holidays_enabled));
            println!("available: {}", yes_no(draft.available));
            if facility.cantidad_votos > 0 {
                println!(
                    "rating:    {:.1} ({} votes)",
                    facility.puntaje, facility.cantidad_votos
                );
            }
        }
    }
    Ok(())
}

fn open_closed(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
