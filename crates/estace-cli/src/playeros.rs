use clap::Subcommand;
use estace_api::ApiClient;
use estace_form::filter_playeros;

#[derive(Debug, Subcommand)]
pub enum PlayeroCommands {
    /// List attendants, optionally filtered by name or DNI
    List {
        #[arg(long)]
        search: Option<String>,
    },
}

pub(crate) async fn run(api: &ApiClient, command: PlayeroCommands) -> anyhow::Result<()> {
    crate::require_owner(api).await?;
    match command {
        PlayeroCommands::List { search } => {
            let playeros = api.list_playeros().await?;
            let matches = filter_playeros(&playeros, search.as_deref().unwrap_or_default());
            if matches.is_empty() {
                println!("no playeros found");
                return Ok(());
            }
            println!("{:<8}{:<11}{:<30}{:<24}ACTIVE", "LEGAJO", "DNI", "NAME", "FACILITY");
            for p in matches {
                let name = format!("{} {}", p.nombre, p.apellido);
                let active = if p.activo { "yes" } else { "no" };
                println!(
                    "{:<8}{:<11}{:<30}{:<24}{active}",
                    p.legajo, p.dni, name, p.nombre_estacionamiento
                );
            }
        }
    }
    Ok(())
}
