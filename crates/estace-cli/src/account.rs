//! `login`, `logout` and `whoami`.

use estace_api::ApiClient;

pub(crate) async fn run_login(api: &ApiClient, legajo: i64, password: &str) -> anyhow::Result<()> {
    let auth = api.login(legajo, password).await?;
    println!("signed in as {} {} ({})", auth.nombre, auth.apellido, auth.tipo);
    Ok(())
}

pub(crate) fn run_logout(api: &ApiClient) {
    api.logout();
    println!("signed out");
}

pub(crate) async fn run_whoami(api: &ApiClient) -> anyhow::Result<()> {
    if !api.session().is_authenticated() {
        println!("not signed in");
        return Ok(());
    }
    let profile = api.get_profile().await?;
    println!("{}", profile.display_name());
    println!("legajo: {}", profile.legajo);
    println!("dni:    {}", profile.dni);
    println!("rol:    {}", profile.tipo);
    Ok(())
}
