//! Login and logout commands

use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use fazendinha::auth;

use super::App;

/// Log in and store the session
pub async fn login_command(app: &mut App, username: &str, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => read_password()?,
    };

    let client = app.client();
    let session = auth::login(
        &client,
        &app.config.login,
        &mut app.store,
        username.trim(),
        &password,
    )
    .await?;

    println!("Welcome to the farm, {}!", session.username);
    Ok(())
}

pub fn logout_command(app: &mut App) -> Result<()> {
    auth::logout(&mut app.store)?;
    println!("Logged out.");
    Ok(())
}

fn read_password() -> Result<String> {
    eprint!("Password: ");
    std::io::stderr().flush().ok();

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read password")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
