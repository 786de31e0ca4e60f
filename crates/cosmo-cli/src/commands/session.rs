use anyhow::Result;
use colored::Colorize;

use crate::app::AppContext;

pub async fn run(ctx: &AppContext, reset: bool) -> Result<()> {
    let repository = ctx.token_repository();

    if reset {
        repository.clear().await?;
        println!("{}", "Session token cleared.".bright_green());
        return Ok(());
    }

    match repository.load_record().await? {
        Some(record) => {
            println!("session_id: {}", record.session_id.bold());
            println!("created_at: {}", record.created_at.to_rfc3339());
        }
        None => println!("{}", "No session token yet; one is minted on the first add.".bright_black()),
    }
    println!("file:       {}", repository.path().display());
    Ok(())
}
