use anyhow::Result;
use colored::Colorize;
use cosmo_core::config::StorefrontConfig;

use crate::app::AppContext;

/// Prints the configuration after file, environment and flag overrides.
pub fn show(ctx: &AppContext) -> Result<()> {
    println!("# {}", ctx.config_service().path().display());
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    Ok(())
}

pub fn init(ctx: &AppContext) -> Result<()> {
    let service = ctx.config_service();
    if service.path().exists() {
        println!(
            "{} {}",
            "Config already exists:".yellow(),
            service.path().display()
        );
        return Ok(());
    }

    service.save(&StorefrontConfig::default())?;
    println!("{} {}", "Wrote".bright_green(), service.path().display());
    Ok(())
}
