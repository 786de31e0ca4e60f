use anyhow::Result;
use cosmo_core::catalog::ProductId;

use crate::app::AppContext;
use crate::render;

/// Runs one add-to-cart action per id against a fresh in-memory cart.
pub async fn add(ctx: &AppContext, ids: &[ProductId], json: bool) -> Result<()> {
    let storefront = ctx.storefront()?;

    for &id in ids {
        let outcome = storefront.add_to_cart(id).await?;
        if json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            println!("{}\n", render::outcome(&outcome));
        }
    }

    if !json {
        println!(
            "{}",
            render::cart(&storefront.cart().await, storefront.cart_total().await)
        );
    }
    Ok(())
}
