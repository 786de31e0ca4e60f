use anyhow::Result;
use cosmo_core::catalog::Catalog;

use crate::render;

pub fn list(search: &str, category: &str) -> Result<()> {
    let catalog = Catalog::builtin();
    println!("{}", render::product_list(&catalog.filter(search, category)));
    Ok(())
}

pub fn categories() -> Result<()> {
    for category in Catalog::builtin().categories() {
        println!("{}", category);
    }
    Ok(())
}
