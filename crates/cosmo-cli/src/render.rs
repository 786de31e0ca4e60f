//! Terminal formatting for storefront data.

use colored::Colorize;
use cosmo_application::AddToCartOutcome;
use cosmo_core::cart::CartItem;
use cosmo_core::catalog::{Price, Product};
use cosmo_core::recommendation::RecommendationSet;

pub fn product_row(product: &Product) -> String {
    format!(
        "{:>3}  {:<28} {:>10}  {}",
        product.id,
        product.name.bold(),
        product.price.display_with_symbol().green(),
        product.category.bright_black()
    )
}

pub fn product_list(products: &[&Product]) -> String {
    if products.is_empty() {
        return "No products match.".yellow().to_string();
    }
    products
        .iter()
        .map(|p| product_row(p))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cart(items: &[CartItem], total: Price) -> String {
    if items.is_empty() {
        return "Your cart is empty.".bright_black().to_string();
    }

    let mut lines: Vec<String> = items
        .iter()
        .map(|item| {
            format!(
                "  - {} ({})",
                item.product.name,
                item.product.price.display_with_symbol()
            )
        })
        .collect();
    lines.push(format!(
        "  Total: {}",
        total.display_with_symbol().bold().green()
    ));
    lines.join("\n")
}

pub fn recommendations(set: &RecommendationSet) -> String {
    if set.is_empty() {
        return "No recommendations yet.".bright_black().to_string();
    }

    let heading = if set.is_fallback() {
        "You might also like (offline picks):".yellow()
    } else {
        "Recommended for you:".bright_magenta()
    };

    let mut lines = vec![heading.to_string()];
    lines.extend(set.displayed().iter().map(|item| {
        format!(
            "  * {} {}",
            item.product_name.bold(),
            item.price.display_with_symbol().green()
        )
    }));
    lines.join("\n")
}

/// Confirmation banner and its recommendations.
///
/// Degraded steps never show up here; the fallback heading is the only hint.
pub fn outcome(outcome: &AddToCartOutcome) -> String {
    [
        format!(
            "{} {}",
            "Added to cart:".bright_green(),
            outcome.confirmation.product.name.bold()
        ),
        recommendations(&outcome.confirmation.recommendations),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmo_application::{Confirmation, StepReport, StepStatus, WorkflowStep};
    use cosmo_core::cart::CartStore;
    use cosmo_core::catalog::Catalog;

    #[test]
    fn test_product_row_shows_symbol_price() {
        let catalog = Catalog::builtin();
        let row = product_row(catalog.get(3).unwrap());
        assert!(row.contains("Bluetooth Speaker"));
        assert!(row.contains("$79.99"));
    }

    #[test]
    fn test_cart_total_line() {
        let catalog = Catalog::builtin();
        let mut store = CartStore::new();
        store.add(catalog.get(7).cloned().unwrap());
        store.add(catalog.get(1).cloned().unwrap());

        let rendered = cart(store.items(), store.total());

        assert!(rendered.contains("$319.98"));
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_empty_states() {
        assert!(cart(&[], Price::ZERO).contains("empty"));
        assert!(recommendations(&RecommendationSet::empty()).contains("No recommendations"));
        assert!(product_list(&[]).contains("No products"));
    }

    #[test]
    fn test_recommendations_show_at_most_two() {
        let catalog = Catalog::builtin();
        let items = catalog
            .products()
            .iter()
            .take(5)
            .map(Into::into)
            .collect();
        let rendered = recommendations(&RecommendationSet::remote(items));

        // Heading plus two items
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_degraded_outcome_hides_failure_details() {
        let catalog = Catalog::builtin();
        let product = catalog.get(3).cloned().unwrap();
        let fallback = RecommendationSet::fallback(&catalog, &product.name);
        let mut store = CartStore::new();
        store.add(product.clone());

        let degraded = AddToCartOutcome {
            cart: store.items().to_vec(),
            total: store.total(),
            recommendations: fallback.clone(),
            confirmation: Confirmation {
                product,
                recommendations: fallback,
            },
            steps: vec![
                StepReport::new(WorkflowStep::CommitCart, StepStatus::Completed),
                StepReport::new(
                    WorkflowStep::RecordInteraction,
                    StepStatus::Swallowed(
                        "Network error: POST http://127.0.0.1:5000/record-interaction failed: connection refused"
                            .to_string(),
                    ),
                ),
                StepReport::new(
                    WorkflowStep::ResolveRecommendations,
                    StepStatus::FellBack("Network error (500): boom".to_string()),
                ),
                StepReport::new(WorkflowStep::Confirm, StepStatus::Completed),
            ],
        };

        let text = outcome(&degraded);

        assert!(text.contains("Bluetooth Speaker"));
        assert!(text.contains("offline picks"));
        assert!(!text.contains("Network error"));
        assert!(!text.contains("degraded"));
        assert!(!text.contains("127.0.0.1"));
    }
}
