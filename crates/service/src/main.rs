use anyhow::{Context, bail};
use catalog_core::Entity;
use catalog_products::ProductDraft;
use catalog_service::{CatalogConfig, InMemoryProductService};

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = CatalogConfig::from_env()?;
    let service = InMemoryProductService::in_memory(&config);

    run_scenario(&service)
}

fn pen(price: f64) -> ProductDraft {
    ProductDraft::new("Pen", price)
        .with_description("blue ink")
        .with_category("stationery")
}

/// Create, reject, reprice, and delete a sample product. Any outcome other
/// than the expected one is an error.
fn run_scenario(service: &InMemoryProductService) -> anyhow::Result<()> {
    let created = service.creator().create(pen(1.50))?;
    let id = created.id().context("created product carries no id")?;
    tracing::info!(product_id = %id, "created sample product");

    let invalid = ProductDraft::new("", 5.0)
        .with_description("x")
        .with_category("y");
    match service.creator().create(invalid) {
        Err(e) => tracing::info!(error = %e, "empty name rejected as expected"),
        Ok(product) => bail!("product with empty name was accepted: {product:?}"),
    }

    match service.updater().update(id, pen(0.0)) {
        Err(e) => tracing::info!(error = %e, "zero price rejected as expected"),
        Ok(product) => bail!("zero price update was accepted: {product:?}"),
    }

    let repriced = service.updater().update(id, pen(2.00))?;
    tracing::info!(product_id = %id, price = repriced.price(), "repriced sample product");
    println!("{}", serde_json::to_string_pretty(&service.retriever().get_all())?);

    if !service.deleter().delete(id) {
        bail!("product {id} could not be deleted");
    }
    if service.deleter().delete(id) {
        bail!("product {id} was deleted twice");
    }
    tracing::info!(product_id = %id, "deleted sample product");

    Ok(())
}
