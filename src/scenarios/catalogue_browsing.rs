//! Catalogue browsing - the read-only weighted mix
//!
//! Each iteration draws one of two stateless steps from a 5:2 weighted
//! table: list the catalogue, or view a random product detail. Unlike the
//! shopping journey, classification here is transport-level only: any HTTP
//! response counts as success, whatever its status.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::Rng;

use crate::gateway::{names, GatewayClient};
use crate::session::Outcome;
use crate::weighted::WeightedTable;

use super::SessionContext;

pub const LIST_WEIGHT: u32 = 5;
pub const DETAIL_WEIGHT: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseStep {
    ListProducts,
    ViewRandomProduct,
}

/// The 5:2 step table every browsing session draws from.
pub fn browse_table() -> WeightedTable<BrowseStep> {
    let mut table = WeightedTable::new();
    table.push(BrowseStep::ListProducts, LIST_WEIGHT);
    table.push(BrowseStep::ViewRandomProduct, DETAIL_WEIGHT);
    table
}

/// Run one browsing session until the deadline or shutdown.
pub async fn run_session(ctx: SessionContext, catalogue_size: u64, mut rng: StdRng) {
    let table = browse_table();
    tracing::debug!("browsing session started");

    loop {
        // The table is non-empty, so choose cannot fail.
        if let Some(&step) = table.choose(&mut rng) {
            run_step(&ctx, step, catalogue_size, &mut rng).await;
        }
        if ctx.should_stop() {
            break;
        }
        ctx.think(&mut rng).await;
    }

    tracing::debug!("browsing session finished");
}

/// Issue and record one browse step.
pub async fn run_step(
    ctx: &SessionContext,
    step: BrowseStep,
    catalogue_size: u64,
    rng: &mut StdRng,
) {
    let started = Instant::now();
    match step {
        BrowseStep::ListProducts => {
            let outcome = list_products(&ctx.gateway).await;
            ctx.record(names::CATALOGUE_BROWSE, &outcome, started);
        }
        BrowseStep::ViewRandomProduct => {
            let product_id = rng.gen_range(1..=catalogue_size.max(1));
            let outcome = view_product(&ctx.gateway, product_id).await;
            ctx.record(names::CATALOGUE_DETAIL, &outcome, started);
        }
    }
}

pub async fn list_products(gateway: &GatewayClient) -> Outcome {
    match gateway.list_products().await {
        Ok(response) => {
            let _ = response.bytes().await;
            Outcome::Success
        }
        Err(err) => Outcome::transport(&err),
    }
}

pub async fn view_product(gateway: &GatewayClient, product_id: u64) -> Outcome {
    match gateway.product_detail(product_id).await {
        Ok(response) => {
            let _ = response.bytes().await;
            Outcome::Success
        }
        Err(err) => Outcome::transport(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn browse_draws_converge_to_five_to_two() {
        let table = browse_table();
        let mut rng = StdRng::seed_from_u64(17);
        let mut list = 0u32;
        let mut detail = 0u32;
        for _ in 0..70_000 {
            match table.choose(&mut rng) {
                Some(BrowseStep::ListProducts) => list += 1,
                Some(BrowseStep::ViewRandomProduct) => detail += 1,
                None => panic!("table is non-empty"),
            }
        }
        let ratio = list as f64 / detail as f64;
        assert!((ratio - 2.5).abs() < 0.1, "ratio {ratio} not near 5:2");
    }

    #[test]
    fn random_detail_ids_stay_within_the_catalogue() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            let id = rng.gen_range(1..=20u64);
            assert!((1..=20).contains(&id));
        }
    }
}
