//! Shopping journey - the ordered browse-then-order session flow
//!
//! Four steps run strictly in sequence, with session state threading the
//! selected product id and created order id between them:
//! list products → view product → create order → fetch order, then the
//! sequence repeats until the run winds down.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::Value;

use crate::gateway::{names, GatewayClient, NewOrder};
use crate::session::{
    extract_order_id, extract_product_id, Outcome, SessionState, FALLBACK_PRODUCT_ID,
};

use super::SessionContext;

/// Run one shopping session until the deadline or shutdown.
pub async fn run_session(ctx: SessionContext, mut rng: StdRng) {
    let mut session = SessionState::default();
    tracing::debug!("shopping session started");

    loop {
        run_cycle(&ctx, &mut session, &mut rng).await;
        if ctx.should_stop() {
            break;
        }
        ctx.think(&mut rng).await;
    }

    tracing::debug!("shopping session finished");
}

/// Run one full four-step cycle, recording a measurement per issued step.
///
/// Stops early (without aborting the session) if shutdown arrives between
/// steps; the think-time pause separates consecutive steps.
pub async fn run_cycle(ctx: &SessionContext, session: &mut SessionState, rng: &mut StdRng) {
    let started = Instant::now();
    let outcome = list_products(&ctx.gateway, session, rng).await;
    ctx.record(names::PRODUCTS_LIST, &outcome, started);
    if ctx.should_stop() {
        return;
    }
    ctx.think(rng).await;

    let started = Instant::now();
    let outcome = view_product(&ctx.gateway, session).await;
    ctx.record(names::PRODUCTS_DETAIL, &outcome, started);
    if ctx.should_stop() {
        return;
    }
    ctx.think(rng).await;

    let started = Instant::now();
    let outcome = create_order(&ctx.gateway, session, rng).await;
    ctx.record(names::ORDERS_CREATE, &outcome, started);
    if ctx.should_stop() {
        return;
    }
    ctx.think(rng).await;

    let started = Instant::now();
    match fetch_order(&ctx.gateway, session).await {
        Some(outcome) => ctx.record(names::ORDERS_DETAIL, &outcome, started),
        None => ctx.collector.record_skipped(names::ORDERS_DETAIL),
    }
}

/// GET the catalogue and select a product id for the rest of the cycle.
///
/// An empty catalogue (204/404 or an empty/non-array body) is an expected
/// state, not an error; the session falls back to product id 1.
pub async fn list_products(
    gateway: &GatewayClient,
    session: &mut SessionState,
    rng: &mut StdRng,
) -> Outcome {
    let response = match gateway.list_products().await {
        Ok(response) => response,
        Err(err) => return Outcome::transport(&err),
    };

    match response.status().as_u16() {
        200 => {
            let payload = response.json::<Value>().await.unwrap_or(Value::Null);
            session.product_id = Some(select_product_id(&payload, rng));
            Outcome::Success
        }
        204 | 404 => {
            session.product_id = Some(FALLBACK_PRODUCT_ID);
            Outcome::Success
        }
        _ => Outcome::unexpected_status(response.status()),
    }
}

/// GET the detail of the previously selected product (fallback id 1).
/// A missing product is an acceptable outcome.
pub async fn view_product(gateway: &GatewayClient, session: &SessionState) -> Outcome {
    let product_id = session.product_id.unwrap_or(FALLBACK_PRODUCT_ID);
    let response = match gateway.product_detail(product_id).await {
        Ok(response) => response,
        Err(err) => return Outcome::transport(&err),
    };

    let status = response.status();
    // Drain the body so the pooled connection can be reused.
    let _ = response.bytes().await;
    match status.as_u16() {
        200 | 404 => Outcome::Success,
        _ => Outcome::unexpected_status(status),
    }
}

/// POST a minimal order and remember its id for the follow-up fetch.
///
/// 400/503 are how the services reject duplicate payloads or shed load;
/// both count as graceful degradation, not failures.
pub async fn create_order(
    gateway: &GatewayClient,
    session: &mut SessionState,
    rng: &mut StdRng,
) -> Outcome {
    let order = NewOrder::random(rng);
    let response = match gateway.create_order(&order).await {
        Ok(response) => response,
        Err(err) => return Outcome::transport(&err),
    };

    match response.status().as_u16() {
        200 | 201 => {
            let payload = response.json::<Value>().await.unwrap_or(Value::Null);
            if let Some(order_id) = extract_order_id(&payload) {
                session.order_id = Some(order_id);
            }
            Outcome::Success
        }
        400 | 503 => Outcome::Degraded,
        _ => Outcome::unexpected_status(response.status()),
    }
}

/// GET the created order's status; `None` (no request issued) when the
/// session never obtained an order id.
pub async fn fetch_order(gateway: &GatewayClient, session: &SessionState) -> Option<Outcome> {
    let order_id = session.order_id.as_deref()?;
    let response = match gateway.order_detail(order_id).await {
        Ok(response) => response,
        Err(err) => return Some(Outcome::transport(&err)),
    };

    let status = response.status();
    let _ = response.bytes().await;
    Some(match status.as_u16() {
        200 | 404 => Outcome::Success,
        _ => Outcome::unexpected_status(status),
    })
}

fn select_product_id(payload: &Value, rng: &mut StdRng) -> u64 {
    match payload.as_array() {
        Some(items) if !items.is_empty() => items
            .choose(rng)
            .and_then(extract_product_id)
            .unwrap_or(FALLBACK_PRODUCT_ID),
        _ => FALLBACK_PRODUCT_ID,
    }
}
