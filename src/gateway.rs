//! Typed wrapper over the gateway's HTTP routes.
//!
//! Owns the route table and the fixed logical names metrics aggregate under.
//! One `GatewayClient` is built per run and cloned into every session; the
//! underlying `reqwest::Client` pools connections per host.

use chrono::Utc;
use rand::Rng;
use reqwest::Response;
use serde::Serialize;
use url::Url;

use crate::config::LoadProfile;
use crate::error::Result;

/// Logical request names, independent of interpolated path parameters, so
/// metrics aggregate across sessions instead of fragmenting per unique URL.
pub mod names {
    pub const PRODUCTS_LIST: &str = "products:list";
    pub const PRODUCTS_DETAIL: &str = "products:detail";
    pub const ORDERS_CREATE: &str = "orders:create";
    pub const ORDERS_DETAIL: &str = "orders:detail";
    pub const CATALOGUE_BROWSE: &str = "catalogue:browse";
    pub const CATALOGUE_DETAIL: &str = "catalogue:detail";
}

const PRODUCTS_PATH: &str = "/product-service/api/products";
const ORDERS_PATH: &str = "/order-service/api/orders";

/// Minimal valid order payload accepted by the order service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub order_desc: String,
    pub order_date: String,
}

impl NewOrder {
    /// A fresh order with a randomized description and the current UTC time.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            order_desc: format!("loadgen-order-{}", rng.gen_range(1..=10_000)),
            order_date: Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Thin HTTP client for the gateway routes.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    http: reqwest::Client,
    base: Url,
}

impl GatewayClient {
    /// Build a client for `host` with the profile's connection tuning.
    pub fn new(host: &str, profile: &LoadProfile) -> Result<Self> {
        let base = Url::parse(host)?;
        let http = reqwest::Client::builder()
            .connect_timeout(profile.connect_timeout)
            .timeout(profile.request_timeout)
            .pool_max_idle_per_host(profile.pool_max_idle_per_host)
            .pool_idle_timeout(profile.pool_idle_timeout)
            .build()?;
        Ok(Self { http, base })
    }

    fn route(&self, path: &str) -> Url {
        let mut url = self.base.clone();
        url.set_path(path);
        url
    }

    pub async fn list_products(&self) -> reqwest::Result<Response> {
        self.http.get(self.route(PRODUCTS_PATH)).send().await
    }

    pub async fn product_detail(&self, product_id: u64) -> reqwest::Result<Response> {
        let path = format!("{PRODUCTS_PATH}/{product_id}");
        self.http.get(self.route(&path)).send().await
    }

    pub async fn create_order(&self, order: &NewOrder) -> reqwest::Result<Response> {
        // .json() sets Content-Type: application/json.
        self.http
            .post(self.route(ORDERS_PATH))
            .json(order)
            .send()
            .await
    }

    pub async fn order_detail(&self, order_id: &str) -> reqwest::Result<Response> {
        let path = format!("{ORDERS_PATH}/{order_id}");
        self.http.get(self.route(&path)).send().await
    }
}
