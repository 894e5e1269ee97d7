//! Per-session state and step outcome classification.

use std::time::Duration;

use rand::Rng;
use serde_json::Value;

/// Product id used when the catalogue is empty or a payload has no usable id.
pub const FALLBACK_PRODUCT_ID: u64 = 1;

/// One simulated user's state, owned exclusively by that session's task.
///
/// `product_id` is selected while browsing; `order_id` is only ever set after
/// a create-order step saw a 200/201 response carrying an extractable id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub product_id: Option<u64>,
    pub order_id: Option<String>,
}

/// Classification of one request-response pair.
///
/// `Degraded` covers responses that are not successes at the transport level
/// but are expected service behavior (duplicate rejection, load shedding) and
/// must not pollute the error rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Degraded,
    Failed(String),
}

impl Outcome {
    /// Failure for a status code outside the step's accepted set.
    pub fn unexpected_status(status: reqwest::StatusCode) -> Self {
        Outcome::Failed(format!("unexpected status {}", status.as_u16()))
    }

    /// Failure for a request that never produced a status (connect, timeout).
    pub fn transport(err: &reqwest::Error) -> Self {
        Outcome::Failed(format!("transport error: {err}"))
    }
}

/// Uniformly random pause between steps, in seconds.
#[derive(Debug, Clone, Copy)]
pub struct ThinkTime {
    pub min_secs: f64,
    pub max_secs: f64,
}

impl ThinkTime {
    pub const fn new(min_secs: f64, max_secs: f64) -> Self {
        Self { min_secs, max_secs }
    }

    /// No pause at all; used by tests.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        // Negative bounds clamp to zero; Duration cannot hold them.
        let min = self.min_secs.max(0.0);
        let max = self.max_secs.max(0.0);
        if max <= min {
            return Duration::from_secs_f64(min);
        }
        Duration::from_secs_f64(rng.gen_range(min..=max))
    }
}

/// Read a `productId` field out of one catalogue element.
pub fn extract_product_id(item: &Value) -> Option<u64> {
    item.get("productId").and_then(Value::as_u64)
}

/// Read the `orderId` out of a create-order response body.
///
/// The order service returns integer ids but the gateway has been observed
/// passing through string ids as well; both are kept in text form. Any other
/// JSON type counts as absent.
pub fn extract_order_id(payload: &Value) -> Option<String> {
    match payload.get("orderId")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn extracts_numeric_product_id() {
        assert_eq!(extract_product_id(&json!({"productId": 42})), Some(42));
    }

    #[test]
    fn missing_or_non_integer_product_id_is_absent() {
        assert_eq!(extract_product_id(&json!({"name": "mug"})), None);
        assert_eq!(extract_product_id(&json!({"productId": "oops"})), None);
        assert_eq!(extract_product_id(&json!({"productId": -3})), None);
    }

    #[test]
    fn order_id_accepts_string_and_number_forms() {
        assert_eq!(
            extract_order_id(&json!({"orderId": "abc-1"})),
            Some("abc-1".to_string())
        );
        assert_eq!(
            extract_order_id(&json!({"orderId": 77})),
            Some("77".to_string())
        );
    }

    #[test]
    fn order_id_other_types_count_as_absent() {
        assert_eq!(extract_order_id(&json!({"orderId": null})), None);
        assert_eq!(extract_order_id(&json!({"orderId": [1]})), None);
        assert_eq!(extract_order_id(&json!({"status": "ok"})), None);
    }

    #[test]
    fn think_time_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let think = ThinkTime::new(1.0, 3.0);
        for _ in 0..1000 {
            let d = think.sample(&mut rng);
            assert!(d >= Duration::from_secs(1));
            assert!(d <= Duration::from_secs(3));
        }
    }

    #[test]
    fn zero_think_time_never_sleeps() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(ThinkTime::zero().sample(&mut rng), Duration::ZERO);
    }

    #[test]
    fn negative_think_bounds_clamp_to_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let think = ThinkTime::new(-1.0, 3.0);
        for _ in 0..1000 {
            assert!(think.sample(&mut rng) <= Duration::from_secs(3));
        }
        assert_eq!(
            ThinkTime::new(-5.0, -2.0).sample(&mut rng),
            Duration::ZERO
        );
    }
}
