//! Rate limiting middleware using token bucket algorithm.

use axum::http::Request;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::{
    GovernorError, GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

/// Keys requests by client IP.
///
/// Behind a trusted proxy the IP comes from `X-Forwarded-For`, `X-Real-IP`
/// or `Forwarded`; otherwise from the socket peer address.
#[derive(Debug, Clone, Copy)]
pub struct ClientIpKeyExtractor {
    behind_proxy: bool,
}

impl KeyExtractor for ClientIpKeyExtractor {
    type Key = IpAddr;

    fn name(&self) -> &'static str {
        if self.behind_proxy {
            "forwarded IP"
        } else {
            "peer IP"
        }
    }

    fn extract<T>(&self, req: &Request<T>) -> Result<Self::Key, GovernorError> {
        if self.behind_proxy {
            SmartIpKeyExtractor.extract(req)
        } else {
            PeerIpKeyExtractor.extract(req)
        }
    }

    fn key_name(&self, key: &Self::Key) -> Option<String> {
        Some(key.to_string())
    }
}

pub type RateLimitLayer =
    GovernorLayer<ClientIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// `replenish_secs` is the interval at which one quota token comes back,
/// not a request rate.
fn build(replenish_secs: u64, burst_size: u32, behind_proxy: bool) -> RateLimitLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(replenish_secs)
            .burst_size(burst_size)
            .key_extractor(ClientIpKeyExtractor { behind_proxy })
            .finish()
            .expect("rate limit quota is non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Creates a rate limiter for public read endpoints.
///
/// # Limits
///
/// - **Burst**: 100 requests per client IP
/// - **Replenish**: one request every 2 seconds once the burst is spent
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer(behind_proxy: bool) -> RateLimitLayer {
    build(2, 100, behind_proxy)
}

/// Creates a stricter rate limiter for write and sign-in endpoints.
///
/// # Limits
///
/// - **Burst**: 10 requests per client IP
/// - **Replenish**: one request every second once the burst is spent
///
/// # Example
///
/// ```rust,ignore
/// let contact = Router::new()
///     .route("/contact", post(contact_handler))
///     .layer(rate_limit::secure_layer(behind_proxy));
/// ```
pub fn secure_layer(behind_proxy: bool) -> RateLimitLayer {
    build(1, 10, behind_proxy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layers_build_for_both_key_modes() {
        let _ = layer(false);
        let _ = layer(true);
        let _ = secure_layer(false);
        let _ = secure_layer(true);
    }
}
