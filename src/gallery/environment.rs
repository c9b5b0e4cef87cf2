use std::net::Ipv4Addr;

use log::info;
use web_sys::window;

/// Whether the image-transformation endpoint can serve resized variants.
/// Decided once per session and handed down through a context so every
/// thumbnail uses the same URL strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCapability {
    pub transform_available: bool,
}

impl ImageCapability {
    pub fn new(transform_available: bool) -> Self {
        Self { transform_available }
    }

    /// Reads the host from `window.location`. Without a window (or a host)
    /// the endpoint is treated as unavailable.
    pub fn detect() -> Self {
        let host = window()
            .and_then(|w| w.location().hostname().ok())
            .unwrap_or_default();
        let capability = Self::new(transform_endpoint_available(&host));
        info!(
            "Image endpoint for host '{}': {}",
            host,
            if capability.transform_available { "available" } else { "unavailable" }
        );
        capability
    }
}

/// Local development hosts and bare IPs are served by the dev server,
/// which has no image endpoint behind it.
pub fn transform_endpoint_available(host: &str) -> bool {
    let host = host.trim().trim_end_matches('.').to_ascii_lowercase();
    if host.is_empty() {
        return false;
    }
    let is_local = host == "localhost"
        || host.ends_with(".localhost")
        || host.ends_with(".local")
        || host == "0.0.0.0"
        || host == "::1"
        || host == "[::1]";
    if is_local {
        return false;
    }
    host.parse::<Ipv4Addr>().is_err()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_hosts_have_no_endpoint() {
        for host in ["localhost", "127.0.0.1", "0.0.0.0", "[::1]", "bar.local", "app.localhost", "", "192.168.0.12"] {
            assert!(!transform_endpoint_available(host), "{host}");
        }
    }

    #[test]
    fn deployed_hosts_have_endpoint() {
        for host in ["phpbartenders.netlify.app", "www.phpbartenders.com.br", "PHPBARTENDERS.COM."] {
            assert!(transform_endpoint_available(host), "{host}");
        }
    }

    #[test]
    fn capability_is_plain_flag() {
        assert!(ImageCapability::new(true).transform_available);
        assert!(!ImageCapability::new(false).transform_available);
    }
}
