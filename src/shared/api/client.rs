use actix_web::{web, HttpRequest};
use std::net::IpAddr;

/// Reverse proxies whose `X-Forwarded-For` / `Forwarded` headers are honoured.
#[derive(Debug, Clone, Default)]
pub struct TrustedProxies(Vec<IpAddr>);

impl TrustedProxies {
    pub fn new(proxies: Vec<IpAddr>) -> Self {
        Self(proxies)
    }

    fn contains(&self, ip: &IpAddr) -> bool {
        self.0.contains(ip)
    }
}

/// Key identifying the caller for per-client records (lockout, contact log).
///
/// The peer address is used unless the peer is a trusted proxy, in which case
/// the forwarded client address wins. Without registered `TrustedProxies`
/// forwarding headers are ignored. Falls back to `"unknown"` when the peer
/// address is not available, which makes all such callers share a record.
pub fn client_key(req: &HttpRequest) -> String {
    let Some(peer) = req.peer_addr().map(|addr| addr.ip()) else {
        return "unknown".to_string();
    };

    let behind_trusted_proxy = req
        .app_data::<web::Data<TrustedProxies>>()
        .is_some_and(|proxies| proxies.contains(&peer));

    if behind_trusted_proxy {
        if let Some(forwarded) = req.connection_info().realip_remote_addr() {
            return forwarded.to_string();
        }
    }

    peer.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn proxies(ips: &[&str]) -> web::Data<TrustedProxies> {
        web::Data::new(TrustedProxies::new(
            ips.iter().map(|ip| ip.parse().unwrap()).collect(),
        ))
    }

    #[test]
    fn spoofed_forwarded_for_from_untrusted_peer_is_ignored() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.4:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.7"))
            .app_data(proxies(&["10.0.0.1"]))
            .to_http_request();

        assert_eq!(client_key(&req), "198.51.100.4");
    }

    #[test]
    fn forwarded_for_is_ignored_without_trusted_proxies() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.4:5000".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.7"))
            .to_http_request();

        assert_eq!(client_key(&req), "198.51.100.4");
    }

    #[test]
    fn trusted_proxy_forwards_client_address() {
        let req = TestRequest::default()
            .peer_addr("10.0.0.1:443".parse().unwrap())
            .insert_header(("X-Forwarded-For", "203.0.113.7"))
            .app_data(proxies(&["10.0.0.1"]))
            .to_http_request();

        assert_eq!(client_key(&req), "203.0.113.7");
    }

    #[test]
    fn uses_peer_address() {
        let req = TestRequest::default()
            .peer_addr("198.51.100.4:5000".parse().unwrap())
            .to_http_request();

        assert_eq!(client_key(&req), "198.51.100.4");
    }

    #[test]
    fn falls_back_to_unknown() {
        let req = TestRequest::default().to_http_request();

        assert_eq!(client_key(&req), "unknown");
    }
}
