use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = SiteConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.addr.port(), 3000);
    assert_eq!(cfg.addr.ip(), DEFAULT_BIND_ADDR);
}

#[test]
fn reads_port_and_bind_addr() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.addr, "127.0.0.1:8080".parse().unwrap());
}

#[test]
fn accepts_ipv6_bind_addr() {
    let cfg = SiteConfig::from_lookup(lookup(&[("BIND_ADDR", "::1")])).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = SiteConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn parse_port_trims_whitespace() {
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
}

#[test]
fn parse_port_rejects_garbage_zero_and_overflow() {
    assert_eq!(parse_port(Some("abc")), Err(ConfigError::InvalidPort("abc".into())));
    assert_eq!(parse_port(Some("0")), Err(ConfigError::InvalidPort("0".into())));
    assert!(parse_port(Some("70000")).is_err());
}

#[test]
fn parse_bind_addr_rejects_hostnames() {
    assert_eq!(parse_bind_addr(Some("localhost")), Err(ConfigError::InvalidBindAddr("localhost".into())));
}

#[test]
fn errors_name_the_offending_variable() {
    assert!(ConfigError::InvalidPort("x".into()).to_string().starts_with("invalid PORT"));
    assert!(ConfigError::InvalidBindAddr("x".into()).to_string().starts_with("invalid BIND_ADDR"));
}
