use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let config = Config::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.client_dist_dir, PathBuf::from("client/dist"));
    assert_eq!(config.bind_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_all_keys() {
    let config = Config::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("HOST", "127.0.0.1"),
        ("CLIENT_DIST_DIR", "/srv/habits"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.client_dist_dir, PathBuf::from("/srv/habits"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = Config::from_lookup(lookup(&[("PORT", "  "), ("HOST", "")])).unwrap();
    assert_eq!(config.port, 3000);
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
}

#[test]
fn invalid_port_is_an_error() {
    let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT \"eighty\""));
}

#[test]
fn out_of_range_port_is_an_error() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::InvalidPort { .. })
    ));
}

#[test]
fn invalid_host_is_an_error() {
    assert!(matches!(
        Config::from_lookup(lookup(&[("HOST", "localhost:80")])),
        Err(ConfigError::InvalidHost { .. })
    ));
}
