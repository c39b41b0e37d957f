use serde_json::json;

use crate::route::Ipv6Route;
use crate::settings::Ipv6Settings;

fn settings() -> Ipv6Settings {
    Ipv6Settings::new("2001:db8::2", 64, "2001:db8::1")
}

#[test]
fn fields_are_stored_verbatim() {
    let settings = Ipv6Settings::new("  FD00::2", 255, "garbage");
    assert_eq!(settings.address(), "  FD00::2");
    assert_eq!(settings.address_prefix_length(), 255);
    assert_eq!(settings.default_gateway(), "garbage");
}

#[test]
fn equality_is_structural() {
    assert_eq!(settings(), settings());
    assert_ne!(settings(), Ipv6Settings::new("2001:db8::3", 64, "2001:db8::1"));
    assert_ne!(settings(), Ipv6Settings::new("2001:db8::2", 48, "2001:db8::1"));
    assert_ne!(settings(), Ipv6Settings::new("2001:db8::2", 64, "2001:db8::ff"));
    // no normalization of address text
    assert_ne!(settings(), Ipv6Settings::new("2001:DB8::2", 64, "2001:db8::1"));
}

#[test]
fn display_is_plaintext() {
    assert_eq!(settings().to_string(), "addr 2001:db8::2/64 gw 2001:db8::1");
}

#[test]
fn gateway_for_route() {
    let settings = settings();
    let own = Ipv6Route::new("2001:db8:1::", Some(48), Some("fe80::1".into()));
    let inherited = Ipv6Route::new("2001:db8:2::", Some(48), None);
    assert_eq!(settings.gateway_for(&own), "fe80::1");
    assert_eq!(settings.gateway_for(&inherited), "2001:db8::1");
}

#[test]
fn encoding() {
    let value = serde_json::to_value(settings()).unwrap();
    assert_eq!(value, json!({"address": "2001:db8::2", "addressPrefixLength": 64, "defaultGateway": "2001:db8::1"}));

    let decoded: Ipv6Settings = serde_json::from_value(value.clone()).unwrap();
    assert_eq!(decoded, settings());
    assert_eq!(serde_json::to_value(&decoded).unwrap(), value);
}

#[test]
fn decoding_requires_all_fields() {
    assert!(serde_json::from_value::<Ipv6Settings>(json!({"address": "2001:db8::2", "addressPrefixLength": 64})).is_err());
}
