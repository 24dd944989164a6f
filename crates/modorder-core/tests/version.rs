use modorder_core::version::Version;
use modorder_util::errors::ModError;

#[test]
fn parse_three_components() {
    let v = Version::parse("1.2.3").unwrap();
    assert_eq!(v.major, 1);
    assert_eq!(v.minor, 2);
    assert_eq!(v.patch, 3);
}

#[test]
fn parse_optional_patch_defaults_to_zero() {
    let v = Version::parse("1.2").unwrap();
    assert_eq!(v, Version::new(1, 2, 0));
}

#[test]
fn format_is_dot_notation() {
    assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
}

#[test]
fn format_parse_round_trip_canonicalizes() {
    for (input, canonical) in [
        ("0.0.1", "0.0.1"),
        ("1.2", "1.2.0"),
        ("0.18.12", "0.18.12"),
        ("007.01.0", "7.1.0"),
    ] {
        let v = Version::parse(input).unwrap();
        assert_eq!(v.to_string(), canonical, "input {input}");
        assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
    }
}

#[test]
fn rejects_malformed_versions() {
    for input in ["a.b", "1", "1.2.3.4", "", "1..2", "1.2.", " 1.2", "-1.2", "1.2-rc"] {
        let err = Version::parse(input).unwrap_err();
        match err {
            ModError::VersionFormat { input: named } => assert_eq!(named, input),
            other => panic!("unexpected error for {input:?}: {other}"),
        }
    }
}

#[test]
fn rejects_component_overflow() {
    assert!(Version::parse("4294967296.0").is_err());
}

#[test]
fn ordering_is_lexicographic() {
    let v = |s: &str| Version::parse(s).unwrap();
    assert!(v("1.0.0") < v("1.0.1"));
    assert!(v("1.0.9") < v("1.1.0"));
    assert!(v("1.9.9") < v("2.0.0"));
    assert!(v("0.10.0") > v("0.9.0"));
    assert_eq!(v("1.0"), v("1.0.0"));
}

#[test]
fn from_str_matches_parse() {
    let v: Version = "0.15.4".parse().unwrap();
    assert_eq!(v, Version::new(0, 15, 4));
}

#[test]
fn serde_uses_dot_notation() {
    let json = serde_json::to_string(&Version::new(1, 2, 3)).unwrap();
    assert_eq!(json, "\"1.2.3\"");
    let back: Version = serde_json::from_str("\"1.2\"").unwrap();
    assert_eq!(back, Version::new(1, 2, 0));
    assert!(serde_json::from_str::<Version>("\"x\"").is_err());
}
