use ferrous_doh_domain::client_address::{FAMILY_IPV4, FAMILY_IPV6};
use ferrous_doh_domain::{ClientAddress, DomainError};

#[test]
fn test_ipv4_classified_and_converted() {
    let addr = ClientAddress::parse("192.0.2.1").unwrap();
    assert_eq!(addr, ClientAddress::V4([192, 0, 2, 1]));
    assert_eq!(addr.family(), FAMILY_IPV4);
    assert_eq!(addr.octets(), &[192, 0, 2, 1]);
}

#[test]
fn test_ipv4_octet_out_of_range_rejected() {
    assert!(matches!(
        ClientAddress::parse("256.0.0.1"),
        Err(DomainError::InvalidAddress(_))
    ));
    assert!(ClientAddress::parse("1.2.3.x").is_err());
}

#[test]
fn test_full_ipv6() {
    let addr = ClientAddress::parse("2001:0db8:0000:0000:0000:ff00:0042:8329").unwrap();
    assert_eq!(addr.family(), FAMILY_IPV6);
    assert_eq!(
        addr.octets(),
        &[
            0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0xff, 0x00, 0x00, 0x42, 0x83, 0x29
        ]
    );
}

#[test]
fn test_ipv6_compressed_middle() {
    let addr = ClientAddress::parse("2001:db8::1").unwrap();
    let mut expected = [0u8; 16];
    expected[..4].copy_from_slice(&[0x20, 0x01, 0x0d, 0xb8]);
    expected[15] = 1;
    assert_eq!(addr, ClientAddress::V6(expected));
}

#[test]
fn test_ipv6_leading_and_trailing_compression() {
    let loopback = ClientAddress::parse("::1").unwrap();
    let mut expected = [0u8; 16];
    expected[15] = 1;
    assert_eq!(loopback, ClientAddress::V6(expected));

    let link_local = ClientAddress::parse("fe80::").unwrap();
    let mut expected = [0u8; 16];
    expected[0] = 0xfe;
    expected[1] = 0x80;
    assert_eq!(link_local, ClientAddress::V6(expected));
}

#[test]
fn test_ipv6_rejects_double_compression_and_bad_groups() {
    assert!(ClientAddress::parse("2001::db8::1").is_err());
    assert!(ClientAddress::parse("2001:db8:zzzz::1").is_err());
    assert!(ClientAddress::parse("1:2:3:4:5:6:7").is_err());
    assert!(ClientAddress::parse("1:2:3:4:5:6:7:8:9").is_err());
    assert!(ClientAddress::parse("12345::1").is_err());
}

#[test]
fn test_unclassifiable_inputs() {
    for raw in ["not-an-ip", "", "example.com", "1.2.3", "a:b"] {
        assert!(
            matches!(ClientAddress::parse(raw), Err(DomainError::InvalidAddress(_))),
            "{raw:?} should be rejected"
        );
    }
}
