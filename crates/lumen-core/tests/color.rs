// File: crates/lumen-core/tests/color.rs
// Purpose: Hex color parsing and channel accessors.

use lumen_core::{Argb, ColorParseError};

#[test]
fn parses_opaque_and_translucent_hex() {
    assert_eq!(Argb::parse_hex("#3B82F6"), Ok(Argb(0xFF3B_82F6)));
    assert_eq!("#803B82F6".parse::<Argb>(), Ok(Argb(0x803B_82F6)));
    let c = Argb::parse_hex("#ff102030").expect("valid");
    assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0xFF, 0x10, 0x20, 0x30));
    assert_eq!(Argb::from_argb(0xFF, 0x10, 0x20, 0x30), c);
}

#[test]
fn rejects_malformed_input() {
    assert_eq!(Argb::parse_hex("3B82F6"), Err(ColorParseError::MissingHash("3B82F6".into())));
    assert_eq!(Argb::parse_hex("#3B82G6"), Err(ColorParseError::InvalidDigits("#3B82G6".into())));
    assert_eq!(Argb::parse_hex("#+B82F6"), Err(ColorParseError::InvalidDigits("#+B82F6".into())));
    assert_eq!(Argb::parse_hex("#FFF"), Err(ColorParseError::InvalidLength(3)));
    assert!(Argb::parse_hex("#").is_err());
}

#[test]
fn error_messages_name_the_input() {
    let err = Argb::parse_hex("red").unwrap_err();
    assert_eq!(err.to_string(), "color 'red' must start with '#'");
}
