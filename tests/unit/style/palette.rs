use super::*;
use crate::foundation::random::FixedRandom;

#[test]
fn parse_hex_accepts_short_and_long_forms() {
    assert_eq!(parse_hex("#000").unwrap(), Rgba8::rgb(0, 0, 0));
    assert_eq!(parse_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(parse_hex("#1238").unwrap(), Rgba8::rgba(0x11, 0x22, 0x33, 0x88));
    assert_eq!(parse_hex("E9C46A").unwrap(), Rgba8::rgb(0xe9, 0xc4, 0x6a));
    assert_eq!(
        parse_hex("#01020380").unwrap(),
        Rgba8::rgba(1, 2, 3, 0x80)
    );
}

#[test]
fn parse_hex_rejects_bad_input() {
    assert!(parse_hex("#12").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("#ééé").is_err());
}

#[test]
fn palette_requires_five_entries() {
    assert!(Palette::from_hex(&["#000", "#111"]).is_err());
    assert!(Palette::from_hex(&["#000", "#111", "#222", "#333", "#444"]).is_ok());
}

#[test]
fn fixed_half_picks_median_entry() {
    let p = Palette::from_hex(&["#000", "#111", "#222", "#333", "#444"]).unwrap();
    assert_eq!(p.pick(&mut FixedRandom::new(0.5)), Rgba8::rgb(0x22, 0x22, 0x22));
}

#[test]
fn palettes_roundtrip_through_json() {
    let json = serde_json::to_string(&BUILTIN_PALETTES[0]).unwrap();
    assert_eq!(
        json,
        r##"["#264653","#2a9d8f","#e9c46a","#f4a261","#e76f51"]"##
    );
    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, BUILTIN_PALETTES[0]);
    assert!(serde_json::from_str::<Palette>(r##"["#000"]"##).is_err());
}

#[test]
fn builtins_are_opaque() {
    for p in BUILTIN_PALETTES {
        assert!(p.colors().iter().all(|c| c.a == 255));
    }
}
