use super::*;

#[test]
fn parse_hex_accepts_short_long_and_alpha_forms() {
    assert_eq!(Rgba8::parse_hex("#fff").unwrap(), Rgba8::WHITE);
    assert_eq!(
        Rgba8::parse_hex("#102030").unwrap(),
        Rgba8::rgb(0x10, 0x20, 0x30)
    );
    assert_eq!(
        Rgba8::parse_hex("10203040").unwrap(),
        Rgba8::rgba(0x10, 0x20, 0x30, 0x40)
    );
}

#[test]
fn parse_hex_rejects_garbage() {
    assert!(Rgba8::parse_hex("#12").is_err());
    assert!(Rgba8::parse_hex("#gg0000").is_err());
    assert!(Rgba8::parse_hex("").is_err());
}

#[test]
fn hex_serde_roundtrip_keeps_alpha() {
    let c = Rgba8::rgba(1, 2, 3, 4);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#01020304\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn premul_scales_channels_by_alpha() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 255, 255, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(Rgba8::rgba(200, 100, 0, 128).to_premul(), [100, 50, 0, 128]);
}
