use sizetip::{from_wide, rgb, to_wide};

#[test]
fn rgb_packs_as_bgr() {
    assert_eq!(rgb(0x12, 0x34, 0x56), 0x0056_3412);
}

#[test]
fn rgb_pale_yellow() {
    assert_eq!(rgb(255, 255, 224), 0x00E0_FFFF);
}

#[test]
fn rgb_black_is_zero() {
    assert_eq!(rgb(0, 0, 0), 0);
}

#[test]
fn to_wide_appends_nul() {
    let wide = to_wide("Arial");
    assert_eq!(wide.len(), 6);
    assert_eq!(wide.last(), Some(&0));
}

#[test]
fn to_wide_empty_is_just_nul() {
    assert_eq!(to_wide(""), vec![0]);
}

#[test]
fn from_wide_stops_at_nul() {
    let mut buf = [0u16; 16];
    for (slot, unit) in buf.iter_mut().zip("x:1, y:2".encode_utf16()) {
        *slot = unit;
    }
    assert_eq!(from_wide(&buf), "x:1, y:2");
}

#[test]
fn from_wide_without_nul_uses_whole_buffer() {
    let units: Vec<u16> = "w:300".encode_utf16().collect();
    assert_eq!(from_wide(&units), "w:300");
}

#[test]
fn wide_roundtrip_keeps_label() {
    let label = "x:100, y:200, w:300, h:150 (Client w:280, h:130) ";
    assert_eq!(from_wide(&to_wide(label)), label);
}
