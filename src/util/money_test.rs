use super::*;

#[test]
fn whole_amounts_render_without_cents() {
    assert_eq!(format_usd(100.0), "$100");
    assert_eq!(format_usd(0.0), "$0");
    assert_eq!(format_usd(2500.0), "$2500");
}

#[test]
fn fractional_amounts_render_two_decimals() {
    assert_eq!(format_usd(99.5), "$99.50");
    assert_eq!(format_usd(0.25), "$0.25");
}
