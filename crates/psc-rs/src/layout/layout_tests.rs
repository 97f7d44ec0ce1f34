use super::*;

#[test]
fn accessors_return_constructor_values() {
    let layout = StripeLayout::new(3, 5, 39);
    assert_eq!(layout.object_count(), 3);
    assert_eq!(layout.stripe_width(), 5);
    assert_eq!(layout.file_size(), 39);
}

#[test]
fn row_width_spans_all_objects() {
    let layout = StripeLayout::new(3, 5, 39);
    assert_eq!(layout.row_width(), 15);
}

#[test]
fn stripe_count_rounds_up_for_trailing_partial_stripe() {
    let layout = StripeLayout::new(3, 5, 39);
    assert_eq!(layout.stripe_count(), 8, "39 bytes in 5-byte stripes is 7 full + 1 partial");
}

#[test]
fn stripe_count_exact_when_aligned() {
    let layout = StripeLayout::new(3, 5, 45);
    assert_eq!(layout.stripe_count(), 9);
}

#[test]
fn zero_stripe_width_yields_zero_stripes() {
    let layout = StripeLayout::new(3, 0, 39);
    assert_eq!(layout.stripe_count(), 0);
    assert_eq!(layout.row_width(), 0);
}

#[test]
fn zero_file_size_yields_zero_stripes() {
    let layout = StripeLayout::new(3, 5, 0);
    assert_eq!(layout.stripe_count(), 0);
}
