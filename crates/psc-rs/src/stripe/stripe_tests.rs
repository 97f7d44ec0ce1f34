use super::*;

#[test]
fn bytes_roundtrip_without_loss() {
    let payload = vec![0x00, 0xFF, 0x41, 0x80];
    let stripe = StripeData::new(payload.clone());
    assert_eq!(stripe.as_bytes(), payload.as_slice());
    assert_eq!(stripe.len(), 4);
    assert_eq!(stripe.into_bytes(), payload);
}

#[test]
fn valid_utf8_renders_verbatim() {
    let stripe = StripeData::new(b"BBBBB".to_vec());
    assert_eq!(stripe.to_string(), "BBBBB");
}

#[test]
fn invalid_utf8_renders_placeholders_not_errors() {
    let stripe = StripeData::new(vec![0x41, 0xFF, 0xFE, 0x42]);
    let text = stripe.to_text();
    assert!(text.starts_with('A'));
    assert!(text.ends_with('B'));
    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn empty_stripe_is_empty() {
    let stripe = StripeData::new(Vec::new());
    assert!(stripe.is_empty());
    assert_eq!(stripe.to_string(), "");
}
