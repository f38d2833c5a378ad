use cartoffer_shared::OfferKind;

/// `hundredths / 100` rounded to the nearest integer, halves going up
/// (175.5 -> 176, -0.5 -> 0)
pub fn round_half_up_hundredths(hundredths: i128) -> i128 {
    (hundredths + 50).div_euclid(100)
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Cart value after applying one offer, before clamping.
///
/// Non-positive offer values leave the cart untouched so a bad offer can
/// never raise the price.
pub fn discounted_value(kind: OfferKind, cart_value: i64, offer_value: i64) -> i64 {
    if offer_value <= 0 {
        return cart_value;
    }

    match kind {
        OfferKind::FlatAmount => cart_value.saturating_sub(offer_value),
        OfferKind::Percentage => {
            // cart - cart * value / 100, kept exact in i128
            let remaining = i128::from(cart_value) * (100 - i128::from(offer_value));
            saturate(round_half_up_hundredths(remaining))
        }
        OfferKind::Unknown => cart_value,
    }
}

/// Final cart value: the discounted value floored at zero
pub fn apply_discount(kind: OfferKind, cart_value: i64, offer_value: i64) -> i64 {
    discounted_value(kind, cart_value, offer_value).max(0)
}
