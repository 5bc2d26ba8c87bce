//! Registrar record to presentation suggestion
//!
//! Purchasable domains get a marketing-style "was/now" price. The original
//! price and save percentage are synthetic: they are drawn from `rng` and have
//! no backing pricing data.

use crate::types::{DomainSuggestion, RawAvailabilityRecord, SuggestionStatus};
use rand::Rng;

/// Currency used when the record carries none
pub const DEFAULT_CURRENCY: &str = "$";

const STANDARD_SAVE_PERCENTAGES: [f64; 5] = [60.0, 70.0, 80.0, 85.0, 90.0];
const PREMIUM_SAVE_PERCENTAGES: [f64; 3] = [10.0, 20.0, 30.0];

/// Transform one registrar record.
///
/// Returns `None` for a purchasable domain whose price is missing; callers
/// drop those records.
pub fn transform<R: Rng + ?Sized>(
    record: &RawAvailabilityRecord,
    rng: &mut R,
) -> Option<DomainSuggestion> {
    let status = SuggestionStatus::from_registrar(&record.status);
    let is_premium = record.flagged_premium() || status == SuggestionStatus::Premium;

    if !status.is_purchasable() {
        return Some(DomainSuggestion {
            id: record.domain.clone(),
            domain_name: record.domain.clone(),
            original_price: None,
            discounted_price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            save_percentage: None,
            status,
            is_premium,
        });
    }

    let price = if record.flagged_premium() {
        record.premium_create_price()
    } else {
        record.product_price()
    };

    let Some(price) = price else {
        tracing::warn!(
            domain = %record.domain,
            status = %status,
            "Price not found for available domain"
        );
        return None;
    };

    let (original_price, save_percentage) = match status {
        SuggestionStatus::Free if !record.flagged_premium() => standard_discount(price, rng),
        SuggestionStatus::Premium => premium_discount(price, rng),
        _ => (0.0, 0.0),
    };

    Some(DomainSuggestion {
        id: record.domain.clone(),
        domain_name: record.domain.clone(),
        original_price: non_zero(round2(original_price)),
        discounted_price: round2(price),
        currency: record
            .product_currency()
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string(),
        save_percentage: non_zero(round2(save_percentage)),
        status,
        is_premium,
    })
}

fn standard_discount<R: Rng + ?Sized>(price: f64, rng: &mut R) -> (f64, f64) {
    let save = STANDARD_SAVE_PERCENTAGES[rng.gen_range(0..STANDARD_SAVE_PERCENTAGES.len())];
    (round2(price / (1.0 - save / 100.0)), save)
}

fn premium_discount<R: Rng + ?Sized>(price: f64, rng: &mut R) -> (f64, f64) {
    let mut save = PREMIUM_SAVE_PERCENTAGES[rng.gen_range(0..PREMIUM_SAVE_PERCENTAGES.len())];
    let mut original = round2(price / (1.0 - save / 100.0));

    // Rounding can swallow the markup on very small prices.
    if original <= price {
        original = price * (1.1 + rng.gen_range(0.0..0.4));
        save = (original - price) / original * 100.0;
    }

    (original, save)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Zero and non-finite amounts are not shown
fn non_zero(value: f64) -> Option<f64> {
    (value.is_finite() && value != 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn record(value: serde_json::Value) -> RawAvailabilityRecord {
        serde_json::from_value(value).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_taken_has_no_pricing() {
        let suggestion = transform(&record(json!({ "domain": "a.com", "status": "taken" })), &mut rng()).unwrap();
        assert_eq!(suggestion.status, SuggestionStatus::Taken);
        assert_eq!(suggestion.discounted_price, 0.0);
        assert_eq!(suggestion.original_price, None);
        assert_eq!(suggestion.save_percentage, None);
        assert_eq!(suggestion.currency, DEFAULT_CURRENCY);
        assert_eq!(suggestion.id, "a.com");
        assert_eq!(suggestion.domain_name, "a.com");
        assert!(!suggestion.is_premium);
    }

    #[test]
    fn test_active_and_unknown_statuses() {
        let active = transform(&record(json!({ "domain": "a.com", "status": "active" })), &mut rng()).unwrap();
        assert_eq!(active.status, SuggestionStatus::Taken);

        let odd = transform(
            &record(json!({ "domain": "a.com", "status": "reserved", "is_premium": true })),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(odd.status, SuggestionStatus::Unavailable);
        assert!(odd.is_premium);
        assert_eq!(odd.discounted_price, 0.0);
    }

    #[test]
    fn test_null_status_is_unavailable() {
        let suggestion = transform(&record(json!({ "domain": "odd.com", "status": null })), &mut rng()).unwrap();
        assert_eq!(suggestion.status, SuggestionStatus::Unavailable);
        assert_eq!(suggestion.domain_name, "odd.com");
        assert_eq!(suggestion.original_price, None);
    }

    #[test]
    fn test_free_domain_gets_standard_discount() {
        let raw = record(json!({
            "domain": "a.com",
            "status": "free",
            "price": { "product": { "price": 10, "currency": "$" } }
        }));

        for seed in 0..50 {
            let suggestion = transform(&raw, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(suggestion.status, SuggestionStatus::Free);
            assert_eq!(suggestion.discounted_price, 10.0);
            assert_eq!(suggestion.currency, "$");

            let save = suggestion.save_percentage.unwrap();
            assert!(STANDARD_SAVE_PERCENTAGES.contains(&save), "unexpected save {}", save);
            assert_eq!(suggestion.original_price, Some(round2(10.0 / (1.0 - save / 100.0))));
        }
    }

    #[test]
    fn test_missing_price_yields_none() {
        assert!(transform(&record(json!({ "domain": "a.com", "status": "free" })), &mut rng()).is_none());

        let non_numeric = record(json!({
            "domain": "a.com",
            "status": "free",
            "price": { "product": { "price": "9.99" } }
        }));
        assert!(transform(&non_numeric, &mut rng()).is_none());
    }

    #[test]
    fn test_premium_uses_create_price() {
        let raw = record(json!({
            "domain": "gold.io",
            "status": "premium",
            "is_premium": true,
            "premium": { "price": { "create": 2500.0 } },
            "price": { "product": { "price": 30.0, "currency": "EUR" } }
        }));

        for seed in 0..50 {
            let suggestion = transform(&raw, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(suggestion.status, SuggestionStatus::Premium);
            assert!(suggestion.is_premium);
            assert_eq!(suggestion.discounted_price, 2500.0);
            assert_eq!(suggestion.currency, "EUR");

            let save = suggestion.save_percentage.unwrap();
            assert!(PREMIUM_SAVE_PERCENTAGES.contains(&save));
            assert!(suggestion.original_price.unwrap() > suggestion.discounted_price);
        }
    }

    #[test]
    fn test_premium_original_always_above_price() {
        for (seed, price) in [1.0, 1.5, 4.99, 12.0, 99.99, 1000.0].into_iter().enumerate() {
            let raw = record(json!({
                "domain": "p.com",
                "status": "premium",
                "price": { "product": { "price": price } }
            }));
            let suggestion = transform(&raw, &mut StdRng::seed_from_u64(seed as u64)).unwrap();
            assert!(suggestion.original_price.unwrap() > suggestion.discounted_price);
            assert!(suggestion.save_percentage.unwrap() > 0.0);
            assert!(suggestion.is_premium);
        }
    }

    #[test]
    fn test_premium_markup_fallback_for_tiny_price() {
        // 0.01 / 0.9 rounds back to 0.01, forcing the fallback markup.
        for seed in 0..20 {
            let (original, save) = premium_discount(0.01, &mut StdRng::seed_from_u64(seed));
            assert!(original > 0.01);
            assert!(save > 0.0 && save < 100.0);
        }
    }

    #[test]
    fn test_free_but_flagged_premium_has_no_discount() {
        let raw = record(json!({
            "domain": "rare.ai",
            "status": "free",
            "is_premium": true,
            "premium": { "price": { "create": 800 } }
        }));
        let suggestion = transform(&raw, &mut rng()).unwrap();
        assert_eq!(suggestion.status, SuggestionStatus::Free);
        assert!(suggestion.is_premium);
        assert_eq!(suggestion.discounted_price, 800.0);
        assert_eq!(suggestion.original_price, None);
        assert_eq!(suggestion.save_percentage, None);
        assert_eq!(suggestion.currency, DEFAULT_CURRENCY);
    }

    #[test]
    fn test_zero_price_hides_original() {
        let raw = record(json!({
            "domain": "zero.com",
            "status": "free",
            "price": { "product": { "price": 0 } }
        }));
        let suggestion = transform(&raw, &mut rng()).unwrap();
        assert_eq!(suggestion.discounted_price, 0.0);
        assert_eq!(suggestion.original_price, None);
    }

    #[test]
    fn test_same_seed_same_output() {
        let raw = record(json!({
            "domain": "a.com",
            "status": "free",
            "price": { "product": { "price": 12.49, "currency": "$" } }
        }));
        let first = transform(&raw, &mut StdRng::seed_from_u64(42));
        let second = transform(&raw, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }
}
