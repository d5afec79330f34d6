// Compliance analyzer: baseline listing completeness.

use crate::models::{ListingData, Severity, Violation};

use super::PartialScore;

/// Ceiling for the summed compliance score.
pub const COMPLIANCE_CEILING: u8 = 30;

pub const DESCRIPTION_MIN_CHARS: usize = 50;
pub const SHORT_DESCRIPTION_POINTS: u32 = 10;

/// Dollar prices below this look like scams or test listings.
pub const PRICE_MIN: f64 = 1.0;
/// Dollar prices above this need extra verification.
pub const PRICE_MAX: f64 = 10_000.0;
pub const LOW_PRICE_POINTS: u32 = 15;
pub const HIGH_PRICE_POINTS: u32 = 8;

pub const MISSING_IMAGE_POINTS: u32 = 12;

/// Score a listing's completeness.
pub fn analyze_compliance(listing: &ListingData) -> PartialScore {
    let mut violations = Vec::new();
    let mut score = 0u32;

    if listing.description.chars().count() < DESCRIPTION_MIN_CHARS {
        score += SHORT_DESCRIPTION_POINTS;
        violations.push(Violation::new(
            "missing_info",
            Severity::Warning,
            "Description too short",
            "Detailed descriptions improve conversions and reduce violations.",
            "Add at least 200 characters describing features, materials, dimensions, and use \
             cases.",
        ));
    }

    if let Some(price) = listing.price {
        if price < PRICE_MIN {
            score += LOW_PRICE_POINTS;
            violations.push(Violation::new(
                "price",
                Severity::Critical,
                "Suspiciously low price",
                "Prices under $1 may be flagged as scams or test listings.",
                "Set a realistic price that covers costs and appears legitimate.",
            ));
        }

        if price > PRICE_MAX {
            score += HIGH_PRICE_POINTS;
            violations.push(Violation::new(
                "price",
                Severity::Warning,
                "Very high price",
                "Extremely high prices may require additional verification.",
                "Ensure pricing is accurate. High-value items may need extra documentation.",
            ));
        }
    }

    if listing.image_url.is_none() {
        score += MISSING_IMAGE_POINTS;
        violations.push(Violation::new(
            "missing_image",
            Severity::Warning,
            "Missing product image",
            "Listings without images perform poorly and may be flagged as incomplete.",
            "Add at least 3-5 high-quality product images.",
        ));
    }

    PartialScore::capped(score, COMPLIANCE_CEILING, violations)
}
