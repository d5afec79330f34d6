// Performance analyzer — return rate, rating, and shipping metrics.
//
// A metric is only evaluated when present. Within one metric at most one
// band fires, higher threshold first. Thresholds are strict.

use crate::models::{ListingData, Severity, Violation};

use super::{format_one_decimal, format_percent, PartialScore};

/// Ceiling for the summed performance score.
pub const PERFORMANCE_CEILING: u8 = 40;

pub const RETURN_RATE_CRITICAL: f64 = 0.15;
pub const RETURN_RATE_WARNING: f64 = 0.08;
pub const RETURN_RATE_CRITICAL_POINTS: u32 = 20;
pub const RETURN_RATE_WARNING_POINTS: u32 = 10;

/// Ratings are only trusted with more reviews than this.
pub const RATING_MIN_REVIEWS: u64 = 10;
pub const RATING_CRITICAL: f64 = 3.5;
pub const RATING_WARNING: f64 = 4.0;
pub const RATING_CRITICAL_POINTS: u32 = 25;
pub const RATING_WARNING_POINTS: u32 = 12;

pub const LATE_SHIPMENT_RATE_MAX: f64 = 0.10;
pub const LATE_SHIPMENT_POINTS: u32 = 15;

pub const SHIPPING_DAYS_MAX: u32 = 7;
pub const SHIPPING_DAYS_POINTS: u32 = 8;

/// Score a listing's seller-performance metrics.
pub fn analyze_performance(listing: &ListingData) -> PartialScore {
    let mut violations = Vec::new();
    let mut score = 0u32;

    if let Some(return_rate) = listing.return_rate {
        if return_rate > RETURN_RATE_CRITICAL {
            score += RETURN_RATE_CRITICAL_POINTS;
            violations.push(Violation::new(
                "return_rate",
                Severity::Critical,
                format!("High return rate: {}%", format_percent(return_rate)),
                "Return rates above 15% signal product quality issues or misleading descriptions.",
                "Review product quality, improve descriptions, and consider removing this \
                 listing if returns continue.",
            ));
        } else if return_rate > RETURN_RATE_WARNING {
            score += RETURN_RATE_WARNING_POINTS;
            violations.push(Violation::new(
                "return_rate",
                Severity::Warning,
                format!("Elevated return rate: {}%", format_percent(return_rate)),
                "Return rate is higher than average. Monitor closely.",
                "Check product descriptions match actual product. Consider adding more photos.",
            ));
        }
    }

    let trusted_rating = listing
        .rating
        .filter(|_| listing.review_count.is_some_and(|n| n > RATING_MIN_REVIEWS));
    if let Some(rating) = trusted_rating {
        if rating < RATING_CRITICAL {
            score += RATING_CRITICAL_POINTS;
            violations.push(Violation::new(
                "rating",
                Severity::Critical,
                format!("Low rating: {}/5.0", format_one_decimal(rating)),
                "Ratings below 3.5 can trigger account reviews and hurt visibility.",
                "Address customer complaints, improve product quality, or consider removing \
                 this listing.",
            ));
        } else if rating < RATING_WARNING {
            score += RATING_WARNING_POINTS;
            violations.push(Violation::new(
                "rating",
                Severity::Warning,
                format!("Below average rating: {}/5.0", format_one_decimal(rating)),
                "Ratings below 4.0 may affect account health over time.",
                "Monitor reviews, respond to complaints, and work to improve customer \
                 satisfaction.",
            ));
        }
    }

    if let Some(late_rate) = listing.late_shipment_rate {
        if late_rate > LATE_SHIPMENT_RATE_MAX {
            score += LATE_SHIPMENT_POINTS;
            violations.push(Violation::new(
                "shipping",
                Severity::Critical,
                format!("High late shipment rate: {}%", format_percent(late_rate)),
                "Late shipments above 10% violate TikTok Shop performance standards.",
                "Improve fulfillment speed, adjust handling time, or use faster shipping methods.",
            ));
        }
    }

    if let Some(days) = listing.shipping_days {
        if days > SHIPPING_DAYS_MAX {
            score += SHIPPING_DAYS_POINTS;
            violations.push(Violation::new(
                "shipping_time",
                Severity::Warning,
                format!("Slow shipping: {days} days"),
                "Shipping times over 7 days can lead to customer complaints and cancellations.",
                "Consider using faster shipping methods or partnering with fulfillment services.",
            ));
        }
    }

    PartialScore::capped(score, PERFORMANCE_CEILING, violations)
}
