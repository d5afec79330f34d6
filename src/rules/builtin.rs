// Built-in policy lists. Matching is case-insensitive against these values.

/// Forbidden keywords. Each one found in title + description is a critical
/// violation.
///
/// The IP group checks the compound phrase "genuine brand name" only;
/// "genuine" on its own is not a forbidden keyword. Product has not yet
/// confirmed whether "genuine" and "brand name" were meant as separate terms.
pub const FORBIDDEN_KEYWORDS: &[&str] = &[
    // Health claims
    "cure",
    "treat",
    "diagnose",
    "heal",
    "medical grade",
    "fda approved",
    "clinically proven",
    "doctor recommended",
    // Misleading terms
    "guaranteed",
    "risk-free",
    "100% effective",
    "miracle",
    "instant results",
    "overnight",
    "revolutionary",
    // Prohibited items
    "weapon",
    "drug",
    "prescription",
    "tobacco",
    "vape",
    "alcohol",
    "counterfeit",
    "replica",
    "fake",
    // IP violations
    "authentic",
    "original",
    "genuine brand name",
    "official",
    // Dangerous products
    "flammable",
    "toxic",
    "hazardous",
    "explosive",
];

/// Claim patterns, compiled case-insensitively.
pub const RISK_PATTERNS: &[&str] = &[
    // Weight loss claims
    r"\b(lose|lost)\s+\d+\s*(lbs?|pounds|kg)\b",
    // Income guarantees
    r"\b(money|income|profit)\s+guarantee",
    // Absolute safety
    r"\b(100%|totally|completely)\s+(safe|natural|organic)\b",
    // Before/after photos
    r"\b(before|after)\s+(photo|picture|result)",
    // Get-rich language
    r"\bget\s+rich\b",
    r"\b(unlimited|instant)\s+(money|cash|income)",
];

/// Heavily regulated categories, matched as substrings of the listing category.
pub const SUSPICIOUS_CATEGORIES: &[&str] = &[
    "health",
    "supplements",
    "medicine",
    "beauty treatments",
    "weight loss",
    "muscle building",
    "gambling",
    "cryptocurrency",
];
