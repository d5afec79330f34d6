// Remediation: turning an analysis into something a seller can act on.

pub mod simple_fix;
pub mod suggestions;
