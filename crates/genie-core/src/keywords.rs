//! Static keyword tables.
//!
//! Tables are ordered slices: iteration order is output order. The entity and
//! risk tables are maintained independently (a keyword may trigger a risk
//! without naming an entity, e.g. `mobile`).

use crate::enums::Level;

/// Filler prefixes stripped from the start of a lower-cased statement.
/// Checked in order; at most one is removed.
pub const FILLER_PREFIXES: &[&str] = &[
    "the system should ",
    "the app should ",
    "users can ",
    "the user can ",
    "it should ",
    "should ",
];

/// Keyword → responsibilities for entity extraction.
pub const ENTITY_KEYWORDS: &[(&str, &str)] = &[
    (
        "user",
        "Authenticate, view content, perform actions, manage profile",
    ),
    (
        "admin",
        "Manage users, configure system, view reports, moderate content",
    ),
    (
        "customer",
        "Browse products, place orders, track deliveries, leave reviews",
    ),
    (
        "order",
        "Store order details, track status, calculate totals, manage items",
    ),
    (
        "product",
        "Store product info, manage inventory, display details, handle pricing",
    ),
    (
        "system",
        "Process requests, manage data, handle errors, provide services",
    ),
    (
        "database",
        "Store data, handle queries, ensure integrity, manage backups",
    ),
    (
        "payment",
        "Process transactions, validate cards, handle refunds, generate receipts",
    ),
    (
        "report",
        "Aggregate data, generate visualizations, export formats, schedule delivery",
    ),
    (
        "notification",
        "Send alerts, manage preferences, track delivery, handle templates",
    ),
    (
        "project",
        "Store project info, track progress, manage members, handle deadlines",
    ),
    (
        "task",
        "Track status, assign owners, set deadlines, manage dependencies",
    ),
    (
        "file",
        "Store content, manage versions, handle uploads, control access",
    ),
    (
        "message",
        "Store content, track read status, manage threads, handle attachments",
    ),
    (
        "account",
        "Manage credentials, track activity, handle permissions, store preferences",
    ),
    (
        "inventory",
        "Track quantities, manage locations, handle transfers, set alerts",
    ),
    (
        "category",
        "Organize items, manage hierarchy, handle relationships, enable filtering",
    ),
    (
        "review",
        "Store ratings, manage comments, track helpfulness, moderate content",
    ),
    (
        "cart",
        "Manage items, calculate totals, handle quantities, persist session",
    ),
    (
        "shipping",
        "Calculate costs, track packages, manage addresses, handle returns",
    ),
];

/// A risk triple before it is materialized into an owned [`Risk`](crate::Risk).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTemplate {
    pub description: &'static str,
    pub impact: Level,
    pub likelihood: Level,
}

impl RiskTemplate {
    const fn new(description: &'static str, impact: Level, likelihood: Level) -> Self {
        Self {
            description,
            impact,
            likelihood,
        }
    }
}

/// Risks present for every description, in this order.
pub const BASELINE_RISKS: [RiskTemplate; 3] = [
    RiskTemplate::new(
        "Performance issues with large datasets",
        Level::Medium,
        Level::Medium,
    ),
    RiskTemplate::new(
        "Security vulnerabilities in user input handling",
        Level::High,
        Level::Medium,
    ),
    RiskTemplate::new(
        "Insufficient error handling causing poor user experience",
        Level::Medium,
        Level::High,
    ),
];

/// Keyword → risk appended when the keyword occurs in the description.
pub const RISK_KEYWORDS: &[(&str, RiskTemplate)] = &[
    (
        "payment",
        RiskTemplate::new("Payment gateway integration failure", Level::High, Level::Low),
    ),
    (
        "user data",
        RiskTemplate::new(
            "User data privacy and GDPR compliance issues",
            Level::High,
            Level::Medium,
        ),
    ),
    (
        "password",
        RiskTemplate::new(
            "Weak password storage leading to data breach",
            Level::High,
            Level::Medium,
        ),
    ),
    (
        "upload",
        RiskTemplate::new(
            "Malicious file upload vulnerability",
            Level::High,
            Level::Medium,
        ),
    ),
    (
        "api",
        RiskTemplate::new(
            "API rate limiting and availability issues",
            Level::Medium,
            Level::Medium,
        ),
    ),
    (
        "database",
        RiskTemplate::new("Database corruption or data loss", Level::High, Level::Low),
    ),
    (
        "real-time",
        RiskTemplate::new(
            "Real-time synchronization failures",
            Level::Medium,
            Level::Medium,
        ),
    ),
    (
        "notification",
        RiskTemplate::new(
            "Notification delivery failures or spam issues",
            Level::Low,
            Level::Medium,
        ),
    ),
    (
        "third-party",
        RiskTemplate::new(
            "Third-party service dependency and downtime",
            Level::Medium,
            Level::Medium,
        ),
    ),
    (
        "mobile",
        RiskTemplate::new(
            "Cross-platform compatibility issues",
            Level::Medium,
            Level::High,
        ),
    ),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{ENTITY_KEYWORDS, FILLER_PREFIXES, RISK_KEYWORDS};

    #[test]
    fn tables_have_expected_sizes() {
        assert_eq!(ENTITY_KEYWORDS.len(), 20);
        assert_eq!(RISK_KEYWORDS.len(), 10);
        assert_eq!(FILLER_PREFIXES.len(), 6);
    }

    #[test]
    fn keywords_are_unique_and_lowercase() {
        let entity_keys: HashSet<_> = ENTITY_KEYWORDS.iter().map(|(key, _)| *key).collect();
        assert_eq!(entity_keys.len(), ENTITY_KEYWORDS.len());

        let risk_keys: HashSet<_> = RISK_KEYWORDS.iter().map(|(key, _)| *key).collect();
        assert_eq!(risk_keys.len(), RISK_KEYWORDS.len());

        for key in entity_keys.iter().chain(risk_keys.iter()) {
            assert_eq!(*key, key.to_lowercase(), "keyword '{key}' must be lowercase");
        }
    }

    #[test]
    fn filler_prefixes_end_with_space() {
        assert!(FILLER_PREFIXES.iter().all(|prefix| prefix.ends_with(' ')));
    }
}
