//! Risk derivation: baseline risks plus keyword-triggered ones.

use crate::keywords::{BASELINE_RISKS, RISK_KEYWORDS, RiskTemplate};
use crate::model::Risk;

/// Build the risk register for `description`.
///
/// The first three entries are always [`BASELINE_RISKS`]; keyword risks follow
/// in table order. Overlapping keywords are not deduplicated.
#[must_use]
pub fn derive(description: &str) -> Vec<Risk> {
    let haystack = description.to_lowercase();

    BASELINE_RISKS
        .iter()
        .chain(
            RISK_KEYWORDS
                .iter()
                .filter(|(keyword, _)| haystack.contains(keyword))
                .map(|(_, template)| template),
        )
        .map(Risk::from)
        .collect()
}

impl From<&RiskTemplate> for Risk {
    fn from(template: &RiskTemplate) -> Self {
        Self {
            description: template.description.to_string(),
            impact: template.impact,
            likelihood: template.likelihood,
        }
    }
}
