//! Human-readable rendering of an analysis for `--format table`.

use genie_core::AnalysisRecord;

use crate::cli::root_commands::Section;
use crate::output::table::{TableOptions, render_entity_table};

/// Render the requested sections of `record`, separated by blank lines.
#[must_use]
pub fn render_sections(record: &AnalysisRecord, section: Section, options: TableOptions) -> String {
    let mut blocks = Vec::new();

    if section == Section::All {
        blocks.push(format!("Description\n-----------\n{}", record.description));
    }
    if matches!(section, Section::All | Section::Stories) {
        let rows = record
            .stories
            .iter()
            .enumerate()
            .map(|(index, story)| vec![(index + 1).to_string(), story.to_string()])
            .collect::<Vec<_>>();
        blocks.push(titled(
            &format!("User stories ({})", rows.len()),
            &render_entity_table(&["#", "story"], &rows, options),
        ));
    }
    if matches!(section, Section::All | Section::Entities) {
        let rows = record
            .entities
            .iter()
            .map(|entity| vec![entity.name.clone(), entity.responsibilities.clone()])
            .collect::<Vec<_>>();
        blocks.push(titled(
            &format!("Entities ({})", rows.len()),
            &render_entity_table(&["entity", "responsibilities"], &rows, options),
        ));
    }
    if matches!(section, Section::All | Section::Risks) {
        let rows = record
            .risks
            .iter()
            .map(|risk| {
                vec![
                    risk.description.clone(),
                    risk.impact.to_string(),
                    risk.likelihood.to_string(),
                ]
            })
            .collect::<Vec<_>>();
        blocks.push(titled(
            &format!("Risks ({})", rows.len()),
            &render_entity_table(&["risk", "impact", "likelihood"], &rows, options),
        ));
    }

    blocks.join("\n\n")
}

fn titled(title: &str, body: &str) -> String {
    format!("{title}\n{body}")
}

#[cfg(test)]
mod tests {
    use genie_core::AnalysisRecord;

    use super::render_sections;
    use crate::cli::root_commands::Section;
    use crate::output::table::TableOptions;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn record() -> AnalysisRecord {
        AnalysisRecord::analyze("Users can pay with a payment card. Admins can view reports.")
    }

    #[test]
    fn all_sections_are_rendered_in_order() {
        let out = render_sections(&record(), Section::All, PLAIN);
        let description = out.find("Description").unwrap();
        let stories = out.find("User stories (2)").unwrap();
        let entities = out.find("Entities (").unwrap();
        let risks = out.find("Risks (4)").unwrap();
        assert!(description < stories && stories < entities && entities < risks);
        assert!(out.contains("Payment gateway integration failure"));
    }

    #[test]
    fn single_section_omits_the_others() {
        let out = render_sections(&record(), Section::Risks, PLAIN);
        assert!(out.starts_with("Risks (4)"));
        assert!(!out.contains("User stories"));
        assert!(out.contains("High"));
    }
}
