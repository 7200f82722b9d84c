//! Server-rendered HTML pages.
//!
//! Every piece of user-supplied text passes through [`escape`] before it is
//! interpolated.

use std::fmt::Write as _;

use genie_core::{AnalysisRecord, Level};

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;max-width:960px;margin:2rem auto;padding:0 1rem;color:#222}\
h1{margin-bottom:.25rem}\
.tagline{color:#666;margin-top:0}\
textarea{width:100%;min-height:12rem;font:inherit;padding:.5rem}\
.actions{display:flex;gap:.75rem;margin-top:.75rem}\
button,.button{padding:.5rem 1rem;border:1px solid #345;border-radius:4px;background:#345;color:#fff;text-decoration:none;font:inherit}\
.button.secondary{background:#fff;color:#345}\
table{border-collapse:collapse;width:100%;margin-bottom:1.5rem}\
th,td{border:1px solid #ccc;padding:.4rem .6rem;text-align:left;vertical-align:top}\
.level{font-weight:600}\
.level.high{color:#b00020}\
.level.medium{color:#a66300}\
.level.low{color:#1b6e20}\
blockquote{white-space:pre-wrap;border-left:4px solid #ccc;margin:0;padding:.5rem 1rem;color:#444}";

/// Escape text for element content and double-quoted attribute values.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

/// The description form, optionally pre-filled.
#[must_use]
pub fn index_page(prefill: &str) -> String {
    let body = format!(
        "<h1>SpecGenie</h1>\n\
         <p class=\"tagline\">Turn a plain project description into user stories, entities, and risks.</p>\n\
         <form method=\"post\" action=\"/analyze\">\n\
         <label for=\"description\">Project description</label>\n\
         <textarea id=\"description\" name=\"description\" required \
         placeholder=\"The system should allow users to register and login securely.\">{prefill}</textarea>\n\
         <div class=\"actions\">\n\
         <button type=\"submit\">Generate specification</button>\n\
         <a class=\"button secondary\" href=\"/demo\">Load demo</a>\n\
         </div>\n</form>",
        prefill = escape(prefill),
    );
    layout("SpecGenie", &body)
}

fn level_cell(level: Level) -> String {
    format!(
        "<td class=\"level {class}\">{label}</td>",
        class = level.as_str(),
        label = level.label(),
    )
}

/// Description, stories, entities table, and risk register.
#[must_use]
pub fn results_page(record: &AnalysisRecord) -> String {
    let mut body = String::new();
    body.push_str("<h1>Generated specification</h1>\n");
    let _ = write!(
        body,
        "<h2>Project description</h2>\n<blockquote>{}</blockquote>\n",
        escape(&record.description)
    );

    let _ = write!(body, "<h2>User stories ({})</h2>\n<ol>\n", record.stories.len());
    for story in &record.stories {
        let _ = writeln!(body, "<li>{}</li>", escape(story.as_str()));
    }
    body.push_str("</ol>\n");

    body.push_str(
        "<h2>Entities</h2>\n<table>\n<thead><tr><th>Entity</th><th>Responsibilities</th></tr></thead>\n<tbody>\n",
    );
    for entity in &record.entities {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td></tr>",
            escape(&entity.name),
            escape(&entity.responsibilities)
        );
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str(
        "<h2>Risks</h2>\n<table>\n<thead><tr><th>Risk</th><th>Impact</th><th>Likelihood</th></tr></thead>\n<tbody>\n",
    );
    for risk in &record.risks {
        let _ = writeln!(
            body,
            "<tr><td>{}</td>{}{}</tr>",
            escape(&risk.description),
            level_cell(risk.impact),
            level_cell(risk.likelihood)
        );
    }
    body.push_str("</tbody>\n</table>\n");

    body.push_str(
        "<div class=\"actions\">\n\
         <a class=\"button\" href=\"/export_stories_pdf\">Download stories (PDF)</a>\n\
         <a class=\"button secondary\" href=\"/\">Analyze another project</a>\n\
         </div>",
    );

    layout("SpecGenie - Results", &body)
}

/// Minimal page for error statuses.
#[must_use]
pub fn status_page(status: u16, message: &str) -> String {
    let body = format!(
        "<h1>{status}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to SpecGenie</a></p>",
        escape(message)
    );
    layout(&format!("{status} - SpecGenie"), &body)
}

#[cfg(test)]
mod tests {
    use genie_core::AnalysisRecord;

    use super::*;

    #[test]
    fn escape_covers_markup_characters() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#x27;Jerry&#x27;&lt;/a&gt;"
        );
    }

    #[test]
    fn index_prefill_is_escaped_inside_textarea() {
        let page = index_page("</textarea><script>alert(1)</script>");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;/textarea&gt;&lt;script&gt;"));
    }

    #[test]
    fn results_lists_every_artifact() {
        let record = AnalysisRecord::analyze("Users can pay with a payment card.");
        let page = results_page(&record);

        assert!(page.contains(record.stories[0].as_str()));
        assert!(page.contains("<td>User</td>"));
        assert!(page.contains("Payment gateway integration failure"));
        assert!(page.contains("<td class=\"level high\">High</td>"));
        assert!(page.contains("href=\"/export_stories_pdf\""));
    }

    #[test]
    fn results_escape_the_description() {
        let record = AnalysisRecord::analyze("<b>bold</b> users want things & more");
        let page = results_page(&record);
        assert!(page.contains("&lt;b&gt;bold&lt;/b&gt; users want things &amp; more"));
        assert!(!page.contains("<b>bold</b>"));
    }
}
