use std::cmp::Ordering;
use std::io::IsTerminal;
use std::sync::OnceLock;

use genie_core::Level;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

pub mod analysis;
pub mod table;

/// Narrower `COLUMNS` values are ignored; analysis tables are unreadable below it.
const MIN_TERM_WIDTH: usize = 40;

/// Preferred column order for analysis records; unknown keys follow alphabetically.
const COLUMN_ORDER: &[&str] = &["name", "description", "responsibilities", "impact", "likelihood"];

/// Columns holding a [`Level`], shown by label in tables.
const LEVEL_COLUMNS: &[&str] = &["impact", "likelihood"];

static TABLE_OPTIONS: OnceLock<table::TableOptions> = OnceLock::new();

/// Fix the table options for this process from the global flags and terminal.
pub fn init(flags: &GlobalFlags) {
    let color = color_enabled(
        flags,
        std::io::stdout().is_terminal(),
        std::env::var_os("NO_COLOR").is_some(),
    );
    let max_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    let _ = TABLE_OPTIONS.set(table::TableOptions { max_width, color });
}

/// Level coloring only applies to tables; `auto` also needs a terminal.
fn color_enabled(flags: &GlobalFlags, is_tty: bool, no_color: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && !no_color,
    }
}

/// Table options chosen by [`init`], or plain unbounded tables before it runs.
#[must_use]
pub fn table_options() -> table::TableOptions {
    TABLE_OPTIONS.get().copied().unwrap_or(table::TableOptions {
        max_width: None,
        color: false,
    })
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(&serde_json::to_value(value)?, table_options())),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_table(value: &Value, options: table::TableOptions) -> String {
    match value {
        Value::Array(items) => render_rows(items, options),
        Value::Object(map) => {
            let rows = ordered_keys(map.keys())
                .into_iter()
                .map(|key| vec![key.to_string(), cell(key, &map[key])])
                .collect::<Vec<_>>();
            table::render_entity_table(&["key", "value"], &rows, options)
        }
        scalar => table::render_entity_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    }
}

/// Stories, entities and risks arrive here as arrays of strings or objects.
fn render_rows(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    let objects = items.iter().filter_map(Value::as_object).collect::<Vec<_>>();
    if objects.len() != items.len() {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let headers = ordered_keys(objects.iter().flat_map(|map| map.keys()));
    if headers.is_empty() {
        return String::from("(no columns)");
    }

    let rows = objects
        .iter()
        .map(|map| row(map, &headers))
        .collect::<Vec<_>>();
    table::render_entity_table(&headers, &rows, options)
}

fn row(map: &Map<String, Value>, headers: &[&str]) -> Vec<String> {
    headers
        .iter()
        .map(|header| {
            map.get(*header)
                .map_or_else(|| String::from("-"), |value| cell(header, value))
        })
        .collect()
}

/// Distinct keys, known analysis columns first.
fn ordered_keys<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<&'a str> {
    let mut ordered: Vec<&str> = Vec::new();
    for key in keys {
        if !ordered.contains(&key.as_str()) {
            ordered.push(key.as_str());
        }
    }
    ordered.sort_by(|a, b| column_rank(a, b));
    ordered
}

fn column_rank(a: &str, b: &str) -> Ordering {
    let rank = |key: &str| COLUMN_ORDER.iter().position(|known| *known == key);
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn cell(column: &str, value: &Value) -> String {
    if LEVEL_COLUMNS.contains(&column)
        && let Ok(level) = serde_json::from_value::<Level>(value.clone())
    {
        return level.label().to_string();
    }
    value_to_cell(value)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use genie_core::responses::ExportResponse;
    use genie_core::{AnalysisRecord, Entity, Level, Risk};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::{color_enabled, render, render_table};
    use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
    use crate::output::table::TableOptions;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    fn export_response() -> ExportResponse {
        ExportResponse {
            path: "specgenie_user_stories.pdf".to_string(),
            format: "pdf".to_string(),
            stories: 8,
            bytes: 2048,
        }
    }

    fn flags(format: OutputFormat, color: ColorMode, quiet: bool) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            quiet,
            verbose: false,
            project: None,
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&export_response(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["format"], "pdf");
        assert_eq!(parsed["stories"], 8);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&export_response(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["bytes"], 2048);
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&export_response(), OutputFormat::Table).expect("table render should work");
        assert!(out.lines().next().is_some_and(|line| line.contains("key")));
        assert!(out.contains("specgenie_user_stories.pdf"));
    }

    #[test]
    fn risk_tables_follow_analysis_column_order_and_labels() {
        let risks = vec![Risk {
            description: "Outage".to_string(),
            impact: Level::High,
            likelihood: Level::Low,
        }];
        let value = serde_json::to_value(&risks).unwrap();

        let out = render_table(&value, PLAIN);
        let mut lines = out.lines();
        let header = lines.next().expect("header line");
        let columns = header.split_whitespace().collect::<Vec<_>>();
        assert_eq!(columns, vec!["description", "impact", "likelihood"]);
        let row = lines.nth(1).expect("risk row");
        assert!(row.contains("High") && row.ends_with("Low"));
    }

    #[test]
    fn entity_tables_lead_with_the_name() {
        let entities = AnalysisRecord::analyze("Users can pay with a payment card.").entities;
        let value = serde_json::to_value(&entities).unwrap();

        let out = render_table(&value, PLAIN);
        assert!(out.starts_with("name"));
        assert!(out.contains("responsibilities"));
    }

    #[test]
    fn story_lists_render_as_single_column() {
        let stories = AnalysisRecord::analyze("Users can upload files.").stories;
        let value = serde_json::to_value(&stories).unwrap();

        let out = render_table(&value, PLAIN);
        assert!(out.starts_with("value"));
        assert!(out.contains("As a user, I want to upload files"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let entities: Vec<Entity> = Vec::new();
        let out = render(&entities, OutputFormat::Table).expect("table render should work");
        assert_eq!(out, "(no rows)");
    }

    #[rstest]
    #[case(OutputFormat::Table, ColorMode::Always, false, false, true)]
    #[case(OutputFormat::Json, ColorMode::Always, false, false, false)]
    #[case(OutputFormat::Table, ColorMode::Never, true, false, false)]
    #[case(OutputFormat::Table, ColorMode::Auto, true, false, true)]
    #[case(OutputFormat::Table, ColorMode::Auto, false, false, false)]
    #[case(OutputFormat::Table, ColorMode::Auto, true, true, false)]
    fn color_follows_mode_terminal_and_no_color(
        #[case] format: OutputFormat,
        #[case] mode: ColorMode,
        #[case] is_tty: bool,
        #[case] no_color: bool,
        #[case] expected: bool,
    ) {
        assert_eq!(color_enabled(&flags(format, mode, false), is_tty, no_color), expected);
    }

    #[test]
    fn quiet_disables_automatic_color() {
        let quiet = flags(OutputFormat::Table, ColorMode::Auto, true);
        assert!(!color_enabled(&quiet, true, false));
    }
}
