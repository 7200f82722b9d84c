#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN_WIDTH: usize = 6;
const SEPARATOR: &str = "  ";

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(
    headers: &[&str],
    rows: &[Vec<String>],
    options: TableOptions,
) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    let header_line = header_line.trim_end().to_string();
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let padded = pad(&truncated, *width, looks_numeric(&truncated));
                if options.color {
                    colorize_level(&padded, &truncated)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(SEPARATOR);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Shrink the widest columns, one character at a time, until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * SEPARATOR.len();
    while widths.iter().sum::<usize>() + separators > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.chars().any(|ch| ch.is_ascii_digit())
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | ','))
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// Color a padded cell whose text is a risk level.
fn colorize_level(padded: &str, text: &str) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "high" => "31",
        "medium" => "33",
        "low" => "32",
        _ => return padded.to_string(),
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{TableOptions, render_entity_table};

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn table_alignment_handles_mixed_widths() {
        let headers = ["entity", "responsibilities"];
        let rows = vec![
            vec!["User".to_string(), "Authenticate".to_string()],
            vec![
                "Notification".to_string(),
                "Send alerts, manage preferences".to_string(),
            ],
        ];

        let table = render_entity_table(&headers, &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "entity        responsibilities");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "User          Authenticate");
    }

    #[test]
    fn narrow_terminals_truncate_the_widest_column() {
        let headers = ["risk", "impact"];
        let rows = vec![vec![
            "Scope creep due to unclear or changing requirements".to_string(),
            "High".to_string(),
        ]];

        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.contains('…'));
        assert!(row.chars().count() <= 40);
        assert!(row.ends_with("High"));
    }

    #[test]
    fn levels_are_colored_when_enabled() {
        let headers = ["impact"];
        let rows = vec![vec!["High".to_string()], vec!["Low".to_string()]];
        let table = render_entity_table(
            &headers,
            &rows,
            TableOptions {
                max_width: None,
                color: true,
            },
        );
        assert!(table.contains("\u{1b}[31mHigh"));
        assert!(table.contains("\u{1b}[32mLow"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let headers = ["a", "b"];
        let rows = vec![vec!["x".to_string()]];
        let table = render_entity_table(&headers, &rows, PLAIN);
        assert_eq!(table.lines().nth(2), Some("x       -"));
    }
}
