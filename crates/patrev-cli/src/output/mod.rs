use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Responses are objects whose array fields are the interesting part
/// (`{"projects": [...]}`); those arrays become their own tables under a
/// heading, scalar fields become a key/value table.
fn render_table(value: &Value) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(array_table(items)),
        Value::Object(map) => Ok(object_tables(map)),
        scalar => Ok(table::render(&["value"], &[vec![cell(scalar)]], table_options())),
    }
}

fn object_tables(map: &Map<String, Value>) -> String {
    let mut sections = Vec::new();

    let scalars = map
        .iter()
        .filter(|(_, value)| !value.is_array())
        .map(|(key, value)| vec![key.clone(), cell(value)])
        .collect::<Vec<_>>();
    if !scalars.is_empty() {
        sections.push(table::render(&["key", "value"], &scalars, table_options()));
    }

    for (key, value) in map {
        if let Value::Array(items) = value {
            sections.push(format!("{key}:\n{}", array_table(items)));
        }
    }

    sections.join("\n\n")
}

fn array_table(items: &[Value]) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![cell(item)]).collect::<Vec<_>>();
        return table::render(&["value"], &rows, table_options());
    }

    // Column order follows the first row, with keys only seen later appended.
    let mut headers = Vec::<&str>::new();
    for key in items.iter().filter_map(Value::as_object).flat_map(Map::keys) {
        if !headers.contains(&key.as_str()) {
            headers.push(key);
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render(&headers, &rows, table_options())
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::String(v) => v.clone(),
        Value::Object(map) if map.contains_key("name") && map.contains_key("url") => {
            // Artifacts read better as "name <url>".
            format!(
                "{} <{}>",
                map.get("name").and_then(Value::as_str).unwrap_or_default(),
                map.get("url").and_then(Value::as_str).unwrap_or_default()
            )
        }
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde_json::json;

    use super::{cell, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct ProjectList {
        projects: Vec<serde_json::Value>,
    }

    fn sample() -> ProjectList {
        ProjectList {
            projects: vec![
                json!({"id": "p1", "name": "Widget", "status": "pending"}),
                json!({"id": "p2", "name": "Gadget", "status": "completed", "description": "d"}),
            ],
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&sample(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["projects"][1]["id"], "p2");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&sample(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_names_array_sections() {
        let out = render(&sample(), OutputFormat::Table).expect("table render should work");
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("projects:"));
        let header = lines.next().expect("header line");
        assert!(header.starts_with("id"));
        assert!(header.contains("description"));
        assert!(out.contains("Gadget"));
    }

    #[test]
    fn empty_array_renders_placeholder() {
        let out = render(&ProjectList { projects: vec![] }, OutputFormat::Table)
            .expect("table render should work");
        assert_eq!(out, "projects:\n(no rows)");
    }

    #[test]
    fn artifact_cells_show_name_and_url() {
        assert_eq!(
            cell(&json!({"name": "spec.docx", "url": "https://x/spec.docx"})),
            "spec.docx <https://x/spec.docx>"
        );
        assert_eq!(cell(&json!(null)), "-");
        assert_eq!(cell(&json!(75.0)), "75.0");
    }
}
