#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

const MIN_COLUMN: usize = 4;

/// Render an aligned plain-text table. Columns are shrunk, widest first,
/// until the table fits `max_width`.
#[must_use]
pub fn render(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|value| value.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect::<Vec<_>>();

    if let Some(max_width) = options.max_width {
        shrink(&mut widths, max_width);
    }

    let header_line = line(headers.iter().copied(), &widths, false);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        lines.push(line(
            widths
                .iter()
                .enumerate()
                .map(|(index, _)| row.get(index).map_or("-", String::as_str)),
            &widths,
            options.color,
        ));
    }
    lines.join("\n")
}

fn shrink(widths: &mut [usize], max_width: usize) {
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some(widest) = widths
            .iter_mut()
            .filter(|width| **width > MIN_COLUMN)
            .max_by_key(|width| **width)
        else {
            break;
        };
        *widest -= 1;
    }
}

fn line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(value, width)| {
            let text = truncate(value, *width);
            let pad = " ".repeat(width.saturating_sub(text.chars().count()));
            if color {
                format!("{}{pad}", colorize(&text))
            } else {
                format!("{text}{pad}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out = value.chars().take(width.saturating_sub(1)).collect::<String>();
    out.push('…');
    out
}

/// Highlight status words: project and review states, sender roles.
fn colorize(value: &str) -> String {
    let code = match value {
        "completed" | "true" => "32",
        "in_review" | "pending" => "33",
        "failed" | "false" => "31",
        "assistant" => "36",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
