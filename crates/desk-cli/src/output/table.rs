use desk_view::StatusTone;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// One table cell; `tone` colors it when color is on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub tone: Option<StatusTone>,
}

impl Cell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }

    pub fn toned(text: impl Into<String>, tone: StatusTone) -> Self {
        Self {
            text: text.into(),
            tone: Some(tone),
        }
    }
}

/// Render an aligned table. Money and other numeric-looking cells are
/// right-aligned.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<Cell>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.text.chars().count())
                .chain([header.chars().count(), 4])
                .max()
                .unwrap_or(4)
        })
        .collect();
    shrink_to_fit(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, &width)| pad(&truncate(header, width), width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| {
                let cell = row.get(index).cloned().unwrap_or_else(|| Cell::plain("—"));
                let text = truncate(&cell.text, width);
                let padded = pad(&text, width, looks_numeric(&text));
                match cell.tone.and_then(ansi_code) {
                    Some(code) if options.color => format!("\u{1b}[{code}m{padded}\u{1b}[0m"),
                    _ => padded,
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Narrow the widest columns first until the table fits.
fn shrink_to_fit(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(index, width)| **width > headers[*index].chars().count().max(4))
            .max_by_key(|(_, width)| **width)
            .map(|(index, _)| index);
        let Some(index) = widest else {
            break;
        };
        widths[index] -= 1;
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

/// `12`, `-3.5`, `$150,000`, `€1,234.5`.
fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim().trim_start_matches('-');
    let digits = trimmed.trim_start_matches(|ch: char| !ch.is_ascii_digit() && !ch.is_whitespace());
    !digits.is_empty()
        && digits.len() + 4 >= trimmed.len()
        && digits
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | ','))
}

const fn ansi_code(tone: StatusTone) -> Option<&'static str> {
    match tone {
        StatusTone::Success => Some("32"),
        StatusTone::Danger => Some("31"),
        StatusTone::Warning => Some("33"),
        StatusTone::Info => Some("36"),
        StatusTone::Neutral => None,
    }
}
