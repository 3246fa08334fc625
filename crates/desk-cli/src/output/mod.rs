use serde::Serialize;
use serde_json::Value;

use desk_view::{DisplayRecord, StatusTone};

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;

use table::{Cell, TableOptions};

/// One status tab with its total over the unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabCount {
    pub tab: &'static str,
    pub count: usize,
}

/// A filtered list page: tab totals plus the rows that passed the filter.
#[derive(Debug, Serialize)]
pub struct ListView<'a> {
    pub tab: &'static str,
    pub query: String,
    pub counts: Vec<TabCount>,
    /// Rows passing the filter, before the row limit.
    pub matched: usize,
    /// Records the server sent that could not be displayed.
    #[serde(skip_serializing_if = "is_zero")]
    pub dropped: usize,
    pub records: Vec<&'a DisplayRecord>,
}

const fn is_zero(value: &usize) -> bool {
    *value == 0
}

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(key_value_table(&serde_json::to_value(value)?)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}

/// Render a list page. Tables get a tab line above the rows.
pub fn render_list(view: &ListView<'_>, format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(view, format);
    }

    let tabs = view
        .counts
        .iter()
        .map(|tab| {
            if tab.tab == view.tab {
                format!("[{} ({})]", tab.tab, tab.count)
            } else {
                format!("{} ({})", tab.tab, tab.count)
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    let mut out = tabs;
    out.push('\n');
    if view.records.is_empty() {
        out.push_str("(no rows)");
    } else {
        let rows = view.records.iter().map(|record| record_cells(record)).collect::<Vec<_>>();
        out.push_str(&table::render_table(&record_headers(view.records[0]), &rows, table_options()));
    }
    if view.matched > view.records.len() {
        out.push_str(&format!("\n{} of {} shown", view.records.len(), view.matched));
    }
    if view.dropped > 0 {
        out.push_str(&format!("\n{} record(s) without an id were skipped", view.dropped));
    }
    Ok(out)
}

pub fn output_list(view: &ListView<'_>, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_list(view, format)?);
    Ok(())
}

fn record_headers(sample: &DisplayRecord) -> Vec<&'static str> {
    match sample.kind {
        desk_view::RecordKind::Contract => {
            vec!["id", "name", "client", "type", "amount", "start", "status"]
        }
        desk_view::RecordKind::Meeting => {
            vec!["id", "title", "host", "time", "duration", "date", "status"]
        }
    }
}

fn record_cells(record: &DisplayRecord) -> Vec<Cell> {
    vec![
        Cell::plain(record.id.clone()),
        Cell::plain(record.title.clone()),
        Cell::plain(record.subtitle.clone()),
        Cell::plain(record.kind_label.clone()),
        Cell::plain(record.figure.clone()),
        Cell::plain(record.date.clone()),
        Cell::toned(record.status.clone(), record.tone),
    ]
}

pub fn table_options() -> TableOptions {
    let prefs = ui::prefs();
    TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

/// Objects become a sorted key/value table; a `status` entry is colored by
/// its tone. Anything else is printed as one value.
fn key_value_table(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| {
                    let text = value_to_cell(value);
                    let cell = if key == "status" {
                        let tone = StatusTone::for_status(Some(&text));
                        Cell::toned(text, tone)
                    } else {
                        Cell::plain(text)
                    };
                    vec![Cell::plain(key.clone()), cell]
                })
                .collect::<Vec<_>>();
            table::render_table(&["key", "value"], &rows, table_options())
        }
        other => value_to_cell(other),
    }
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("—"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}
