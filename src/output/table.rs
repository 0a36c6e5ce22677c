//! Table output formatter

use std::io::Write;

use comfy_table::{presets::NOTHING, Table, TableComponent};

use crate::error::Result;

use super::common::title_case;
use super::record::Record;

/// Borderless, tab-separated columns. An empty list prints a placeholder line.
pub fn render_table(records: &[Record], no_headers: bool, out: &mut dyn Write) -> Result<()> {
    let Some(first) = records.first() else {
        writeln!(out, "No data found")?;
        return Ok(());
    };
    let headers = first.headers();

    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_style(TableComponent::VerticalLines, '\t');
    if !no_headers {
        table.set_header(headers.iter().map(|h| title_case(h)).collect::<Vec<_>>());
    }
    for record in records {
        table.add_row(headers.iter().map(|h| record.cell(h)).collect::<Vec<_>>());
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 0));
    }

    for line in table.lines() {
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[Record], no_headers: bool) -> String {
        let mut out = Vec::new();
        render_table(records, no_headers, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn cells(line: &str) -> Vec<&str> {
        line.split('\t').map(str::trim).collect()
    }

    fn membership(org: &str, role: &str, is_default: bool) -> Record {
        Record::new()
            .with("organization", org)
            .with("role", role)
            .with("is_default", is_default)
    }

    #[test]
    fn test_empty_prints_placeholder() {
        assert_eq!(render(&[], false), "No data found\n");
        assert_eq!(render(&[], true), "No data found\n");
    }

    #[test]
    fn test_headers_title_cased_in_curated_order() {
        let output = render(
            &[membership("acme", "owner", true), membership("globex", "member", false)],
            false,
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(cells(lines[0]), vec!["Organization", "Role", "Is Default"]);
        assert_eq!(cells(lines[1]), vec!["acme", "owner", "true"]);
        assert_eq!(cells(lines[2]), vec!["globex", "member", "false"]);
    }

    #[test]
    fn test_no_headers() {
        let output = render(&[membership("acme", "owner", true)], true);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(cells(lines[0]), vec!["acme", "owner", "true"]);
    }

    #[test]
    fn test_columns_are_tab_separated_without_borders() {
        let output = render(&[Record::new().with("a", "x").with("b", "y")], false);
        assert!(!output.contains('|'));
        assert!(!output.contains('+'));
        assert_eq!(output.lines().next().unwrap(), "A\tB");
    }

    #[test]
    fn test_missing_field_renders_empty_cell() {
        let first = Record::new().with("name", "a").with("role", "admin");
        let second = Record::new().with("name", "b");
        let output = render(&[first, second], false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(cells(lines[0]), vec!["Name", "Role"]);
        assert_eq!(lines[2], "b");
    }
}
