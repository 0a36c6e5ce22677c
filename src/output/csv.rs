//! CSV output formatter

use std::io::Write;

use crate::error::Result;

use super::common::escape_csv;
use super::record::Record;

/// Raw field names as headers. An empty list writes nothing.
pub fn render_csv(records: &[Record], no_headers: bool, out: &mut dyn Write) -> Result<()> {
    let Some(first) = records.first() else {
        return Ok(());
    };
    let headers = first.headers();

    if !no_headers {
        let line: Vec<String> = headers.iter().map(|h| escape_csv(h)).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    for record in records {
        let line: Vec<String> = headers.iter().map(|h| escape_csv(&record.cell(h))).collect();
        writeln!(out, "{}", line.join(","))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(records: &[Record], no_headers: bool) -> String {
        let mut out = Vec::new();
        render_csv(records, no_headers, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_writes_nothing() {
        assert_eq!(render(&[], false), "");
    }

    #[test]
    fn test_alphabetical_headers() {
        let record = Record::new().with("b", 2).with("a", 1);
        assert_eq!(render(&[record], false), "a,b\n1,2\n");
    }

    #[test]
    fn test_no_headers_uses_same_column_order() {
        let record = Record::new().with("b", 2).with("a", 1);
        assert_eq!(render(&[record], true), "1,2\n");
    }

    #[test]
    fn test_values_escaped() {
        let record = Record::new()
            .with("name", "a,b")
            .with("description", "say \"hi\"");
        assert_eq!(
            render(&[record], false),
            "description,name\n\"say \"\"hi\"\"\",\"a,b\"\n"
        );
    }

    #[test]
    fn test_curated_order_for_memberships() {
        let record = Record::new()
            .with("is_default", true)
            .with("role", "owner")
            .with("organization", "acme");
        assert_eq!(
            render(&[record], false),
            "organization,role,is_default\nacme,owner,true\n"
        );
    }
}
