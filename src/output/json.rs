//! JSON and YAML output formatters

use std::io::Write;

use serde::Serialize;

use crate::error::Result;

/// Pretty-printed JSON with a trailing newline, fields in declaration order
pub fn render_json<T: Serialize + ?Sized>(data: &T, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, data)?;
    writeln!(out)?;
    Ok(())
}

/// Block-style YAML
pub fn render_yaml<T: Serialize + ?Sized>(data: &T, out: &mut dyn Write) -> Result<()> {
    let yaml = serde_yml::to_string(data)?;
    out.write_all(yaml.as_bytes())?;
    Ok(())
}
