use std::io::{self, Write};

/// Write one JSON document followed by a newline.
pub fn write_document(out: &mut impl Write, document: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(document).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Convenience helper that writes to stdout.
pub fn emit(document: serde_json::Value) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_document(&mut out, &document)
}
