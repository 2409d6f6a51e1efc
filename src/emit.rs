//! Fenced-block emission.
//!
//! Each emitted file becomes a header line followed by a fenced code block
//! labeled with the file's extension. The closing fence always sits on its own
//! line, even when the source file lacks a trailing newline.

use std::io::{self, Write};
use std::path::Path;

/// Writes one fenced block for a file's content.
pub(crate) fn write_block<W: Write>(
    out: &mut W,
    separator: &str,
    label: &str,
    lang: &str,
    content: &str,
) -> io::Result<()> {
    writeln!(out, "{} {}", separator, label)?;
    writeln!(out, "```{}", lang)?;
    out.write_all(content.as_bytes())?;
    // empty content already leaves the fence on its own line
    if !content.is_empty() && !content.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    out.write_all(b"```\n")?;
    Ok(())
}

/// Fence language tag: the lower-cased extension without the dot, `txt` when
/// there is none.
pub(crate) fn fence_language(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "txt".to_string())
}

/// Header label: the path expressed relative to the working directory, not the
/// input root. Paths outside the working directory fall back to their
/// absolutized form.
pub(crate) fn header_label(path: &Path, cwd: &Path) -> String {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };
    match absolute.strip_prefix(cwd) {
        Ok(rel) => posix_path(rel),
        Err(_) => absolute.display().to_string(),
    }
}

/// Joins the components of a relative path with `/` regardless of platform.
pub(crate) fn posix_path(path: &Path) -> String {
    path.iter()
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
