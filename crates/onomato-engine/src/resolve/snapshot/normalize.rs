use std::fmt::Write;

use crate::resolve::types::{Entry, Fragment, Hidden, ResolvedFields};

/// One block per header line, one entry per indented line:
///
/// ```text
/// def:
///   1 string "b"
///   1.5 string "a" from=read
/// ```
pub fn normalize(fields: &ResolvedFields) -> String {
    let mut out = String::new();
    for (block, entries) in fields.iter() {
        if entries.is_empty() {
            let _ = writeln!(out, "{block}: []");
            continue;
        }
        let _ = writeln!(out, "{block}:");
        for entry in entries {
            let _ = writeln!(out, "  {}", entry_line(entry));
        }
    }
    out.trim_end().to_string()
}

fn entry_line(entry: &Entry) -> String {
    let mut line = format!("{} {}", entry.position, entry.fragment.kind_name());
    match &entry.fragment {
        Fragment::String { text, counter } => {
            let _ = write!(line, " {text:?}");
            if let Some(n) = counter {
                let _ = write!(line, " n={n}");
            }
        }
        Fragment::Image { url, is_local } => {
            let marker = if *is_local { "@" } else { "" };
            let _ = write!(line, " {marker}{url}");
        }
        Fragment::Link { url, label } => {
            let _ = write!(line, " {url} {label:?}");
        }
        Fragment::CrossRef { id, .. } => {
            let _ = write!(line, " #{id}");
        }
    }
    if let Some(origin) = entry.jumped_from {
        let _ = write!(line, " from={origin}");
    }
    match &entry.hidden {
        Hidden::Visible => {}
        Hidden::All => line.push_str(" hidden"),
        Hidden::Reverse(indices) => {
            let parts: Vec<_> = indices.iter().map(u32::to_string).collect();
            let _ = write!(line, " hidden={}", parts.join(","));
        }
    }
    line
}
