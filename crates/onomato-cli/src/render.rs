//! Turns resolved fields into display lines, shared by the TUI and `--print`.

use log::debug;
use onomato_engine::{Entry, FieldBlock, Fragment, Hidden, ImageStore, ResolvedFields};

/// Separator between the parts a partial hide addresses.
const PART_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Heading,
    Plain,
    /// Fragment relocated from another block.
    Jumped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub kind: LineKind,
    pub text: String,
}

impl RenderedLine {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Renders every block with at least one visible entry, in block order.
pub fn render_fields(fields: &ResolvedFields, images: &dyn ImageStore) -> Vec<RenderedLine> {
    let mut lines = Vec::new();
    for (block, entries) in fields.iter() {
        let rendered: Vec<RenderedLine> = entries
            .iter()
            .filter_map(|entry| render_entry(entry, images))
            .collect();
        if rendered.is_empty() {
            continue;
        }
        lines.push(RenderedLine::new(LineKind::Heading, heading(block)));
        lines.extend(rendered);
    }
    lines
}

fn heading(block: FieldBlock) -> &'static str {
    match block {
        FieldBlock::Read => "Reading",
        FieldBlock::Def => "Definition",
        FieldBlock::Extra => "Extra",
        FieldBlock::TlExtra => "Translation notes",
    }
}

fn render_entry(entry: &Entry, images: &dyn ImageStore) -> Option<RenderedLine> {
    if entry.hidden.is_all() {
        return None;
    }

    let text = match &entry.fragment {
        Fragment::String { text, counter } => {
            let text = visible_text(text, &entry.hidden)?;
            match counter {
                Some(n) => format!("{n}. {text}"),
                None => text,
            }
        }
        Fragment::Image { url, is_local } => match images.load(url, *is_local) {
            Ok(bytes) => format!("[image {url} ({} bytes)]", bytes.len()),
            Err(e) => {
                debug!("image {url} unavailable: {e}");
                format!("[image {url} (unavailable)]")
            }
        },
        Fragment::Link { url, label } => format!("{label} <{url}>"),
        Fragment::CrossRef { id, link } => match link.consume() {
            Some(sfx) => format!("→ {}", sfx.label),
            None => format!("→ #{id}"),
        },
    };

    let kind = if entry.jumped_from.is_some() {
        LineKind::Jumped
    } else {
        LineKind::Plain
    };
    Some(RenderedLine::new(kind, text))
}

/// Text left after a partial hide, or `None` when every part is hidden.
fn visible_text(text: &str, hidden: &Hidden) -> Option<String> {
    if hidden.is_visible() {
        return Some(text.to_string());
    }
    let parts: Vec<&str> = text.split(PART_SEPARATOR).map(str::trim).collect();
    let visible = hidden.visible_parts(&parts);
    if visible.is_empty() {
        return None;
    }
    Some(visible.join(", "))
}
