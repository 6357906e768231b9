use std::sync::Arc;

use crate::boundary::{CrossRefLink, EntryLookup, NoLookup};

use super::{
    counter::ListCounter,
    kinds::{HideSyntax, ImageSyntax, JumpSyntax, LinkSyntax, ListMarker, SfxSyntax},
    types::{Directive, Fragment, Segment},
};

/// Classifies single segments of a field block.
///
/// Holds the lookup that `sfx:` fragments are bound to; the lookup is not
/// called during classification.
#[derive(Clone)]
pub struct SegmentClassifier {
    lookup: Arc<dyn EntryLookup>,
}

impl SegmentClassifier {
    pub fn new(lookup: Arc<dyn EntryLookup>) -> Self {
        Self { lookup }
    }

    /// Classifies one segment. Kinds are tried in precedence order and the
    /// first match wins; anything unrecognised is plain text.
    ///
    /// `counter` is the list state of the sequence the segment belongs to.
    /// Only String fragments read or advance it.
    ///
    /// Directives keep the segment as written, surrounding whitespace
    /// included, so a recovered jump reads exactly like its source.
    pub fn classify(&self, written: &str, counter: &mut ListCounter) -> Segment {
        let segment = written.trim();

        if let Some(mut jump) = JumpSyntax::parse(segment) {
            jump.raw = written.to_string();
            return Segment::Directive(Directive::Jump(jump));
        }
        if let Some(mut hide) = HideSyntax::parse(segment) {
            hide.raw = written.to_string();
            return Segment::Directive(Directive::Hide(hide));
        }
        if let Some((url, is_local)) = ImageSyntax::parse(segment) {
            return Segment::Fragment(Fragment::Image {
                url: url.to_string(),
                is_local,
            });
        }
        if let Some((url, label)) = LinkSyntax::parse(segment) {
            return Segment::Fragment(Fragment::Link {
                url: url.to_string(),
                label: label.to_string(),
            });
        }
        if let Some(id) = SfxSyntax::parse(segment) {
            return Segment::Fragment(Fragment::CrossRef {
                id,
                link: CrossRefLink::new(id, self.lookup.clone()),
            });
        }

        let (marked, text) = ListMarker::strip(segment);
        Segment::Fragment(Fragment::String {
            text: text.to_string(),
            counter: counter.assign(marked),
        })
    }
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new(Arc::new(NoLookup))
    }
}
