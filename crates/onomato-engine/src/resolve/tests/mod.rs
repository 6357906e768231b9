//! Behaviour matrix for the resolver.
//!
//! Each case resolves a set of field strings, checks the ordering invariants
//! and snapshots a normalized rendering of the result.

use std::sync::Arc;

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::boundary::{EntryLookup, SfxLabel};
use crate::fields::FieldInput;
use crate::resolve::{Fragment, Hidden, Resolver, resolve, snapshot};

fn run(read: &str, def: &str, extra: &str, tl_extra: &str) -> String {
    let fields = resolve(&FieldInput::new(
        read.to_string(),
        def.to_string(),
        extra.to_string(),
        tl_extra.to_string(),
    ));
    snapshot::invariants(&fields);
    snapshot::normalize(&fields)
}

#[test]
fn empty_input() {
    assert_snapshot!(run("", "", "", ""), @r"
    read: []
    def: []
    extra: []
    tlExtra: []
    ");
}

#[test]
fn plain_blocks_interleave_in_authoring_order() {
    assert_snapshot!(run("a;b", "c", "", "d"), @r#"
    read:
      1 string "a"
      2 string "b"
    def:
      3 string "c"
    extra: []
    tlExtra:
      4 string "d"
    "#);
}

#[test]
fn jump_round_trip() {
    assert_snapshot!(run("_def1:a", "b", "", ""), @r#"
    read: []
    def:
      1 string "b"
      1.5 string "a" from=read
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn jump_to_own_block_keeps_the_text() {
    assert_snapshot!(run("", "_def1:a;b", "", ""), @r#"
    read: []
    def:
      1 string "_def1:a"
      2 string "b"
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn hide_by_relative_index() {
    assert_snapshot!(run("a;b", "", "", "-read1"), @r#"
    read:
      1 string "a" hidden
      2 string "b"
    def: []
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn list_counting_skips_other_kinds() {
    assert_snapshot!(run("- a;b;img:@x.png;c", "", "", ""), @r#"
    read:
      1 string "a" n=1
      2 string "b" n=2
      3 image @x.png
      4 string "c" n=3
    def: []
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn cross_reference_carries_only_its_id() {
    assert_snapshot!(run("sfx:1", "", "", ""), @r"
    read:
      1 sfxlink #1
    def: []
    extra: []
    tlExtra: []
    ");
}

#[test]
fn every_fragment_kind() {
    assert_snapshot!(
        run("img:https://example.com/don.png;[https://example.com](source);sfx:7;text", "", "", ""),
        @r#"
    read:
      1 image https://example.com/don.png
      2 link https://example.com "source"
      3 sfxlink #7
      4 string "text"
    def: []
    extra: []
    tlExtra: []
    "#
    );
}

#[test]
fn translation_notes_move_into_other_blocks() {
    assert_snapshot!(run("どん", "- boom;- bang", "loud", "_d2:- crash;_e1:img:@fx.png;-d1"), @r#"
    read:
      1 string "どん"
    def:
      2 string "boom" n=1 hidden
      3 string "bang" n=2
      3.5 string "crash" n=1 from=tlExtra
    extra:
      4 string "loud"
      4.5 image @fx.png from=tlExtra
    tlExtra: []
    "#);
}

#[test]
fn failed_jump_shifts_later_blocks() {
    assert_snapshot!(run("a;_extra3:x;b", "c", "d", "-extra1"), @r#"
    read:
      1 string "a"
      2 string "_extra3:x"
      3 string "b"
    def:
      4 string "c"
    extra:
      5 string "d" hidden
    tlExtra: []
    "#);
}

#[test]
fn partial_hide_reaches_relocated_children() {
    assert_snapshot!(run("a, b, c", "_read1:d, e", "", "-r1/1,2;-r1/2"), @r#"
    read:
      1 string "a, b, c" hidden=1,2
      1.5 string "d, e" from=def hidden=1,2
    def: []
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn double_jump_resolves_one_level() {
    assert_snapshot!(run("x", "_read1:_extra1:y", "z", ""), @r#"
    read:
      1 string "x"
      1.5 string "_extra1:y" from=def
    def: []
    extra:
      2 string "z"
    tlExtra: []
    "#);
}

#[test]
fn malformed_directives_are_text() {
    assert_snapshot!(run("_read:x;-read;- ;_r1:;[nope](x);sfx:zero", "", "", ""), @r#"
    read:
      1 string "_read:x"
      2 string "-read"
      3 string "-"
      4 string "_r1:"
      5 string "[nope](x)"
      6 string "sfx:zero"
    def: []
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn zero_anchor_jump_is_recovered() {
    assert_snapshot!(run("a", "_read0:x", "", ""), @r#"
    read:
      1 string "a"
    def:
      2 string "_read0:x"
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn largest_anchor_survives_recovery_renumbering() {
    assert_snapshot!(run("_def9:x", "", "", "-read4294967295"), @r#"
    read:
      1 string "_def9:x"
    def: []
    extra: []
    tlExtra: []
    "#);
    assert_snapshot!(run("_def9:x", "_read4294967295:y", "", ""), @r#"
    read:
      1 string "_def9:x"
    def:
      2 string "_read4294967295:y"
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn recovered_jump_keeps_its_whitespace() {
    assert_snapshot!(run(" _def1:a ;b", "", "", ""), @r#"
    read:
      1 string " _def1:a "
      2 string "b"
    def: []
    extra: []
    tlExtra: []
    "#);
}

#[test]
fn zero_part_index_is_text() {
    assert_snapshot!(run("a, b", "", "", "-read1/0"), @r#"
    read:
      1 string "a, b"
    def: []
    extra: []
    tlExtra:
      2 string "-read1/0"
    "#);
}

#[test]
fn hide_applied_twice_matches_once() {
    let once = run("a;b", "", "", "-read2");
    let twice = run("a;b", "", "", "-read2;-read2");
    assert_eq!(once, twice);
}

#[test]
fn serializes_with_camel_case_keys() {
    let fields = resolve(&FieldInput {
        read: "_def1:- a".into(),
        def: "b".into(),
        tl_extra: "-def1/2".into(),
        ..Default::default()
    });
    let value = serde_json::to_value(&fields).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "read": [],
            "def": [
                {"position": 1, "hidden": [2], "kind": "string", "text": "b"},
                {
                    "position": 1.5,
                    "hidden": [2],
                    "jumpedFrom": "read",
                    "kind": "string",
                    "text": "a",
                    "counter": 1
                }
            ],
            "extra": [],
            "tlExtra": []
        })
    );
}

#[test]
fn cross_reference_serializes_without_its_lookup() {
    let fields = resolve(&FieldInput {
        extra: "img:@a.png;sfx:3".into(),
        ..Default::default()
    });
    let value = serde_json::to_value(&fields.extra).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"position": 1, "hidden": false, "kind": "image", "url": "a.png", "isLocal": true},
            {"position": 2, "hidden": false, "kind": "sfxlink", "id": 3}
        ])
    );
}

struct Names;

impl EntryLookup for Names {
    fn lookup(&self, id: u32) -> Option<SfxLabel> {
        (id == 1).then(|| SfxLabel {
            id,
            label: "ばーん".to_string(),
        })
    }
}

#[test]
fn cross_references_resolve_only_when_consumed() {
    let resolver = Resolver::new(Arc::new(Names));
    let fields = resolver.resolve(&FieldInput {
        read: "sfx:1;sfx:2".into(),
        tl_extra: "-read2".into(),
        ..Default::default()
    });

    let links: Vec<_> = fields
        .read
        .iter()
        .map(|e| match &e.fragment {
            Fragment::CrossRef { link, .. } => link.clone(),
            other => panic!("expected cross reference, got {other:?}"),
        })
        .collect();

    assert!(links.iter().all(|l| !l.is_consumed()));
    assert_eq!(
        links[0].consume().map(|l| l.label.as_str()),
        Some("ばーん")
    );
    assert_eq!(fields.read[1].hidden, Hidden::All);
    assert!(!links[1].is_consumed());
    assert_eq!(links[1].consume(), None);
}
