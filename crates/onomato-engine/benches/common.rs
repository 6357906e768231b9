// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use onomato_engine::FieldInput;

/// Plain blocks of `segments` text segments each, no directives.
#[allow(dead_code)]
pub fn generate_plain_fields(segments: usize) -> FieldInput {
    let block = |name: &str| {
        (0..segments)
            .map(|i| format!("{name} segment {i}"))
            .collect::<Vec<_>>()
            .join(";")
    };
    FieldInput::new(block("read"), block("def"), block("extra"), block("note"))
}

/// Definition lists annotated by `notes` translation notes: jumps into `def`
/// and `extra`, a hide for every third note and an unsatisfiable jump every
/// fifth, so recovery renumbering is exercised too.
#[allow(dead_code)]
pub fn generate_annotated_fields(items: usize, notes: usize) -> FieldInput {
    let def = (0..items)
        .map(|i| format!("- meaning {i}"))
        .collect::<Vec<_>>()
        .join(";");
    let extra = (0..items)
        .map(|i| match i % 3 {
            0 => format!("img:@panel{i}.png"),
            1 => format!("sfx:{}", i + 1),
            _ => format!("usage note {i}"),
        })
        .collect::<Vec<_>>()
        .join(";");

    let mut tl_extra = Vec::with_capacity(notes);
    for n in 0..notes {
        let anchor = n % items.max(1) + 1;
        if n % 5 == 4 {
            tl_extra.push(format!("_def{}:out of range", items + n + 1));
        } else if n % 3 == 2 {
            tl_extra.push(format!("-d{anchor}"));
        } else if n % 2 == 0 {
            tl_extra.push(format!("_d{anchor}:- note {n}"));
        } else {
            tl_extra.push(format!("_e{anchor}:[https://example.com/{n}](ref {n})"));
        }
    }

    FieldInput::new("reading".to_string(), def, extra, tl_extra.join(";"))
}
