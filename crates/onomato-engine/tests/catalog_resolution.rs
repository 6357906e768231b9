//! End-to-end: catalog file on disk, resolution with the catalog as
//! cross-reference lookup, local images from an asset directory.

use std::fs;
use std::sync::Arc;

use onomato_engine::{Catalog, FsImageStore, Fragment, ImageStore, Resolver};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const CATALOG: &str = r#"
[[entry]]
id = 1
text = "ゴゴゴ"
read = "gogogo"
def = "- menacing rumble;img:@gogogo.png;- looming presence"
extra = "sfx:2"
tl_extra = "_d1:- ominous;-e1"

[[entry]]
id = 2
text = "ドドド"
def = "heavy stomping"
"#;

#[test]
fn resolves_a_catalog_entry_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let catalog_path = temp_dir.path().join("sfx.toml");
    fs::write(&catalog_path, CATALOG).unwrap();
    fs::write(temp_dir.path().join("gogogo.png"), b"png-bytes").unwrap();

    let catalog = Arc::new(Catalog::load(&catalog_path).unwrap());
    let resolver = Resolver::new(catalog.clone());
    let store = FsImageStore::new(temp_dir.path());

    let fields = resolver.resolve(&catalog.get(1).unwrap().fields());

    let def: Vec<_> = fields
        .def
        .iter()
        .map(|e| (e.position.to_string(), e.fragment.kind_name(), e.fragment.counter()))
        .collect();
    assert_eq!(
        def,
        vec![
            ("2".to_string(), "string", Some(1)),
            ("2.5".to_string(), "string", Some(1)),
            ("3".to_string(), "image", None),
            ("4".to_string(), "string", Some(2)),
        ]
    );

    match &fields.def[2].fragment {
        Fragment::Image { url, is_local } => {
            assert_eq!(store.load(url, *is_local).unwrap(), b"png-bytes");
        }
        other => panic!("expected image, got {other:?}"),
    }

    assert!(fields.extra[0].hidden.is_all());
    match &fields.extra[0].fragment {
        Fragment::CrossRef { id, link } => {
            assert_eq!(*id, 2);
            assert_eq!(link.consume().map(|l| l.label.as_str()), Some("ドドド"));
        }
        other => panic!("expected cross reference, got {other:?}"),
    }
}
