#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::module::{locate_record, parse_module, ModuleInfo};
use std::collections::BTreeMap;

fn module(source: &str, path: &str, name: &str) -> ModuleInfo {
    parse_module(source, path, name).unwrap()
}

fn specs_for(source: &str, record: &str, tag: &str) -> (ModuleInfo, Vec<AccessorSpec>) {
    let info = module(source, "crate", "demo");
    let record = locate_record(&info, record).unwrap();
    let specs = map_fields(&record, &info, tag);
    (info, specs)
}

fn named(module: Option<&str>, name: &str) -> TypeRef {
    TypeRef::Named {
        module: module.map(str::to_string),
        name: name.to_string(),
        args: Vec::new(),
    }
}

#[test]
fn test_unannotated_fields_are_capitalized() {
    let (_, specs) = specs_for(
        "pub struct Rec { pub prop_a: String, pub PropB: i64 }",
        "Rec",
        "wrapstruct",
    );
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].exposed_name, "Prop_a");
    assert_eq!(specs[0].source_field, "prop_a");
    assert_eq!(specs[1].exposed_name, "PropB");
}

#[test]
fn test_annotation_rename_and_exclusion() {
    let source = r#"
        pub struct MyStruct {
            pub PropA: String,
            #[wrapstruct("ValB")]
            valB: i64,
            #[wrapstruct("-")]
            pub Zzzz: Mystery,
        }
        pub struct Mystery;
    "#;
    let (_, specs) = specs_for(source, "MyStruct", "wrapstruct");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].exposed_name, "PropA");
    assert_eq!(specs[0].source_field, "PropA");
    assert_eq!(specs[1].exposed_name, "ValB");
    assert_eq!(specs[1].source_field, "valB");
}

#[test]
fn test_empty_annotation_falls_back_to_field_name() {
    let (_, specs) = specs_for(
        "pub struct Rec { #[wrapstruct(\"\")] pub val: i64 }",
        "Rec",
        "wrapstruct",
    );
    assert_eq!(specs[0].exposed_name, "Val");
}

#[test]
fn test_cfg_attr_wrapped_annotation() {
    let source = r#"
        pub struct Rec {
            #[cfg_attr(any(), wrapstruct("HTTPServer"))]
            http_server_url: String,
            #[cfg_attr(any(), wrapstruct("-"))]
            internal: u8,
        }
    "#;
    let (_, specs) = specs_for(source, "Rec", "wrapstruct");
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].exposed_name, "HTTPServer");
    assert_eq!(specs[0].source_field, "http_server_url");
}

#[test]
fn test_custom_tag_key() {
    let source = r#"
        pub struct Rec {
            #[view("Renamed")]
            #[wrapstruct("-")]
            pub a: i64,
        }
    "#;
    let (_, specs) = specs_for(source, "Rec", "view");
    assert_eq!(specs.len(), 1);
    assert_eq!(specs[0].exposed_name, "Renamed");
}

#[test]
fn test_name_value_annotation_form() {
    let (_, specs) = specs_for(
        "pub struct Rec { #[wrapstruct = \"Other\"] pub a: i64 }",
        "Rec",
        "wrapstruct",
    );
    assert_eq!(specs[0].exposed_name, "Other");
}

#[test]
fn test_underlying_element_for_sequences() {
    let source = r#"
        pub struct Holder {
            pub boxes: Vec<Box<Widget>>,
            pub refs: Vec<&'static Widget>,
            pub fixed: [u8; 4],
            pub plain: Widget,
            pub nums: Vec<i64>,
        }
        pub struct Widget { pub id: u64 }
    "#;
    let (_, specs) = specs_for(source, "Holder", "wrapstruct");
    let widget = named(Some("crate"), "Widget");
    assert_eq!(specs[0].underlying_element, Some(widget.clone()));
    assert_eq!(specs[1].underlying_element, Some(widget));
    assert_eq!(specs[2].underlying_element, Some(named(None, "u8")));
    assert_eq!(specs[3].underlying_element, None);
    assert_eq!(specs[4].underlying_element, Some(named(None, "i64")));
}

#[test]
fn test_resolve_type_against_module_scope() {
    let source = r#"
        use serde_json::Value;
        use crate::helpers::Widget;
        mod sub;

        pub struct Rec {
            pub a: Value,
            pub b: Widget,
            pub c: sub::Thing,
            pub d: crate::other::Deep,
            pub e: String,
            pub f: Local,
        }
        pub struct Local;
    "#;
    let (_, specs) = specs_for(source, "Rec", "wrapstruct");
    assert_eq!(specs[0].declared_type, named(Some("serde_json"), "Value"));
    assert_eq!(specs[1].declared_type, named(Some("crate::helpers"), "Widget"));
    assert_eq!(specs[2].declared_type, named(Some("crate::sub"), "Thing"));
    assert_eq!(specs[3].declared_type, named(Some("crate::other"), "Deep"));
    assert_eq!(specs[4].declared_type, named(None, "String"));
    assert_eq!(specs[5].declared_type, named(Some("crate"), "Local"));
}

#[test]
fn test_renamed_import_resolves_to_referent() {
    let source = r#"
        use crate::exotic::Thing as Widget;

        pub struct Rec {
            pub a: Widget,
        }
    "#;
    let (_, specs) = specs_for(source, "Rec", "wrapstruct");
    assert_eq!(specs[0].declared_type, named(Some("crate::exotic"), "Thing"));
}

#[test]
fn test_render_never_qualifies_destination_types() {
    let config = named(Some("crate::models"), "Config");
    let imports = BTreeMap::new();
    assert_eq!(config.render("crate::models", &imports), "Config");

    let mut imports = BTreeMap::new();
    imports.insert("crate::models".to_string(), "models".to_string());
    assert_eq!(config.render("crate", &imports), "models::Config");
}

#[test]
fn test_render_composite_types() {
    let mut imports = BTreeMap::new();
    imports.insert("crate::widgets".to_string(), "widgets".to_string());
    let widget = named(Some("crate::widgets"), "Widget");
    let vec_of_boxes = TypeRef::Named {
        module: None,
        name: "Vec".to_string(),
        args: vec![TypeRef::Named {
            module: None,
            name: "Box".to_string(),
            args: vec![widget.clone()],
        }],
    };
    assert_eq!(
        vec_of_boxes.render("crate", &imports),
        "Vec<Box<widgets::Widget>>"
    );

    let static_str = TypeRef::Reference {
        lifetime: Some("'static".to_string()),
        mutable: false,
        elem: Box::new(named(None, "str")),
    };
    assert_eq!(static_str.render("crate", &imports), "&'static str");

    let arr = TypeRef::Array {
        elem: Box::new(named(None, "u8")),
        len: "4".to_string(),
    };
    assert_eq!(arr.render("crate", &imports), "[u8; 4]");

    let pair = TypeRef::Tuple(vec![named(None, "u8"), widget]);
    assert_eq!(pair.render("crate", &imports), "(u8, widgets::Widget)");
}

#[test]
fn test_import_tracker_dedups_and_disambiguates() {
    let mut tracker = ImportTracker::new("crate", "demo");
    tracker.add_from(&named(Some("crate::alpha::util"), "A"));
    tracker.add_from(&named(Some("crate::beta::util"), "B"));
    tracker.add_from(&named(Some("crate::alpha::util"), "C"));
    let imports = tracker.finish();
    assert_eq!(imports.len(), 2);
    assert_eq!(imports["crate::alpha::util"], "util");
    assert_eq!(imports["crate::beta::util"], "util_1");
}

#[test]
fn test_import_tracker_excludes_destination() {
    let mut tracker = ImportTracker::new("crate::models", "models");
    tracker.add_from(&named(Some("crate::models"), "Config"));
    tracker.add_from(&named(Some("serde_json"), "Value"));
    let imports = tracker.finish();
    assert_eq!(imports.len(), 1);
    assert!(imports.contains_key("serde_json"));
}

#[test]
fn test_import_tracker_reserves_destination_name() {
    let mut tracker = ImportTracker::new("crate::view", "view");
    tracker.add_from(&named(Some("crate::other::view"), "Thing"));
    let imports = tracker.finish();
    assert_eq!(imports["crate::other::view"], "view_1");
}

#[test]
fn test_excluded_fields_contribute_no_imports() {
    let source = r#"
        use serde_json::Value;

        pub struct Rec {
            pub a: String,
            #[wrapstruct("-")]
            pub z: Value,
        }
    "#;
    let (info, specs) = specs_for(source, "Rec", "wrapstruct");
    let imports = resolve_imports(&info, &specs);
    assert!(imports.is_empty());
}

#[test]
fn test_render_import_block_alias_spelling() {
    let mut imports = BTreeMap::new();
    imports.insert("crate::models".to_string(), "models".to_string());
    imports.insert("crate::beta::util".to_string(), "util_1".to_string());
    assert_eq!(
        render_import_block(&imports),
        "\nuse crate::beta::util as util_1;\nuse crate::models;\n"
    );
    assert_eq!(render_import_block(&BTreeMap::new()), "");
}

#[test]
fn test_render_wrapper_golden() {
    let source = r#"
        pub struct MyStruct {
            pub PropA: String,
            #[wrapstruct("ValB")]
            valB: i64,
            #[wrapstruct("-")]
            pub Zzzz: String,
        }
    "#;
    let (info, specs) = specs_for(source, "MyStruct", "wrapstruct");
    let imports = resolve_imports(&info, &specs);
    let ctx = GenerationContext {
        src_name: "MyStruct".to_string(),
        dst_name: "MyStructWrapper".to_string(),
        dst_module: info,
        specs,
        imports,
    };
    let rendered = render_wrapper(&ctx).unwrap();
    let expected = "\
// Code generated by wrapgen. DO NOT EDIT.

//! Accessor wrapper `MyStructWrapper` for `MyStruct` (module `crate`).

#![allow(non_snake_case)]

pub struct MyStructWrapper {
    w: Box<MyStruct>,
}

impl MyStructWrapper {
    pub fn PropA(&self) -> String {
        self.w.PropA.clone()
    }

    pub fn ValB(&self) -> i64 {
        self.w.valB.clone()
    }
}
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_wrapper_foreign_sequence() {
    let source = r#"
        mod widgets;

        pub struct MyStruct {
            pub parts: Vec<Box<widgets::Widget>>,
        }
    "#;
    let (info, specs) = specs_for(source, "MyStruct", "wrapstruct");
    let imports = resolve_imports(&info, &specs);
    assert_eq!(imports["crate::widgets"], "widgets");
    let ctx = GenerationContext {
        src_name: "MyStruct".to_string(),
        dst_name: "MyStructWrapper".to_string(),
        dst_module: info,
        specs,
        imports,
    };
    let rendered = render_wrapper(&ctx).unwrap();
    assert!(rendered.contains("\nuse crate::widgets;\n"));
    assert!(rendered.contains("pub fn Parts(&self) -> Vec<Box<widgets::Widget>> {"));
    assert!(rendered.contains("self.w.parts.clone()"));
}

#[test]
fn test_render_wrapper_empty_record() {
    let (info, specs) = specs_for("pub struct Marker;", "Marker", "wrapstruct");
    assert!(specs.is_empty());
    let ctx = GenerationContext {
        src_name: "Marker".to_string(),
        dst_name: "MarkerWrapper".to_string(),
        dst_module: info,
        specs,
        imports: BTreeMap::new(),
    };
    let rendered = render_wrapper(&ctx).unwrap();
    assert!(rendered.contains("impl MarkerWrapper {\n}"));
}

#[test]
fn test_rendering_is_deterministic() {
    let source = r#"
        pub struct Rec {
            pub a: crate::alpha::util::Thing,
            pub b: crate::beta::util::Other,
        }
    "#;
    let render_once = || {
        let (info, specs) = specs_for(source, "Rec", "wrapstruct");
        let imports = resolve_imports(&info, &specs);
        let ctx = GenerationContext {
            src_name: "Rec".to_string(),
            dst_name: "RecWrapper".to_string(),
            dst_module: info,
            specs,
            imports,
        };
        render_wrapper(&ctx).unwrap()
    };
    let first = render_once();
    let second = render_once();
    assert_eq!(first, second);
    assert!(first.contains("use crate::alpha::util;\nuse crate::beta::util as util_1;"));
    assert!(first.contains("pub fn A(&self) -> util::Thing {"));
    assert!(first.contains("pub fn B(&self) -> util_1::Other {"));
}
