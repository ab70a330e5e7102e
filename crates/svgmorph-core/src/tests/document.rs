use crate::*;

const KRITA_LAYER: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:krita="http://krita.org/namespaces/svg/krita" xmlns:sodipodi="http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd" width="100pt" height="100pt" viewBox="0 0 100 100">
<defs/>
<path id="shape0" transform="translate(10, 10)" fill="none" stroke="#000000" stroke-width="2" sodipodi:nodetypes="cc" d="M0 0L10 10"/>
<path id="shape1" transform="matrix(1 0 0 1 20 20)" fill="none" stroke="#000000" stroke-width="2" sodipodi:nodetypes="cc" d="M0 0L20 20"/>
<path id="shape2" d="M0 0L20 20L30 0"/>
<rect id="box" x="0" y="0" width="5" height="5" krita:label="Box"/>
<g id="two" transform="translate(1,1) scale(2)"/>
<g id="one" transform="translate(2,2)"/>
</svg>"##;

#[test]
fn parse_classifies_children_in_source_order() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    let kinds: Vec<&str> = doc.children().iter().map(|n| n.kind().name()).collect();
    assert_eq!(
        kinds,
        ["generic", "path", "path", "path", "generic", "generic", "generic"]
    );
    assert_eq!(doc.children()[1].id(), Some("shape0"));
    assert_eq!(doc.namespaces().len(), 4);
    assert_eq!(doc.namespaces()[0].prefix, "");
    assert_eq!(doc.namespaces()[2].prefix, "krita");
}

#[test]
fn parse_rejects_malformed_markup() {
    let err = Document::parse("<svg><path></svg>").unwrap_err();
    assert!(matches!(err, Error::MarkupParse { .. }));
}

#[test]
fn path_data_without_letters_has_no_commands() {
    let doc = Document::parse(r#"<svg><path d="10 20"/></svg>"#).unwrap();
    assert!(doc.children()[0].commands().is_empty());
}

#[test]
fn dtd_is_accepted_unless_strict() {
    let text = "<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n<svg><path d=\"M 0 0\"/></svg>";
    assert_eq!(Document::parse(text).unwrap().children().len(), 1);
    assert!(Document::parse_with(text, ParseOptions::strict()).is_err());
}

#[test]
fn resolve_by_index_id_and_node() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    assert_eq!(doc.resolve(NodeRef::Index(2)).unwrap().id(), Some("shape1"));
    assert_eq!(doc.resolve("box".into()).unwrap().id(), Some("box"));
    assert!(doc.resolve(NodeRef::Id("missing")).is_none());
    assert!(doc.resolve(NodeRef::Index(99)).is_none());

    let outside = Node::parse(r#"<path id="x" d="M 1 1"/>"#).unwrap();
    let resolved = doc.resolve(NodeRef::Node(&outside)).unwrap();
    assert_eq!(resolved.id(), Some("x"));
}

#[test]
fn interpolate_into_new_document() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    let out = doc.interpolate(1usize, 2usize, 1).unwrap();
    assert_eq!(doc.children().len(), 7);
    assert_eq!(out.children().len(), 1);
    assert_eq!(
        out.serialize(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" xmlns:krita=\"http://krita.org/namespaces/svg/krita\" xmlns:sodipodi=\"http://sodipodi.sourceforge.net/DTD/sodipodi-0.dtd\" width=\"100pt\" height=\"100pt\" viewBox=\"0 0 100 100\">\n\t<path transform=\"matrix(1, 0, 0, 1, 15, 15)\" fill=\"none\" stroke=\"#000000\" stroke-width=\"2\" sodipodi:nodetypes=\"cc\" d=\"M 0 0L 15 15\" />\n</svg>"
    );
}

#[test]
fn interpolate_in_place_appends() {
    let mut doc = Document::parse(KRITA_LAYER).unwrap();
    doc.interpolate_in_place("shape0", "shape1", 3).unwrap();
    assert_eq!(doc.children().len(), 10);
    let added: Vec<f64> = doc.children()[7..]
        .iter()
        .map(|n| n.commands()[1].values[0])
        .collect();
    assert_eq!(added, vec![12.5, 15.0, 17.5]);
    assert!(doc.children()[7..].iter().all(|n| n.id().is_some()));
    assert!(!doc.serialize().contains("id="));
}

#[test]
fn incompatible_paths_are_wrapped_with_both_endpoints() {
    let mut doc = Document::parse(KRITA_LAYER).unwrap();
    let err = doc.interpolate_in_place("shape2", "shape1", 2).unwrap_err();
    let Error::IncompatibleNodes { from, to, source } = &err else {
        panic!("unexpected error: {err}");
    };
    assert!(from.contains("id=\"shape2\""), "{from}");
    assert!(to.contains("id=\"shape1\""), "{to}");
    assert!(matches!(**source, Error::StructuralIncompatibility { .. }));
    let message = err.to_string();
    assert!(message.contains("node 1 : <path id=\"shape2\""), "{message}");
    assert!(message.contains("node 2 : <path id=\"shape1\""), "{message}");
    assert_eq!(doc.children().len(), 7);
}

#[test]
fn kind_mismatch_is_wrapped() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    let err = doc.interpolate("shape0", "box", 1).unwrap_err();
    assert!(err.is_incompatibility());
    assert!(err.to_string().contains("krita:label=\"Box\""));
}

#[test]
fn too_many_transforms_is_wrapped() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    let err = doc.interpolate("two", "one", 1).unwrap_err();
    let Error::IncompatibleNodes { source, .. } = err else {
        panic!("expected IncompatibleNodes");
    };
    assert!(matches!(*source, Error::TooManyTransforms { from: 2, to: 1 }));
}

#[test]
fn transform_operation_mismatch_is_wrapped() {
    let doc = Document::parse(
        r#"<svg><g id="r" transform="rotate(10)"/><g id="s" transform="scale(2)"/></svg>"#,
    )
    .unwrap();
    let err = doc.interpolate("r", "s", 2).unwrap_err();
    assert!(err.is_incompatibility());
    let Error::IncompatibleNodes { from, to, source } = err else {
        panic!("expected IncompatibleNodes");
    };
    assert_eq!(from, r#"<g id="r" transform="rotate(10)" />"#);
    assert_eq!(to, r#"<g id="s" transform="scale(2)" />"#);
    assert!(matches!(*source, Error::IncompatibleTransform { .. }));
}

#[test]
fn nested_default_namespace_is_not_redeclared_on_root() {
    const XHTML: &str = "http://www.w3.org/1999/xhtml";
    let text = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><foreignObject id="a" width="1"><div xmlns="{XHTML}">a</div></foreignObject><foreignObject id="b" width="3"><div xmlns="{XHTML}">b</div></foreignObject></svg>"#
    );
    let doc = Document::parse(&text).unwrap();
    let out = doc.interpolate("a", "b", 1).unwrap().serialize();
    assert_eq!(
        out,
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\">\n\t<foreignObject width=\"1\"><div xmlns=\"{XHTML}\">a</div></foreignObject>\n</svg>"
        )
    );

    let start_tag = &out[..out.find('>').unwrap()];
    assert_eq!(start_tag.matches(" xmlns=").count(), 1);

    let reparsed = roxmltree::Document::parse(&out).unwrap();
    let root = reparsed.root_element();
    assert_eq!(root.tag_name().namespace(), Some("http://www.w3.org/2000/svg"));
    let div = root.descendants().find(|n| n.has_tag_name("div")).unwrap();
    assert_eq!(div.tag_name().namespace(), Some(XHTML));
}

#[test]
fn unknown_reference_and_zero_steps_are_rejected() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    assert!(matches!(
        doc.interpolate("nope", "shape1", 1),
        Err(Error::NodeNotFound { reference }) if reference == "nope"
    ));
    assert!(matches!(
        doc.interpolate(1usize, 2usize, 0),
        Err(Error::InvalidSteps)
    ));
}

#[test]
fn childless_document_serializes_self_closing() {
    let doc = Document::parse(KRITA_LAYER).unwrap().clone_empty();
    let out = doc.serialize();
    assert!(out.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert!(out.ends_with("viewBox=\"0 0 100 100\" />"));
}

#[test]
fn serialize_options_control_indent_and_precision() {
    let doc = Document::parse(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><path id="a" d="M 0 0 L 1 1"/><path id="b" d="M 0 0 L 2 2"/></svg>"#,
    )
    .unwrap();
    let out = doc.interpolate("a", "b", 2).unwrap();
    let options = SerializeOptions::default()
        .with_indent("  ")
        .with_decimals(Some(2));
    let text = out.serialize_with(&options);
    assert_eq!(
        text,
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <path d=\"M 0 0L 1.33 1.33\" />\n  <path d=\"M 0 0L 1.67 1.67\" />\n</svg>"
    );
}

#[test]
fn round_trip_keeps_structure() {
    let doc = Document::parse(KRITA_LAYER).unwrap();
    let again = Document::parse(&doc.serialize()).unwrap();
    assert_eq!(again.children().len(), doc.children().len());
    for (a, b) in doc.children().iter().zip(again.children()) {
        assert_eq!(a.element().name, b.element().name);
        assert_eq!(a.commands(), b.commands());
        assert_eq!(a.transforms(), b.transforms());
        assert_eq!(b.id(), None);
    }
}
