use crate::*;

fn path(d: &str) -> Node {
    Node::parse(&format!(r#"<path d="{d}"/>"#)).unwrap()
}

#[test]
fn every_step_is_the_exact_interior_blend() {
    let a = path("M 3 -7 C 0 0 10 10 20 20 Z");
    let b = path("M -9 4 C 5 5 -10 30 0 0 Z");
    for steps in 1..=6 {
        let out = a.interpolate(&b, steps).unwrap();
        assert_eq!(out.len(), steps);
        for (i, node) in out.iter().enumerate() {
            let p = (i + 1) as f64 / (steps + 1) as f64;
            for (c, cmd) in node.commands().iter().enumerate() {
                let from = &a.commands()[c].values;
                let to = &b.commands()[c].values;
                for (k, v) in cmd.values.iter().enumerate() {
                    assert_eq!(*v, from[k] + (to[k] - from[k]) * p);
                    let (lo, hi) = if from[k] <= to[k] {
                        (from[k], to[k])
                    } else {
                        (to[k], from[k])
                    };
                    if lo != hi {
                        assert!(*v > lo && *v < hi, "{v} not inside ({lo}, {hi})");
                    }
                }
            }
        }
    }
}

#[test]
fn structural_compatibility_is_symmetric() {
    let shapes = [
        path("M 0 0 L 1 1"),
        path("M 5 5 L 9 9"),
        path("M 0 0 l 1 1"),
        path("M 0 0 L 1 1 Z"),
        Node::parse("<g/>").unwrap(),
        Node::parse("<rect/>").unwrap(),
    ];
    for a in &shapes {
        for b in &shapes {
            assert_eq!(a.can_interpolate(b), b.can_interpolate(a));
        }
    }
    assert!(shapes[4].can_interpolate(&shapes[5]));
}

#[test]
fn reconciliation_keeps_the_matrix_name_in_both_directions() {
    let t = Node::parse(r#"<g transform="translate(10,10)"/>"#).unwrap();
    let m = Node::parse(r#"<g transform="matrix(1,0,0,1,20,20)"/>"#).unwrap();
    let ab = t.interpolated(&m, 0.5).unwrap();
    let ba = m.interpolated(&t, 0.5).unwrap();
    assert_eq!(ab.transforms()[0].serialize(), "matrix(1, 0, 0, 1, 15, 15)");
    assert_eq!(ba.transforms()[0].serialize(), "matrix(1, 0, 0, 1, 15, 15)");
}

#[test]
fn single_step_between_two_lines() {
    let a = path("M 0 0 L 10 10");
    let b = path("M 0 0 L 20 20");
    let out = a.interpolate(&b, 1).unwrap();
    assert_eq!(out[0].commands()[1].serialize(), "L 15 15");
}

#[test]
fn three_commands_against_two() {
    let a = path("M 0 0 L 1 1 L 2 2");
    let b = path("M 0 0 L 1 1");
    assert!(!a.can_interpolate(&b));
    let err = a.interpolate(&b, 2).unwrap_err();
    assert!(matches!(err, Error::StructuralIncompatibility { .. }));
    assert!(err.to_string().contains("3 and 2 commands"));
}

#[test]
fn relative_commands_keep_their_case() {
    let a = path("m 0 0 l 10 0 z");
    let b = path("m 10 10 l 0 10 z");
    let out = a.interpolate(&b, 1).unwrap();
    assert_eq!(
        out[0].serialize(&NamespaceMap::new(), false),
        r#"<path d="m 5 5l 5 5z" />"#
    );
}

#[test]
fn zeroed_scale_is_not_used_as_identity() {
    let plain = Node::parse("<g/>").unwrap();
    let scaled = Node::parse(r#"<g transform="scale(2)"/>"#).unwrap();
    let mid = scaled.interpolated(&plain, 0.5).unwrap();
    assert_eq!(mid.transforms()[0].serialize(), "scale(1.5)");
}
