use super::*;

fn part(name: &'static str, element: &'static str, layer: i32) -> PartSpec {
    PartSpec {
        name: Cow::Borrowed(name),
        element: Cow::Borrowed(element),
        layer,
        dest_x: 0.0,
        dest_y: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
        flip_x: false,
    }
}

fn small_catalog(parts: Vec<PartSpec>) -> Catalog {
    Catalog {
        sheet_width: 8,
        sheet_height: 8,
        canvas_width: 8,
        canvas_height: 8,
        elements: Cow::Owned(vec![SkinElement {
            name: Cow::Borrowed("square"),
            rect: SheetRect::new(0, 0, 4, 4),
        }]),
        parts: Cow::Owned(parts),
    }
}

#[test]
fn validate_reports_dangling_element() {
    let c = small_catalog(vec![part("p", "circle", 0)]);
    match c.validate() {
        Err(TeeError::UnknownPart { part, element }) => {
            assert_eq!(part, "p");
            assert_eq!(element, "circle");
        }
        other => panic!("expected UnknownPart, got {other:?}"),
    }
}

#[test]
fn validate_rejects_duplicate_layers() {
    let c = small_catalog(vec![part("a", "square", 3), part("b", "square", 3)]);
    let err = c.validate().unwrap_err();
    assert!(err.to_string().contains("reuses layer 3"));
}

#[test]
fn validate_rejects_rect_outside_sheet() {
    let mut c = small_catalog(vec![part("a", "square", 0)]);
    c.elements = Cow::Owned(vec![SkinElement {
        name: Cow::Borrowed("square"),
        rect: SheetRect::new(6, 0, 4, 4),
    }]);
    assert!(matches!(c.validate(), Err(TeeError::Validation(_))));
}

#[test]
fn validate_rejects_zero_scale() {
    let mut p = part("a", "square", 0);
    p.scale_y = 0.0;
    let c = small_catalog(vec![p]);
    assert!(matches!(c.validate(), Err(TeeError::Validation(_))));
}

#[test]
fn draw_order_sorts_by_layer_not_declaration() {
    let c = small_catalog(vec![
        part("top", "square", 9),
        part("bottom", "square", -1),
        part("middle", "square", 4),
    ]);
    let names: Vec<&str> = c
        .parts_in_draw_order()
        .iter()
        .map(|p| &*p.name)
        .collect();
    assert_eq!(names, ["bottom", "middle", "top"]);
}

#[test]
fn with_eyes_retargets_only_eye_parts() {
    let happy = Catalog::builtin().with_eyes(EyeStyle::Happy);
    happy.validate().unwrap();
    for p in happy.parts.iter() {
        match &*p.name {
            "left_eye" | "right_eye" => assert_eq!(p.element, "happy_eye"),
            "body" => assert_eq!(p.element, "body"),
            "body_shadow" => assert_eq!(p.element, "body_shadow"),
            other => panic!("unexpected part {other}"),
        }
    }
    assert_eq!(
        Catalog::builtin().with_eyes(EyeStyle::Normal),
        *Catalog::builtin()
    );
}

#[test]
fn json_defaults_scale_and_flip() {
    let json = r#"{
        "sheet_width": 8, "sheet_height": 8,
        "canvas_width": 8, "canvas_height": 8,
        "elements": [{"name": "square", "rect": {"x": 0, "y": 0, "width": 4, "height": 4}}],
        "parts": [{"name": "p", "element": "square", "layer": 0, "dest_x": 1.5, "dest_y": 2.0}]
    }"#;
    let c: Catalog = serde_json::from_str(json).unwrap();
    c.validate().unwrap();
    let p = &c.parts[0];
    assert_eq!((p.scale_x, p.scale_y), (1.0, 1.0));
    assert!(!p.flip_x);
    assert_eq!(p.dest_x, 1.5);
}

#[test]
fn builtin_survives_json_roundtrip() {
    let json = serde_json::to_string(Catalog::builtin()).unwrap();
    let back: Catalog = serde_json::from_str(&json).unwrap();
    assert_eq!(back, *Catalog::builtin());
}
