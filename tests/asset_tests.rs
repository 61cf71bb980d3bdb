// Host-side tests for OBJ parsing and the load-completion hook.

use parallax_backdrop::config::BackdropConfig;
use parallax_backdrop::core::{parse_obj, LoadError, ObjError, UiHooks};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;

const THREE_PARTS: &str = "\
# three separate objects
v 0 0 0
v 1 0 0
v 0 1 0
v 0 0 1
vn 0 0 1
o body
f 1//1 2//1 3//1
o head
f 1 2 4
usemtl antlers
f 2 3 4
";

#[derive(Default)]
struct RecordingUi {
    calls: Vec<String>,
}

impl UiHooks for RecordingUi {
    fn hide_loading_indicator(&mut self) {
        self.calls.push("hide_loader".into());
    }
    fn set_tiles_visible(&mut self, visible: bool) {
        self.calls.push(format!("tiles({visible})"));
    }
    fn enable_menu(&mut self) {
        self.calls.push("enable_menu".into());
    }
}

#[test]
fn splits_children_on_object_group_and_material() {
    let mesh = parse_obj(THREE_PARTS).expect("parse");
    let names: Vec<&str> = mesh.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["body", "head", "antlers"]);
    assert!(mesh.children.iter().all(|c| c.geometry.triangle_count() == 1));
    assert!(mesh.children.iter().all(|c| c.material.is_none()));
}

#[test]
fn uses_file_normals_or_flat_face_normals() {
    let mesh = parse_obj(THREE_PARTS).expect("parse");
    let body = &mesh.children[0].geometry.vertices;
    assert!(body.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
    // f 1 2 4 lies in the y=0 plane, so the flat normal is -Y
    let head = &mesh.children[1].geometry.vertices;
    for v in head {
        assert!((v.normal[1] + 1.0).abs() < 1e-6, "normal {:?}", v.normal);
    }
}

#[test]
fn quads_are_fan_triangulated_and_negative_indices_resolve() {
    let src = "v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf -4 -3 -2 -1\n";
    let mesh = parse_obj(src).expect("parse");
    assert_eq!(mesh.children.len(), 1);
    assert_eq!(mesh.children[0].name, "default");
    let g = &mesh.children[0].geometry;
    assert_eq!(g.triangle_count(), 2);
    assert_eq!(g.vertices[0].position, [0.0, 0.0, 0.0]);
    assert_eq!(g.vertices[5].position, [0.0, 1.0, 0.0]);
}

#[test]
fn texcoord_forms_are_accepted() {
    let src = "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf 1/1 2/1 3/1\nf 1/1/1 2/1/1 3/1/1\n";
    let mesh = parse_obj(src).expect("parse");
    assert_eq!(mesh.children[0].geometry.triangle_count(), 2);
}

#[test]
fn reports_errors_with_line_numbers() {
    assert_eq!(
        parse_obj("v 0 0\n").unwrap_err(),
        ObjError::MissingComponents {
            line: 1,
            keyword: "v",
            expected: 3
        }
    );
    assert_eq!(
        parse_obj("v 0 0 0\nv 1 x 0\n").unwrap_err(),
        ObjError::BadNumber {
            line: 2,
            token: "x".into()
        }
    );
    assert_eq!(
        parse_obj("v 0 0 0\nv 1 0 0\nf 1 2\n").unwrap_err(),
        ObjError::DegenerateFace { line: 3 }
    );
    assert_eq!(
        parse_obj("v 0 0 0\nf 1 2 3\n").unwrap_err(),
        ObjError::IndexOutOfRange {
            line: 2,
            kind: "vertex",
            index: 2
        }
    );
    assert_eq!(parse_obj("# nothing\nv 0 0 0\n").unwrap_err(), ObjError::Empty);
}

#[test]
fn parse_errors_convert_into_load_errors() {
    let err: LoadError = parse_obj("").unwrap_err().into();
    assert!(matches!(err, LoadError::Parse(ObjError::Empty)));
    assert_eq!(err.to_string(), "parse failed: no faces found");
}

#[test]
fn hook_shares_one_material_and_adds_one_object() {
    let config = BackdropConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let mut scene = config.build_scene(&mut rng);
    let before = scene.objects.len();
    let mesh = parse_obj(THREE_PARTS).expect("parse");
    assert_eq!(mesh.children.len(), 3);

    let hook = config.asset_hook();
    let material = hook.material.clone();
    let mut ui = RecordingUi::default();
    let index = hook.complete(&mut scene, mesh, &mut ui);

    assert_eq!(scene.objects.len(), before + 1);
    assert_eq!(index, before);
    let model = &scene.objects[index];
    for child in &model.mesh.children {
        let m = child.material.as_ref().expect("material assigned");
        assert!(Rc::ptr_eq(m, &material));
    }
    assert_eq!(model.transform.scale.to_array(), [0.008, 0.008, 0.008]);
    assert!((model.transform.rotation.y + std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert_eq!(model.transform.rotation.x, 0.0);
    assert_eq!(ui.calls, ["hide_loader", "tiles(false)", "enable_menu"]);
}
