use super::*;
use crate::scene::provider::NodeProvider;

fn renderer() -> PreviewRenderer {
    PreviewRenderer::new(PreviewSettings {
        width: 240,
        height: 240,
        ..PreviewSettings::default()
    })
    .unwrap()
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tol)
}

#[test]
fn rejects_degenerate_sizes() {
    for (w, h) in [(0, 10), (10, 0), (70_000, 10)] {
        let s = PreviewSettings {
            width: w,
            height: h,
            ..PreviewSettings::default()
        };
        assert!(PreviewRenderer::new(s).is_err(), "{w}x{h}");
    }
}

#[test]
fn empty_scene_is_background_only() {
    let frame = renderer().render(&SceneGraph::new());
    assert_eq!(frame.data.len(), 240 * 240 * 4);
    assert!(frame.data.chunks_exact(4).all(|px| px == [0x0a, 0x0a, 0x14, 0xff]));
}

#[test]
fn robot_head_and_eye_land_where_projected() {
    let frame = renderer().render(&SceneGraph::robot());
    // 100 px per world unit, world (0, 0.25) at the image center.
    let head = frame.pixel(120, 50).unwrap();
    assert!(close(head, [SHELL[0], SHELL[1], SHELL[2], 255], 2), "{head:?}");
    let eye = frame.pixel(105, 45).unwrap();
    assert!(close(eye, [0, 255, 255, 255], 2), "{eye:?}");
    assert!(close(frame.pixel(0, 0).unwrap(), [0x0a, 0x0a, 0x14, 0xff], 0));
}

#[test]
fn closed_eyes_show_the_shell() {
    let mut scene = SceneGraph::robot();
    let open = renderer().render(&scene);
    assert!(open.pixel(105, 48).unwrap()[0] < 30);

    for path in ["leftEye/eyeScreen", "rightEye/eyeScreen"] {
        let id = scene.find(path).unwrap();
        scene.material_mut(id).unwrap().blink = 0.0;
    }
    let shut = renderer().render(&scene);
    assert!(shut.pixel(105, 48).unwrap()[0] > 180);
}

#[test]
fn rendering_is_deterministic() {
    let scene = SceneGraph::robot();
    assert_eq!(renderer().render(&scene), renderer().render(&scene));
}

#[test]
fn save_png_roundtrips_pixels() {
    let frame = renderer().render(&SceneGraph::robot());
    let path = std::env::temp_dir()
        .join(format!("roboface-preview-{}", std::process::id()))
        .join("robot.png");
    save_png(&frame, &path).unwrap();

    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (240, 240));
    assert_eq!(back.get_pixel(120, 50).0, frame.pixel(120, 50).unwrap());
    let _ = std::fs::remove_file(&path);
}
