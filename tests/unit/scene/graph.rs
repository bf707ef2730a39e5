use super::*;
use crate::scene::rig::names;

#[test]
fn add_rejects_unknown_parent_and_bad_names() {
    let mut g = SceneGraph::new();
    assert!(g.add("a", Some(NodeId(3)), Transform3::default()).is_err());
    assert!(g.add("", None, Transform3::default()).is_err());
    assert!(g.add("a/b", None, Transform3::default()).is_err());
    assert!(g.is_empty());
}

#[test]
fn find_resolves_plain_names_and_ancestor_paths() {
    let g = SceneGraph::robot();
    let head = g.find("head").unwrap();
    assert_eq!(g.node(head).unwrap().name, "head");

    let left = g.find("leftEye/eyeScreen").unwrap();
    let right = g.find("rightEye/eyeScreen").unwrap();
    assert_ne!(left, right);
    assert_eq!(g.path_of(left).unwrap(), "robot/head/leftEye/eyeScreen");

    // Ancestors need not be direct parents.
    assert_eq!(g.find("head/eyeScreen"), Some(left));
    assert_eq!(g.find("body/eyeScreen"), None);
    assert_eq!(g.find("missing"), None);
    assert_eq!(g.find(""), None);
}

#[test]
fn robot_rig_carries_materials_where_expected() {
    let g = SceneGraph::robot();
    for path in ["leftEye/eyeScreen", "rightEye/eyeScreen", names::ENERGY_CORE] {
        assert!(g.material(g.find(path).unwrap()).is_some(), "{path}");
    }
    let ring = g.material(g.find(names::PULSE_RING).unwrap()).unwrap();
    assert_eq!(ring.opacity, 0.5);
    assert!(g.material(g.find(names::HEAD).unwrap()).is_none());
}

#[test]
fn world_affine_composes_parent_chain() {
    let g = SceneGraph::robot();
    let core = g.find(names::ENERGY_CORE).unwrap();
    let p = g.world_position(core).unwrap();
    assert!((p.y - (0.4 - 0.55)).abs() < 1e-12);
    assert!((p.z - 0.45).abs() < 1e-12);
}

#[test]
fn transform_mut_writes_through_provider() {
    let mut g = SceneGraph::robot();
    let head = g.find(names::HEAD).unwrap();
    g.transform_mut(head).unwrap().rotation.x = 0.3;
    assert_eq!(g.transform(head).unwrap().rotation.x, 0.3);
    assert!(g.material_mut(head).is_none());
    assert!(g.transform_mut(NodeId(999)).is_none());
}

#[test]
fn json_roundtrip_rebuilds_name_index() {
    let g = SceneGraph::robot();
    let json = serde_json::to_string(&g).unwrap();
    let back = SceneGraph::from_json_str(&json).unwrap();
    assert_eq!(back.len(), g.len());
    assert_eq!(back.find("rightEye/eyeScreen"), g.find("rightEye/eyeScreen"));
}

#[test]
fn json_rejects_forward_parent_references() {
    let json = r#"{"nodes":[{"name":"a","parent":1,"transform":{"position":[0,0,0],"rotation":[0,0,0],"scale":[1,1,1]},"material":null},
        {"name":"b","parent":null,"transform":{"position":[0,0,0],"rotation":[0,0,0],"scale":[1,1,1]},"material":null}]}"#;
    assert!(SceneGraph::from_json_str(json).is_err());
}

#[test]
fn json_rejects_names_find_cannot_resolve() {
    let node = |name: &str| {
        format!(
            r#"{{"name":"{name}","parent":null,"transform":{{"position":[0,0,0],"rotation":[0,0,0],"scale":[1,1,1]}},"material":null}}"#
        )
    };
    for bad in ["a/b", ""] {
        let json = format!(r#"{{"nodes":[{}]}}"#, node(bad));
        let err = SceneGraph::from_json_str(&json).unwrap_err();
        assert!(err.to_string().contains("must not contain '/'"), "{bad:?}: {err}");
    }
    let ok = format!(r#"{{"nodes":[{}]}}"#, node("a"));
    assert_eq!(SceneGraph::from_json_str(&ok).unwrap().find("a"), Some(NodeId(0)));
}
