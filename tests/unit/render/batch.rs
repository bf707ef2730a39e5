use super::*;
use crate::{
    controller::AnimationController,
    scene::{graph::SceneGraph, provider::NodeProvider, rig::names},
};

fn settings() -> PreviewSettings {
    PreviewSettings {
        width: 96,
        height: 96,
        ..PreviewSettings::default()
    }
}

fn poses() -> Vec<PoseSnapshot> {
    let ctrl = AnimationController::default();
    let mut scene = SceneGraph::robot();
    let still = PoseSnapshot::capture(0, 0.0, &ctrl, &scene);
    let head = scene.find(names::HEAD).unwrap();
    scene.transform_mut(head).unwrap().rotation.z = 0.3;
    let tilted = PoseSnapshot::capture(3, 0.3, &ctrl, &scene);

    let mut out = vec![still.clone(), still.clone(), still, tilted];
    for (i, p) in out.iter_mut().enumerate() {
        p.frame = i as u64;
        p.time = i as f64 * 0.1;
    }
    out
}

#[test]
fn elision_renders_each_distinct_pose_once() {
    let poses = poses();
    let (frames, stats) = render_poses(&poses, settings(), BatchOptions::default()).unwrap();
    assert_eq!(frames.len(), 4);
    assert_eq!(
        stats,
        BatchStats {
            frames_total: 4,
            frames_rendered: 2,
            frames_elided: 2
        }
    );
    assert_eq!(frames[0], frames[2]);
    assert_ne!(frames[0], frames[3]);
}

#[test]
fn parallel_output_matches_single_renders() {
    let poses = poses();
    let opts = BatchOptions {
        threads: Some(2),
        static_frame_elision: false,
    };
    let (frames, stats) = render_poses(&poses, settings(), opts).unwrap();
    assert_eq!(stats.frames_rendered, 4);
    let single = PreviewRenderer::new(settings()).unwrap();
    for (pose, frame) in poses.iter().zip(&frames) {
        assert_eq!(&single.render_pose(pose), frame);
    }
}

#[test]
fn rejects_zero_threads_and_bad_sizes() {
    let poses = poses();
    let zero = BatchOptions {
        threads: Some(0),
        ..BatchOptions::default()
    };
    assert!(render_poses(&poses, settings(), zero).is_err());
    let bad = PreviewSettings {
        width: 0,
        ..settings()
    };
    assert!(render_poses(&poses, bad, BatchOptions::default()).is_err());
}

#[test]
fn empty_input_is_fine() {
    let (frames, stats) = render_poses(&[], settings(), BatchOptions::default()).unwrap();
    assert!(frames.is_empty());
    assert_eq!(stats, BatchStats::default());
}
