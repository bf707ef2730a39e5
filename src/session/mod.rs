//! Reference driving loop: replays a [`Script`] against the robot rig at a fixed frame rate.

pub mod script;

use crate::{
    controller::AnimationController,
    foundation::error::{RobofaceError, RobofaceResult},
    scene::{graph::SceneGraph, rig::Rig},
    selector::conversation::ExpressionSelector,
    session::script::{Cue, CueAction, Script},
    snapshot::pose::PoseSnapshot,
};

pub struct Session {
    scene: SceneGraph,
    controller: AnimationController,
    selector: ExpressionSelector,
    cues: Vec<Cue>,
    next_cue: usize,
    frame: u64,
}

impl Session {
    /// Session over the conventional robot rig.
    pub fn new(script: &Script) -> RobofaceResult<Self> {
        Self::with_scene(SceneGraph::robot(), script)
    }

    pub fn with_scene(scene: SceneGraph, script: &Script) -> RobofaceResult<Self> {
        script.validate()?;
        let controller =
            AnimationController::new(script.controller.clone())?.with_rig(Rig::from_scene(&scene));
        Ok(Self {
            scene,
            controller,
            selector: ExpressionSelector::new(script.selector),
            cues: script.sorted_cues(),
            next_cue: 0,
            frame: 0,
        })
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn controller(&self) -> &AnimationController {
        &self.controller
    }

    pub fn selector(&self) -> &ExpressionSelector {
        &self.selector
    }

    /// Apply every cue due at or before `time`, let the selector react, run one controller
    /// update and capture the result.
    pub fn step(&mut self, time: f64) -> PoseSnapshot {
        while let Some(cue) = self.cues.get(self.next_cue)
            && cue.at <= time
        {
            let action = cue.action.clone();
            self.next_cue += 1;
            self.apply(time, &action);
        }
        if let Some(id) = self.selector.tick(time) {
            self.controller.set_expression(id);
        }

        self.controller.update(time, &mut self.scene);
        let pose = PoseSnapshot::capture(self.frame, time, &self.controller, &self.scene);
        self.frame += 1;
        pose
    }

    fn apply(&mut self, time: f64, action: &CueAction) {
        tracing::debug!(time, ?action, "cue");
        match action {
            CueAction::Expression { expression } => self.controller.set_expression(*expression),
            CueAction::Gesture {
                gesture,
                duration_ms,
            } => {
                self.controller.start_gesture(*gesture, *duration_ms);
            }
            CueAction::Conversation { event } => {
                if let Some(id) = self.selector.handle(time, event) {
                    self.controller.set_expression(id);
                }
            }
        }
    }

    /// Step `ceil(seconds * fps)` frames at `t = i / fps` and return one pose per frame.
    #[tracing::instrument(skip(self))]
    pub fn run(&mut self, fps: u32, seconds: f64) -> RobofaceResult<Vec<PoseSnapshot>> {
        let frames = frame_count(fps, seconds)?;
        let dt = 1.0 / f64::from(fps);
        let poses: Vec<_> = (0..frames).map(|i| self.step(i as f64 * dt)).collect();
        tracing::debug!(frames = poses.len(), "session finished");
        Ok(poses)
    }

    /// Replay from the start up to `time` at `fps` and return the pose at exactly `time`.
    pub fn pose_at(script: &Script, fps: u32, time: f64) -> RobofaceResult<PoseSnapshot> {
        if !time.is_finite() || time < 0.0 {
            return Err(RobofaceError::validation(format!(
                "time must be finite and >= 0, got {time}"
            )));
        }
        let mut session = Self::new(script)?;
        let frames = frame_count(fps, time)?;
        let dt = 1.0 / f64::from(fps);
        for i in 0..frames {
            let t = i as f64 * dt;
            if t >= time {
                break;
            }
            session.step(t);
        }
        Ok(session.step(time))
    }
}

fn frame_count(fps: u32, seconds: f64) -> RobofaceResult<u64> {
    if fps == 0 {
        return Err(RobofaceError::validation("fps must be > 0"));
    }
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(RobofaceError::validation(format!(
            "duration must be finite and >= 0, got {seconds}"
        )));
    }
    Ok((seconds * f64::from(fps)).ceil() as u64)
}

#[cfg(test)]
#[path = "../../tests/unit/session/mod.rs"]
mod tests;
