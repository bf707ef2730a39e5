//! Roboface drives an animated 3D robot avatar from a discrete emotional state.
//!
//! A host application owns the scene and calls [`AnimationController::update`] once per frame.
//! The controller blends between [`ExpressionPreset`]s, layers idle motion (breathing, sway,
//! blinking, speech-like mouth motion) on top, and runs short one-shot gestures (wave, nod,
//! shake) that temporarily own the axes they animate.
//!
//! # Layers
//!
//! 1. **Presets**: [`ExpressionId`] to [`ExpressionPreset`] via [`preset_for`].
//! 2. **Controller**: [`AnimationController`] writes transforms and materials through a
//!    [`NodeProvider`]; [`SceneGraph`] is the in-memory provider with a stock robot rig.
//! 3. **Selector**: [`ExpressionSelector`] turns conversation events into expression changes.
//! 4. **Session**: [`Session`] replays a [`Script`] of timed cues and records [`PoseSnapshot`]s.
//! 5. **Preview**: [`PreviewRenderer`] and [`render_poses`] rasterize poses on the CPU.
//!
//! The animation core is infallible: unwired or unresolvable nodes are skipped. Errors
//! ([`RobofaceError`]) only come from parsing untrusted input and writing previews.
#![forbid(unsafe_code)]

mod animation;
mod controller;
mod expression;
mod foundation;
mod render;
mod scene;
mod selector;
mod session;
mod snapshot;

pub use animation::ease::Ease;
pub use animation::lerp::Lerp;
pub use animation::proc::{Oscillator, WaveShape};
pub use controller::AnimationController;
pub use controller::config::{ArmRest, ControllerConfig};
pub use controller::gesture::{GestureKind, GestureTrack};
pub use controller::ownership::{Channel, ChannelSlots};
pub use controller::state::{AnimationState, BlinkState, HeadRotation, HeadState};
pub use expression::id::ExpressionId;
pub use expression::preset::{ExpressionPreset, preset_for};
pub use foundation::core::{Rgb, Transform3, Vec3};
pub use foundation::error::{RobofaceError, RobofaceResult};
pub use foundation::math::{Rng64, approach, lerp};
pub use render::batch::{BatchOptions, BatchStats, render_poses};
pub use render::preview::{PreviewFrame, PreviewRenderer, PreviewSettings, save_png};
pub use scene::graph::SceneGraph;
pub use scene::node::{Material, NodeId, SceneNode};
pub use scene::provider::NodeProvider;
pub use scene::rig::{Rig, names};
pub use selector::classify::classify_text;
pub use selector::conversation::{ConversationEvent, ExpressionSelector, SelectorTiming};
pub use session::Session;
pub use session::script::{Cue, CueAction, Script};
pub use snapshot::fingerprint::{PoseFingerprint, fingerprint_pose};
pub use snapshot::pose::PoseSnapshot;
