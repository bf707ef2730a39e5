use std::collections::HashMap;

use rayon::prelude::*;

use crate::{
    foundation::error::{RobofaceError, RobofaceResult},
    render::preview::{PreviewFrame, PreviewRenderer, PreviewSettings},
    snapshot::{fingerprint::PoseFingerprint, pose::PoseSnapshot},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,
    /// Render each distinct pose once and reuse it for identical poses.
    pub static_frame_elision: bool,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            threads: None,
            static_frame_elision: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub frames_total: u64,
    pub frames_rendered: u64,
    pub frames_elided: u64,
}

/// Rasterize recorded poses in a dedicated rayon pool. Output order follows `poses`.
#[tracing::instrument(skip(poses), fields(count = poses.len()))]
pub fn render_poses(
    poses: &[PoseSnapshot],
    settings: PreviewSettings,
    opts: BatchOptions,
) -> RobofaceResult<(Vec<PreviewFrame>, BatchStats)> {
    // Fail on bad settings before spinning up workers.
    PreviewRenderer::new(settings)?;
    let pool = build_thread_pool(opts.threads)?;

    let mut unique_indices = Vec::<usize>::with_capacity(poses.len());
    let mut pose_to_unique = Vec::<usize>::with_capacity(poses.len());
    if opts.static_frame_elision {
        let mut first = HashMap::<PoseFingerprint, usize>::new();
        for (idx, pose) in poses.iter().enumerate() {
            let slot = *first.entry(pose.fingerprint()).or_insert_with(|| {
                unique_indices.push(idx);
                unique_indices.len() - 1
            });
            pose_to_unique.push(slot);
        }
    } else {
        unique_indices.extend(0..poses.len());
        pose_to_unique.extend(0..poses.len());
    }

    let rendered = pool.install(|| {
        unique_indices
            .par_iter()
            .map_init(
                || PreviewRenderer::new(settings),
                |renderer, &idx| -> RobofaceResult<PreviewFrame> {
                    match renderer {
                        Ok(r) => Ok(r.render_pose(&poses[idx])),
                        Err(e) => Err(RobofaceError::render(e.to_string())),
                    }
                },
            )
            .collect::<Vec<_>>()
    });
    let unique_frames = rendered.into_iter().collect::<RobofaceResult<Vec<_>>>()?;

    let mut slots: Vec<Option<PreviewFrame>> = unique_frames.into_iter().map(Some).collect();
    let mut remaining = vec![0usize; slots.len()];
    for &u in &pose_to_unique {
        remaining[u] += 1;
    }

    let mut out = Vec::with_capacity(pose_to_unique.len());
    for u in pose_to_unique {
        remaining[u] -= 1;
        let frame = if remaining[u] == 0 {
            slots[u].take()
        } else {
            slots[u].clone()
        };
        out.push(frame.ok_or_else(|| RobofaceError::render("unique frame missing"))?);
    }

    let total = poses.len() as u64;
    let rendered_count = unique_indices.len() as u64;
    let stats = BatchStats {
        frames_total: total,
        frames_rendered: rendered_count,
        frames_elided: total.saturating_sub(rendered_count),
    };
    tracing::debug!(?stats, "rendered poses");
    Ok((out, stats))
}

fn build_thread_pool(threads: Option<usize>) -> RobofaceResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(RobofaceError::validation("threads must be >= 1 when set"));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RobofaceError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
