use std::path::Path;

use anyhow::Context;
use kurbo::{BezPath, PathEl, Point};

use crate::{
    foundation::{
        core::{Rgb, Vec3},
        error::{RobofaceError, RobofaceResult},
    },
    scene::{
        graph::SceneGraph,
        node::{Material, NodeId, SceneNode},
        rig::names,
    },
    snapshot::pose::PoseSnapshot,
};

/// World-space window the front camera frames: x in `[-1.1, 1.1]`, y in `[-0.95, 1.45]`.
const VIEW_CENTER: (f64, f64) = (0.0, 0.25);
const VIEW_SIZE: (f64, f64) = (2.2, 2.4);
const ELLIPSE_SEGMENTS: usize = 48;

const SHELL: [u8; 3] = [0xd8, 0xdc, 0xe4];
const SHELL_DARK: [u8; 3] = [0x5a, 0x61, 0x70];
const BASE: [u8; 3] = [0x2a, 0x2e, 0x38];

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PreviewSettings {
    pub width: u32,
    pub height: u32,
    /// Straight (non-premultiplied) RGBA.
    pub background: [u8; 4],
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            width: 480,
            height: 480,
            background: [0x0a, 0x0a, 0x14, 0xff],
        }
    }
}

/// Premultiplied RGBA8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl PreviewFrame {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Flat front-orthographic preview of a robot scene.
///
/// Each known rig node contributes one filled outline defined in its local frame, pushed
/// through its world transform and projected onto the xy plane. Outlines are painted back to
/// front by world z. Nodes with unknown names are not drawn.
#[derive(Clone, Debug)]
pub struct PreviewRenderer {
    settings: PreviewSettings,
    width: u16,
    height: u16,
}

impl PreviewRenderer {
    pub fn new(settings: PreviewSettings) -> RobofaceResult<Self> {
        let width: u16 = settings
            .width
            .try_into()
            .map_err(|_| RobofaceError::render("preview width exceeds u16"))?;
        let height: u16 = settings
            .height
            .try_into()
            .map_err(|_| RobofaceError::render("preview height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(RobofaceError::render("preview size must be non-zero"));
        }
        Ok(Self {
            settings,
            width,
            height,
        })
    }

    pub fn settings(&self) -> &PreviewSettings {
        &self.settings
    }

    pub fn render_pose(&self, pose: &PoseSnapshot) -> PreviewFrame {
        self.render(&pose.scene)
    }

    pub fn render(&self, scene: &SceneGraph) -> PreviewFrame {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

        let [r, g, b, a] = self.settings.background;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));
        let accent = eye_color(scene);

        let mut shapes: Vec<Shape> = scene
            .nodes()
            .filter_map(|(id, node)| self.shape_for(scene, id, node, accent))
            .collect();
        shapes.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        for shape in &shapes {
            let [r, g, b] = shape.color;
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, 255));
            let opacity = shape.opacity.clamp(0.0, 1.0) as f32;
            if opacity < 1.0 {
                ctx.push_opacity_layer(opacity);
            }
            ctx.fill_path(&bezpath_to_cpu(&shape.path));
            if opacity < 1.0 {
                ctx.pop_layer();
            }
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        PreviewFrame {
            width: self.settings.width,
            height: self.settings.height,
            data: pixmap.data_as_u8_slice().to_vec(),
        }
    }

    fn shape_for(
        &self,
        scene: &SceneGraph,
        id: NodeId,
        node: &SceneNode,
        accent: Rgb,
    ) -> Option<Shape> {
        let (outline, color, opacity) = match node.name.as_str() {
            names::HEAD => (ellipse(0.0, 0.0, 0.42, 0.34, false), SHELL, 1.0),
            names::BODY => (ellipse(0.0, -0.25, 0.38, 0.42, false), SHELL, 1.0),
            names::LEFT_ARM | names::RIGHT_ARM => (rect(-0.06, -0.45, 0.06, 0.0), SHELL_DARK, 1.0),
            names::BASE => (ellipse(0.0, 0.0, 0.35, 0.1, false), BASE, 1.0),
            names::EYE_SCREEN => {
                let m = node.material.unwrap_or_default();
                let open = m.blink.clamp(0.08, 1.0);
                (ellipse(0.0, 0.0, 0.09, 0.07 * open, false), glow(&m), 1.0)
            }
            names::MOUTH => (rect(-0.08, -0.015, 0.08, 0.015), accent.to_srgb8(), 1.0),
            names::ENERGY_CORE => {
                let m = node.material.unwrap_or_default();
                (ellipse(0.0, 0.0, 0.07, 0.07, false), glow(&m), 1.0)
            }
            names::PULSE_RING => {
                let m = node.material.unwrap_or_default();
                let mut ring = ellipse(0.0, 0.0, 0.5, 0.12, false);
                ring.extend(ellipse(0.0, 0.0, 0.44, 0.09, true));
                (ring, m.color.to_srgb8(), m.opacity)
            }
            _ => return None,
        };

        let world = scene.world_affine(id)?;
        let mut path = BezPath::new();
        let mut first = true;
        for p in outline {
            match p {
                Outline::Point(x, y) => {
                    let w = world.transform_point3(Vec3::new(x, y, 0.0));
                    let sp = self.project(w);
                    if first {
                        path.move_to(sp);
                        first = false;
                    } else {
                        path.line_to(sp);
                    }
                }
                Outline::Close => {
                    path.close_path();
                    first = true;
                }
            }
        }

        Some(Shape {
            path,
            color,
            opacity,
            depth: world.translation.z,
        })
    }

    fn project(&self, p: Vec3) -> Point {
        let (w, h) = (f64::from(self.width), f64::from(self.height));
        let scale = (w / VIEW_SIZE.0).min(h / VIEW_SIZE.1);
        Point::new(
            w * 0.5 + (p.x - VIEW_CENTER.0) * scale,
            h * 0.5 - (p.y - VIEW_CENTER.1) * scale,
        )
    }
}

struct Shape {
    path: BezPath,
    color: [u8; 3],
    opacity: f64,
    depth: f64,
}

#[derive(Clone, Copy)]
enum Outline {
    Point(f64, f64),
    Close,
}

fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, reverse: bool) -> Vec<Outline> {
    let dir = if reverse { -1.0 } else { 1.0 };
    let mut out: Vec<Outline> = (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let a = dir * std::f64::consts::TAU * i as f64 / ELLIPSE_SEGMENTS as f64;
            Outline::Point(cx + rx * a.cos(), cy + ry * a.sin())
        })
        .collect();
    out.push(Outline::Close);
    out
}

fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<Outline> {
    vec![
        Outline::Point(x0, y0),
        Outline::Point(x1, y0),
        Outline::Point(x1, y1),
        Outline::Point(x0, y1),
        Outline::Close,
    ]
}

/// Emissive color: tint scaled by intensity, then squashed back into range.
fn glow(m: &Material) -> [u8; 3] {
    m.color.scale(m.intensity.max(0.0)).to_srgb8()
}

fn eye_color(scene: &SceneGraph) -> Rgb {
    scene
        .nodes()
        .find(|(_, n)| n.name == names::EYE_SCREEN)
        .and_then(|(_, n)| n.material)
        .map_or(Rgb::WHITE, |m| m.color)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Write a frame as PNG, un-premultiplying on the way out.
pub fn save_png(frame: &PreviewFrame, path: impl AsRef<Path>) -> RobofaceResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let mut straight = frame.data.clone();
    for px in straight.chunks_exact_mut(4) {
        let a = px[3];
        if a != 0 && a != 255 {
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + u16::from(a) / 2) / u16::from(a)).min(255) as u8;
            }
        }
    }

    image::save_buffer_with_format(
        path,
        &straight,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/preview.rs"]
mod tests;
