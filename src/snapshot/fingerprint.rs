use xxhash_rust::xxh3::Xxh3;

use crate::{
    foundation::core::{Rgb, Transform3},
    scene::node::Material,
    snapshot::pose::PoseSnapshot,
};

const XXH3_SEED: u64 = 0x52f0_bace_9e11_d0a7;

/// Stable 128-bit fingerprint of what a pose looks like.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct PoseFingerprint {
    pub hi: u64,
    pub lo: u64,
}

impl std::fmt::Display for PoseFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Hash the visible content of a pose.
///
/// Frame index, time and shader time are left out so a pose that stands still hashes equal
/// across frames. Blend bookkeeping is left out too; only what lands on screen counts.
pub fn fingerprint_pose(pose: &PoseSnapshot) -> PoseFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(pose.scene.len() as u32);
    for (_, node) in pose.scene.nodes() {
        h.write_bytes(node.name.as_bytes());
        h.write_u8(0);
        match node.parent {
            Some(p) => {
                h.write_u8(1);
                h.write_u32(p.0);
            }
            None => h.write_u8(0),
        }
        write_transform(&mut h, &node.transform);
        match &node.material {
            Some(m) => {
                h.write_u8(1);
                write_material(&mut h, m);
            }
            None => h.write_u8(0),
        }
    }
    h.finish()
}

fn write_transform(h: &mut StableHasher, t: &Transform3) {
    for v in [t.position, t.rotation, t.scale] {
        h.write_f64(v.x);
        h.write_f64(v.y);
        h.write_f64(v.z);
    }
}

fn write_material(h: &mut StableHasher, m: &Material) {
    write_rgb(h, m.color);
    h.write_f64(m.intensity);
    h.write_f64(m.blink);
    h.write_f64(m.opacity);
}

fn write_rgb(h: &mut StableHasher, c: Rgb) {
    h.write_f64(c.r);
    h.write_f64(c.g);
    h.write_f64(c.b);
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 render the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_bytes(&v.to_bits().to_le_bytes());
    }

    fn finish(self) -> PoseFingerprint {
        let v = self.inner.digest128();
        PoseFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/snapshot/fingerprint.rs"]
mod tests;
