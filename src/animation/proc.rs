#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveShape {
    Sin,
    Cos,
}

/// Stateless periodic signal: `offset + amp * shape(time * rate)`.
///
/// `rate` is angular (radians per second), matching how idle motions are tuned.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    pub shape: WaveShape,
    pub rate: f64,
    pub amp: f64,
    pub offset: f64,
}

impl Oscillator {
    pub const fn sin(rate: f64, amp: f64) -> Self {
        Self {
            shape: WaveShape::Sin,
            rate,
            amp,
            offset: 0.0,
        }
    }

    pub const fn cos(rate: f64, amp: f64) -> Self {
        Self {
            shape: WaveShape::Cos,
            rate,
            amp,
            offset: 0.0,
        }
    }

    pub const fn around(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    pub fn sample(&self, time: f64) -> f64 {
        let phase = time * self.rate;
        let v = match self.shape {
            WaveShape::Sin => phase.sin(),
            WaveShape::Cos => phase.cos(),
        };
        self.offset + self.amp * v
    }

    pub fn min(&self) -> f64 {
        self.offset - self.amp.abs()
    }

    pub fn max(&self) -> f64 {
        self.offset + self.amp.abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/proc.rs"]
mod tests;
