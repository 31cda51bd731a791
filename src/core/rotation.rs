use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

/// One face of the cube, named by the side that ends up facing the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Top,
    Front,
    Back,
    Left,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Top,
        Face::Front,
        Face::Back,
        Face::Left,
        Face::Bottom,
    ];

    /// Cube orientation `[x, y]` (radians) that presents this face.
    #[inline]
    pub fn angles(self) -> [f32; 2] {
        match self {
            Face::Right => [0.0, -FRAC_PI_2],
            Face::Top => [FRAC_PI_2, 0.0],
            Face::Front => [0.0, 0.0],
            Face::Back => [0.0, PI],
            Face::Left => [0.0, FRAC_PI_2],
            Face::Bottom => [-FRAC_PI_2, 0.0],
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RotationError {
    #[error("rotation sequence must contain at least one face")]
    EmptySequence,
    #[error("rotation duration must be positive")]
    NonPositiveDuration,
}

/// Ordered cycle of faces the cube turns through.
#[derive(Clone, Debug, PartialEq)]
pub struct RotationSequence {
    faces: SmallVec<[Face; 6]>,
}

impl RotationSequence {
    pub fn new(faces: &[Face]) -> Result<Self, RotationError> {
        if faces.is_empty() {
            return Err(RotationError::EmptySequence);
        }
        Ok(Self {
            faces: SmallVec::from_slice(faces),
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Face at `index`, wrapping around the cycle.
    #[inline]
    pub fn get(&self, index: usize) -> Face {
        self.faces[index % self.faces.len()]
    }

    #[inline]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.faces.len()
    }
}

impl Default for RotationSequence {
    fn default() -> Self {
        Self {
            faces: SmallVec::from_slice(&[Face::Right, Face::Top, Face::Front, Face::Back]),
        }
    }
}

/// Result of one scheduler tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationFrame {
    pub orientation: [f32; 2],
    pub progress: f32,
    /// Face the current cycle started from (before any advance on this tick).
    pub current_face: Face,
    pub next_face: Face,
    pub advanced: bool,
}

/// Weighted blend that hits both endpoints exactly.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Turns the cube from face to face on a wall-clock timer.
///
/// Times are milliseconds on a monotonic clock (`performance.now()` in the
/// browser). The index only changes inside [`RotationScheduler::tick`], once
/// per completed cycle: after the advance the cycle restarts at the tick time,
/// so a long stall produces a single step rather than a burst of them.
#[derive(Clone, Debug)]
pub struct RotationScheduler {
    sequence: RotationSequence,
    duration_ms: f64,
    current_index: usize,
    cycle_start_ms: f64,
}

impl RotationScheduler {
    pub fn new(
        sequence: RotationSequence,
        duration_ms: f64,
        now_ms: f64,
    ) -> Result<Self, RotationError> {
        if !(duration_ms > 0.0) {
            return Err(RotationError::NonPositiveDuration);
        }
        Ok(Self {
            sequence,
            duration_ms,
            current_index: 0,
            cycle_start_ms: now_ms,
        })
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn sequence(&self) -> &RotationSequence {
        &self.sequence
    }

    /// Fraction of the current cycle elapsed, clamped to `[0, 1]`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        let elapsed = now_ms - self.cycle_start_ms;
        (elapsed / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    pub fn tick(&mut self, now_ms: f64) -> RotationFrame {
        let t = self.progress(now_ms);
        let current_face = self.sequence.get(self.current_index);
        let next_face = self.sequence.get(self.sequence.next_index(self.current_index));
        let from = current_face.angles();
        let to = next_face.angles();
        let orientation = [lerp(from[0], to[0], t), lerp(from[1], to[1], t)];

        let advanced = t >= 1.0;
        if advanced {
            self.current_index = self.sequence.next_index(self.current_index);
            self.cycle_start_ms = now_ms;
        }

        RotationFrame {
            orientation,
            progress: t,
            current_face,
            next_face,
            advanced,
        }
    }

    /// Start the current cycle over from its first face orientation.
    pub fn restart(&mut self, now_ms: f64) {
        self.cycle_start_ms = now_ms;
    }
}
