/// Degrees driving the sine deformation, kept in `[0, 360)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct PhaseAngle(f32);

impl PhaseAngle {
    pub const FULL_TURN: f32 = 360.0;

    pub fn new(degrees: f32) -> Self {
        Self(degrees.rem_euclid(Self::FULL_TURN))
    }

    pub fn degrees(self) -> f32 {
        self.0
    }

    pub fn radians(self) -> f32 {
        self.0.to_radians()
    }

    /// Advances by `step` degrees, wrapping modulo 360.
    ///
    /// Returns `true` when the angle wrapped past a full turn.
    pub fn advance(&mut self, step: f32) -> bool {
        let next = self.0 + step;
        self.0 = next.rem_euclid(Self::FULL_TURN);
        !(0.0..Self::FULL_TURN).contains(&next)
    }
}
