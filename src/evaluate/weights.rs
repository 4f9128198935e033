/// Weights of the advanced evaluation. The store difference (carried in through the
/// basic score) dominates; everything else refines it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AdvancedWeights {
    pub basic: f64,
    pub position: f64,
    pub steal: f64,
    pub vulnerability: f64,
    pub extra_turn: f64,
    pub empty_pit: f64,
    pub penalty_exposure: f64,
}

impl Default for AdvancedWeights {
    fn default() -> Self {
        Self {
            basic: 1.0,
            position: 0.3,
            steal: 0.2,
            vulnerability: 0.1,
            extra_turn: 0.4,
            empty_pit: 0.05,
            penalty_exposure: 0.5,
        }
    }
}

pub const STORE_WEIGHT: f64 = 2.0;
pub const STONES_IN_PLAY_WEIGHT: f64 = 0.5;
