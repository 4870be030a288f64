/// Arming state of the background music.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Unarmed,
    Armed,
}

/// Allows exactly one playback attempt per page load, triggered by the first
/// user interaction. The gate arms whether or not playback succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct MusicGate {
    state: GateState,
}

impl MusicGate {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    /// Returns `true` only for the interaction that arms the gate.
    pub fn on_interaction(&mut self) -> bool {
        match self.state {
            GateState::Unarmed => {
                self.state = GateState::Armed;
                true
            }
            GateState::Armed => false,
        }
    }
}
