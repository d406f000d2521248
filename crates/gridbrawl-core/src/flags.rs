//! Arena-side status flags kept per agent.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Conditions the arena tracks for an agent, independent of the agent's
    /// own state.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct SlotFlags: u8 {
        /// The agent is standing on a flame tile; the flame comes back when
        /// it leaves.
        const ON_FLAME = 1 << 0;
        /// The agent fell into a pit and can no longer act on the board.
        const TRAPPED = 1 << 1;
    }
}
