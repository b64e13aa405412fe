//! Binary activity flag.

/// `true` when the force input is asserted or at least one peer was
/// counted by the most recent scan.  Stateless: recomputed every tick.
pub fn classify(force_signal: bool, peers_found: u8) -> bool {
    force_signal || peers_found > 0
}
