//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers: no closures, no
//! dynamic dispatch, no heap.
//!
//! ```text
//!  DORMANT ──[occupancy < threshold]──▶ OCCUPIED
//!     ▲                                     │
//!     └──────[occupancy > threshold]────────┘
//!
//!  LIFTED  (no edges in or out)
//! ```
//!
//! Both edges share one threshold; there is no hysteresis band.

use super::context::FsmContext;
use super::{StateDescriptor, StateId};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Dormant
        StateDescriptor {
            id: StateId::Dormant,
            name: "Dormant",
            on_enter: Some(dormant_enter),
            on_exit: None,
            on_update: dormant_update,
        },
        // Index 1 — Lifted
        StateDescriptor {
            id: StateId::Lifted,
            name: "Lifted",
            on_enter: None,
            on_exit: None,
            on_update: lifted_update,
        },
        // Index 2 — Occupied
        StateDescriptor {
            id: StateId::Occupied,
            name: "Occupied",
            on_enter: Some(occupied_enter),
            on_exit: None,
            on_update: occupied_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  DORMANT state — nobody seated, waiting
// ═══════════════════════════════════════════════════════════════════════════

fn dormant_enter(ctx: &mut FsmContext) {
    ctx.target_volume = ctx.config.dormant_volume;
    info!("DORMANT: target volume {}", ctx.target_volume);
}

fn dormant_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.seat_pressed() {
        info!(
            "DORMANT: occupancy {} < {} → occupied",
            ctx.sensors.occupancy_signal, ctx.config.occupancy_threshold
        );
        return Some(StateId::Occupied);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  LIFTED state — reserved for "seat picked up"; nothing drives it yet
// ═══════════════════════════════════════════════════════════════════════════

fn lifted_update(_ctx: &mut FsmContext) -> Option<StateId> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  OCCUPIED state — someone is sitting, audio follows the host
// ═══════════════════════════════════════════════════════════════════════════

fn occupied_enter(ctx: &mut FsmContext) {
    ctx.target_volume = ctx.config.occupied_volume;
    info!("OCCUPIED: target volume {}", ctx.target_volume);
}

fn occupied_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.seat_released() {
        info!(
            "OCCUPIED: occupancy {} > {} → dormant",
            ctx.sensors.occupancy_signal, ctx.config.occupancy_threshold
        );
        return Some(StateId::Dormant);
    }
    None
}
