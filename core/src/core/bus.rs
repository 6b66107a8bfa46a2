//! Signal-level model of a single-beat Wishbone-style bus.
//!
//! Every clock cycle a master drives a [`MasterPort`] and samples a
//! [`TargetPort`] at the edge. Combinational values are computed from the
//! current cycle's inputs plus state registered at the previous edge;
//! registered state changes only in `tick()`. Keeping the two phases
//! separate is what lets the whole fabric advance as a pure synchronous
//! state machine with no hidden ordering between components.

/// Signals a bus master drives toward the fabric each cycle.
///
/// | Signal  | Meaning                                              |
/// |---------|------------------------------------------------------|
/// | `cyc`   | transaction in progress (held for its full duration) |
/// | `stb`   | request a response this cycle                        |
/// | `we`    | write (true) / read (false)                          |
/// | `adr`   | byte address, valid while `cyc`                      |
/// | `dat_w` | write payload, valid while `cyc && we`               |
/// | `sel`   | byte-lane mask, one bit per lane of the 32-bit word  |
///
/// `adr`, `we`, `dat_w` and `sel` must stay stable for as long as `cyc`
/// is held for a given transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MasterPort {
    pub cyc: bool,
    pub stb: bool,
    pub we: bool,
    pub adr: u32,
    pub dat_w: u32,
    pub sel: u8,
}

impl MasterPort {
    /// All signals deasserted: no transaction in progress.
    pub const IDLE: MasterPort = MasterPort {
        cyc: false,
        stb: false,
        we: false,
        adr: 0,
        dat_w: 0,
        sel: 0,
    };

    /// A single-beat full-word read at `adr` (`cyc` and `stb` asserted).
    pub fn read(adr: u32) -> Self {
        MasterPort {
            cyc: true,
            stb: true,
            we: false,
            adr,
            dat_w: 0,
            sel: 0x0F,
        }
    }

    /// A single-beat write of `dat_w` at `adr` with byte lanes `sel`.
    pub fn write(adr: u32, dat_w: u32, sel: u8) -> Self {
        MasterPort {
            cyc: true,
            stb: true,
            we: true,
            adr,
            dat_w,
            sel,
        }
    }

}

impl Default for MasterPort {
    fn default() -> Self {
        Self::IDLE
    }
}

/// Signals a bus target drives back toward a master each cycle.
///
/// `ack` and `err` are one-cycle completion pulses: a target asserts one
/// of them for exactly the cycle after it observed a pending request,
/// then deasserts it even if the master keeps `cyc`/`stb` high. `dat_r`
/// is valid only while `ack` is asserted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TargetPort {
    pub ack: bool,
    pub err: bool,
    pub dat_r: u32,
}

impl TargetPort {
    /// No completion on the wire (the reply a stalled master sees).
    pub const IDLE: TargetPort = TargetPort {
        ack: false,
        err: false,
        dat_r: 0,
    };

    /// True when this cycle completes a transaction, successfully or not.
    pub fn done(&self) -> bool {
        self.ack || self.err
    }
}

/// Host-visible activity a target reports combinationally, outside the
/// bus handshake (the output register's strobe/data view and the halt
/// register's stop signal).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The output register is being written; payload is the low data byte.
    Emit(u8),
    /// The halt register is being accessed; the run should end.
    Halt,
}

/// A component that initiates bus transactions.
///
/// The fabric never inspects what a master is computing; anything that
/// drives these signals — a real CPU port or a scripted test stub — is
/// usable interchangeably.
pub trait BusMaster {
    /// The signals driven for the current cycle (combinational).
    fn output(&self) -> MasterPort;

    /// Advance one clock edge, sampling the reply presented this cycle.
    fn tick(&mut self, reply: TargetPort);

    /// Return to the post-construction state.
    fn reset(&mut self);
}

/// A component that receives and answers bus transactions.
pub trait BusTarget {
    /// The reply presented for the current cycle, given the request on
    /// the wire (combinational; registered state read-only).
    fn reply(&self, req: &MasterPort) -> TargetPort;

    /// Advance one clock edge, observing the request on the wire.
    fn tick(&mut self, req: &MasterPort);

    /// Host-visible side channel for the current cycle (combinational).
    /// Most targets have none.
    fn host_event(&self, _req: &MasterPort) -> Option<HostEvent> {
        None
    }

    /// Return to the post-construction state.
    fn reset(&mut self);
}
