//! Two-master round-robin bus arbiter.
//!
//! The grant is "sticky": the favored master keeps the downstream port
//! for as long as it holds `cyc`, and is never preempted mid-transaction.
//! The grant moves only at a clock edge where the favored master has
//! deasserted `cyc` while the other master is asserting it, so neither
//! master can starve the other for longer than one outstanding
//! transaction.

use super::bus::{MasterPort, TargetPort};

/// Which master currently owns the shared downstream port.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grant {
    Instruction,
    Data,
}

/// The arbiter's only state is the grant bit, written exclusively by its
/// own transition rule. Out of reset the instruction master is favored.
pub struct Arbiter {
    grant: Grant,
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new()
    }
}

impl Arbiter {
    pub fn new() -> Self {
        Self {
            grant: Grant::Instruction,
        }
    }

    /// The master favored this cycle.
    pub fn granted(&self) -> Grant {
        self.grant
    }

    /// Combinational forward path: the favored master's request is what
    /// reaches the shared downstream port this cycle.
    pub fn forward(&self, ibus: &MasterPort, dbus: &MasterPort) -> MasterPort {
        match self.grant {
            Grant::Instruction => *ibus,
            Grant::Data => *dbus,
        }
    }

    /// Combinational return path: the shared reply is reflected to the
    /// favored master; the other master's completion lines are held idle,
    /// so it simply stalls until granted.
    pub fn reflect(&self, shared: TargetPort) -> (TargetPort, TargetPort) {
        match self.grant {
            Grant::Instruction => (shared, TargetPort::IDLE),
            Grant::Data => (TargetPort::IDLE, shared),
        }
    }

    /// Clock edge: re-evaluate the grant from this cycle's `cyc` signals.
    /// The grant changes only when the favored master has relinquished
    /// the bus and the other master is requesting it.
    pub fn tick(&mut self, instr_cyc: bool, data_cyc: bool) {
        self.grant = match self.grant {
            Grant::Instruction if !instr_cyc && data_cyc => Grant::Data,
            Grant::Data if !data_cyc && instr_cyc => Grant::Instruction,
            unchanged => unchanged,
        };
    }

    pub fn reset(&mut self) {
        self.grant = Grant::Instruction;
    }
}
