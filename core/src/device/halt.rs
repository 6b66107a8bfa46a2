//! Memory-mapped halt register.

use crate::core::bus::{BusTarget, HostEvent, MasterPort, TargetPort};

/// A one-location register whose only job is to end the run: any pending
/// access, read or write, strobes [`HostEvent::Halt`] combinationally
/// and completes with the usual one-cycle-late `ack`.
pub struct HaltPort {
    ack: bool,
}

impl Default for HaltPort {
    fn default() -> Self {
        Self::new()
    }
}

impl HaltPort {
    pub fn new() -> Self {
        Self { ack: false }
    }
}

impl BusTarget for HaltPort {
    fn reply(&self, _req: &MasterPort) -> TargetPort {
        TargetPort {
            ack: self.ack,
            err: false,
            dat_r: 0,
        }
    }

    fn tick(&mut self, req: &MasterPort) {
        self.ack = req.cyc && req.stb && !self.ack;
    }

    fn host_event(&self, req: &MasterPort) -> Option<HostEvent> {
        if req.cyc && req.stb && !self.ack {
            Some(HostEvent::Halt)
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.ack = false;
    }
}
