//! Byte-wide memory-mapped output register.

use crate::core::bus::{BusTarget, HostEvent, MasterPort, TargetPort};

/// The host-bound emission register.
///
/// A pending write strobes [`HostEvent::Emit`] combinationally in the
/// same cycle, carrying the low byte of `dat_w`; `ack` follows one cycle
/// later, registered, so the bus handshake is identical to the store's.
/// The register is write-oriented and keeps no contents: reads complete
/// normally with `dat_r` zero.
pub struct OutputPort {
    ack: bool,
}

impl Default for OutputPort {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPort {
    pub fn new() -> Self {
        Self { ack: false }
    }
}

impl BusTarget for OutputPort {
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
        // Fires for exactly one cycle per transaction: once ack is up,
        // the request is no longer pending.
        if req.cyc && req.stb && !self.ack && req.we {
            Some(HostEvent::Emit(req.dat_w as u8))
        } else {
            None
        }
    }

    fn reset(&mut self) {
        self.ack = false;
    }
}
