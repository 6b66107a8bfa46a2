//! Read-only word store holding the program image.

use crate::core::bus::{BusTarget, MasterPort, TargetPort};

/// A fixed array of 32-bit words answering read transactions.
///
/// On a cycle with a pending request (`cyc && stb && !ack`), the word at
/// `adr >> 2` is latched into `dat_r` and `ack` is asserted for exactly
/// the next cycle. The decoder guarantees in-window addresses; an index
/// past the end of the image reads as zero. Writes are acknowledged with
/// the same timing but change nothing — the store models mask ROM, not a
/// protection fault.
pub struct Rom {
    words: Vec<u32>,
    // Registered outputs.
    ack: bool,
    dat_r: u32,
}

impl Rom {
    /// Build the store from its program image. Depth is fixed for life.
    pub fn new(words: Vec<u32>) -> Self {
        Self {
            words,
            ack: false,
            dat_r: 0,
        }
    }

    /// Image length in bytes, the natural size of the store's window.
    pub fn size_bytes(&self) -> u32 {
        (self.words.len() * 4) as u32
    }
}

impl BusTarget for Rom {
    fn reply(&self, _req: &MasterPort) -> TargetPort {
        TargetPort {
            ack: self.ack,
            err: false,
            dat_r: self.dat_r,
        }
    }

    fn tick(&mut self, req: &MasterPort) {
        if req.cyc && req.stb && !self.ack {
            self.dat_r = self
                .words
                .get((req.adr >> 2) as usize)
                .copied()
                .unwrap_or(0);
            self.ack = true;
        } else {
            self.ack = false;
        }
    }

    fn reset(&mut self) {
        self.ack = false;
        self.dat_r = 0;
    }
}
