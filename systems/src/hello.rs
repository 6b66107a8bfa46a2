//! The hello system: a small SoC memory map — store low, output and halt
//! registers decoded sparsely high — with stub masters standing in for
//! the CPU core's two bus ports.

use fabric_core::core::bus::BusTarget;
use fabric_core::core::decoder::{Decoder, MapError, Window};
use fabric_core::core::interconnect::Interconnect;
use fabric_core::core::machine::{Activity, Machine};
use fabric_core::device::halt::HaltPort;
use fabric_core::device::outport::OutputPort;
use fabric_core::device::rom::Rom;

use crate::masters::{CopyMaster, FetchMaster};
use crate::registry::SystemEntry;

// ---------------------------------------------------------------------------
// Memory map
// ---------------------------------------------------------------------------

/// Read-only store at the bottom of the address space; window size is
/// the image length in bytes.
pub const ROM_BASE: u32 = 0x0000_0000;

/// Output register, decoded sparsely: only the high-order bits are
/// matched, and the register occupies the low byte of its 4-byte window.
pub const OUT_BASE: u32 = 0x8000_0000;

/// Halt register, one sparse window above the output register.
pub const HALT_BASE: u32 = 0x8000_0004;

/// Sparse window size for the two registers.
const REG_WINDOW: u32 = 4;

// ---------------------------------------------------------------------------
// System
// ---------------------------------------------------------------------------

pub struct HelloSystem {
    fabric: Interconnect<FetchMaster, CopyMaster>,
    halted: bool,
}

impl HelloSystem {
    /// Wire the fabric for a program image. Fails only on a malformed
    /// address map (an empty image leaves the store with nothing to
    /// decode).
    pub fn new(image: &[u32]) -> Result<Self, MapError> {
        let rom = Rom::new(image.to_vec());
        let rom_size = rom.size_bytes();

        let decoder = Decoder::new(vec![
            (
                Window::range(ROM_BASE, rom_size),
                Box::new(rom) as Box<dyn BusTarget>,
            ),
            (Window::sparse(OUT_BASE, REG_WINDOW), Box::new(OutputPort::new())),
            (Window::sparse(HALT_BASE, REG_WINDOW), Box::new(HaltPort::new())),
        ])?;

        let ibus = FetchMaster::new(rom_size);
        let dbus = CopyMaster::new(image.len() as u32, OUT_BASE, HALT_BASE);

        Ok(Self {
            fabric: Interconnect::new(ibus, dbus, decoder),
            halted: false,
        })
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    /// Completed instruction fetches so far, for tests and diagnostics.
    pub fn fetched(&self) -> u64 {
        self.fabric.ibus().fetched()
    }
}

impl Machine for HelloSystem {
    fn tick(&mut self) -> Activity {
        if self.halted {
            return Activity {
                emitted: None,
                halted: true,
            };
        }
        let activity = self.fabric.tick();
        if activity.halted {
            self.halted = true;
        }
        activity
    }

    fn reset(&mut self) {
        self.fabric.reset();
        self.halted = false;
    }
}

// ---------------------------------------------------------------------------
// System registry
// ---------------------------------------------------------------------------

fn create_system(image: &[u32]) -> Result<Box<dyn Machine>, MapError> {
    Ok(Box::new(HelloSystem::new(image)?))
}

inventory::submit! {
    SystemEntry::new("hello", create_system)
}
