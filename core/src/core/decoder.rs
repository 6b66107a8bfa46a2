//! Address decoder: routes the shared bus to exactly one target.
//!
//! The decoder owns a fixed table of address windows, each bound to one
//! target. Routing is combinational: the one window containing the
//! current address forwards the request (with a locally rebased address)
//! to its target and reflects that target's reply; every other target
//! sees its `cyc`/`stb` held low. Window overlap is a configuration
//! error rejected at construction, never checked at runtime.
//!
//! A strobed request that matches no window completes with a one-cycle
//! `err` pulse, registered with the same timing as a target's `ack`.
//! (The modeled hardware left such requests stalled forever; an explicit
//! bus-error completion is used here instead so misses are observable.)

use super::bus::{BusTarget, HostEvent, MasterPort, TargetPort};

/// One address window in the decoder's map.
///
/// A `Range` window matches `[base, base + size)` and rebases the
/// address relative to `base`. A `Sparse` window decodes only the
/// high-order address bits (`size` must be a power of two and `base`
/// aligned to it); the low-order bits pass through to the target
/// unmodified, which is how a small register is placed high in the
/// address space without a full-width comparator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Window {
    Range { base: u32, size: u32 },
    Sparse { base: u32, size: u32 },
}

impl Window {
    pub fn range(base: u32, size: u32) -> Self {
        Window::Range { base, size }
    }

    pub fn sparse(base: u32, size: u32) -> Self {
        Window::Sparse { base, size }
    }

    fn base(&self) -> u32 {
        match *self {
            Window::Range { base, .. } | Window::Sparse { base, .. } => base,
        }
    }

    fn size(&self) -> u32 {
        match *self {
            Window::Range { size, .. } | Window::Sparse { size, .. } => size,
        }
    }

    /// The half-open byte span covered, widened to avoid end overflow.
    fn span(&self) -> (u64, u64) {
        let base = self.base() as u64;
        (base, base + self.size() as u64)
    }

    fn contains(&self, adr: u32) -> bool {
        match *self {
            Window::Range { base, size } => {
                adr >= base && (adr as u64) < base as u64 + size as u64
            }
            Window::Sparse { base, size } => (adr & !(size - 1)) == base,
        }
    }

    /// The target-local address for a matching `adr`.
    fn rebase(&self, adr: u32) -> u32 {
        match *self {
            Window::Range { base, .. } => adr - base,
            Window::Sparse { size, .. } => adr & (size - 1),
        }
    }
}

/// Address-map configuration errors, detected when the decoder is built.
#[derive(Debug)]
pub enum MapError {
    /// A window with `size == 0` can never match.
    EmptyWindow { base: u32 },

    /// Sparse decoding compares high-order bits, so the window size must
    /// be a power of two.
    SparseSizeNotPowerOfTwo { base: u32, size: u32 },

    /// A sparse window's base must be aligned to its size.
    SparseMisaligned { base: u32, size: u32 },

    /// Two windows cover at least one common address.
    Overlap { first: Window, second: Window },
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWindow { base } => {
                write!(f, "address window at 0x{base:08X} has zero size")
            }
            Self::SparseSizeNotPowerOfTwo { base, size } => write!(
                f,
                "sparse window at 0x{base:08X}: size {size} is not a power of two"
            ),
            Self::SparseMisaligned { base, size } => write!(
                f,
                "sparse window at 0x{base:08X} is not aligned to its size {size}"
            ),
            Self::Overlap { first, second } => {
                write!(f, "address windows overlap: {first:?} and {second:?}")
            }
        }
    }
}

impl std::error::Error for MapError {}

struct Slot {
    window: Window,
    target: Box<dyn BusTarget>,
}

/// The decoder: an immutable window table plus one bit of registered
/// state for the unmapped-address error pulse. It implements
/// [`BusTarget`] itself, since the arbiter's shared port is a
/// target-side client of it.
pub struct Decoder {
    slots: Vec<Slot>,
    /// Registered: completes an unmatched strobed request one cycle late.
    bus_err: bool,
}

impl Decoder {
    /// Build a decoder from `(window, target)` pairs, validating the map.
    pub fn new(entries: Vec<(Window, Box<dyn BusTarget>)>) -> Result<Self, MapError> {
        for (window, _) in &entries {
            if window.size() == 0 {
                return Err(MapError::EmptyWindow {
                    base: window.base(),
                });
            }
            if let Window::Sparse { base, size } = *window {
                if !size.is_power_of_two() {
                    return Err(MapError::SparseSizeNotPowerOfTwo { base, size });
                }
                if base & (size - 1) != 0 {
                    return Err(MapError::SparseMisaligned { base, size });
                }
            }
        }
        // A size-aligned sparse window covers exactly [base, base+size),
        // so every window reduces to a byte interval for overlap checks.
        for (i, (first, _)) in entries.iter().enumerate() {
            for (second, _) in &entries[i + 1..] {
                let (a0, a1) = first.span();
                let (b0, b1) = second.span();
                if a0 < b1 && b0 < a1 {
                    return Err(MapError::Overlap {
                        first: *first,
                        second: *second,
                    });
                }
            }
        }

        let slots = entries
            .into_iter()
            .map(|(window, target)| Slot { window, target })
            .collect();
        Ok(Self {
            slots,
            bus_err: false,
        })
    }

    /// The index of the unique window containing `adr`, if any. The
    /// address lines are only meaningful while `cyc` is asserted, so
    /// selection is gated on it by the callers.
    fn select(&self, adr: u32) -> Option<usize> {
        self.slots.iter().position(|s| s.window.contains(adr))
    }

    /// Forward `req` into the selected window's local address space.
    fn rebased(slot: &Slot, req: &MasterPort) -> MasterPort {
        MasterPort {
            adr: slot.window.rebase(req.adr),
            ..*req
        }
    }
}

impl BusTarget for Decoder {
    fn reply(&self, req: &MasterPort) -> TargetPort {
        if !req.cyc {
            return TargetPort::IDLE;
        }
        match self.select(req.adr) {
            Some(i) => {
                let slot = &self.slots[i];
                slot.target.reply(&Self::rebased(slot, req))
            }
            None => TargetPort {
                ack: false,
                err: self.bus_err,
                dat_r: 0,
            },
        }
    }

    fn tick(&mut self, req: &MasterPort) {
        let selected = if req.cyc { self.select(req.adr) } else { None };
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if selected == Some(i) {
                let local = slot.window.rebase(req.adr);
                slot.target.tick(&MasterPort { adr: local, ..*req });
            } else {
                // Non-selected targets see their cyc/stb held low.
                slot.target.tick(&MasterPort::IDLE);
            }
        }
        self.bus_err = req.cyc && req.stb && selected.is_none() && !self.bus_err;
    }

    fn host_event(&self, req: &MasterPort) -> Option<HostEvent> {
        if !req.cyc {
            return None;
        }
        let i = self.select(req.adr)?;
        let slot = &self.slots[i];
        slot.target.host_event(&Self::rebased(slot, req))
    }

    fn reset(&mut self) {
        for slot in &mut self.slots {
            slot.target.reset();
        }
        self.bus_err = false;
    }
}
