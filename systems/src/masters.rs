//! Stub bus masters.
//!
//! The fabric only ever sees the bus-master signal set, so these stand in
//! for the two ports of a real CPU core: `FetchMaster` produces the shape
//! of instruction-fetch traffic and `CopyMaster` the data-side traffic of
//! the hello program. Both deassert `cyc` for one cycle between
//! transactions, which is where the arbiter is allowed to move the grant.

use fabric_core::core::bus::{BusMaster, MasterPort, TargetPort};

/// Endless sequential word reads over the store, wrapping at the end —
/// the traffic pattern of an instruction-fetch port.
pub struct FetchMaster {
    /// Store window size in bytes; fetch addresses stay below this.
    limit: u32,
    adr: u32,
    gap: bool,
    fetched: u64,
}

impl FetchMaster {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            adr: 0,
            gap: false,
            fetched: 0,
        }
    }

    /// Number of completed fetches, for tests and diagnostics.
    pub fn fetched(&self) -> u64 {
        self.fetched
    }
}

impl BusMaster for FetchMaster {
    fn output(&self) -> MasterPort {
        if self.gap || self.limit == 0 {
            return MasterPort::IDLE;
        }
        MasterPort::read(self.adr)
    }

    fn tick(&mut self, reply: TargetPort) {
        if self.gap {
            self.gap = false;
            return;
        }
        if self.limit != 0 && reply.done() {
            self.fetched += 1;
            self.adr += 4;
            if self.adr >= self.limit {
                self.adr = 0;
            }
            self.gap = true;
        }
    }

    fn reset(&mut self) {
        self.adr = 0;
        self.gap = false;
        self.fetched = 0;
    }
}

#[derive(Clone, Copy, Debug)]
enum CopyState {
    /// Reading the word at `index` from the store.
    Fetch { index: u32 },
    /// Writing byte `lane` of `word` to the output register.
    Emit { word: u32, lane: u32, index: u32 },
    /// Strobing the halt register.
    Halt,
    /// Run over; the port stays idle.
    Done,
}

/// The data-side traffic of the hello program: stream the store's bytes
/// out of the output register, low lane first, one write transaction per
/// byte, and strobe the halt register at the first zero byte (or when
/// the image is exhausted).
pub struct CopyMaster {
    words: u32,
    out_adr: u32,
    halt_adr: u32,
    state: CopyState,
    gap: bool,
}

impl CopyMaster {
    pub fn new(words: u32, out_adr: u32, halt_adr: u32) -> Self {
        Self {
            words,
            out_adr,
            halt_adr,
            state: Self::fetch_or_halt(0, words),
            gap: false,
        }
    }

    /// The run is over once the halt strobe has been acknowledged.
    pub fn done(&self) -> bool {
        matches!(self.state, CopyState::Done)
    }

    fn fetch_or_halt(index: u32, words: u32) -> CopyState {
        if index < words {
            CopyState::Fetch { index }
        } else {
            CopyState::Halt
        }
    }

    /// After a completed emit (or fetch with `lane == 0`), pick the next
    /// state: the next lane of the same word, the next word, or halt on
    /// a zero byte.
    fn next_emit(&self, word: u32, lane: u32, index: u32) -> CopyState {
        if lane == 4 {
            return Self::fetch_or_halt(index + 1, self.words);
        }
        if (word >> (lane * 8)) as u8 == 0 {
            CopyState::Halt
        } else {
            CopyState::Emit { word, lane, index }
        }
    }
}

impl BusMaster for CopyMaster {
    fn output(&self) -> MasterPort {
        if self.gap {
            return MasterPort::IDLE;
        }
        match self.state {
            CopyState::Fetch { index } => MasterPort::read(index * 4),
            CopyState::Emit { word, lane, .. } => {
                MasterPort::write(self.out_adr, (word >> (lane * 8)) & 0xFF, 0x01)
            }
            CopyState::Halt => MasterPort::write(self.halt_adr, 0, 0x01),
            CopyState::Done => MasterPort::IDLE,
        }
    }

    fn tick(&mut self, reply: TargetPort) {
        if self.gap {
            self.gap = false;
            return;
        }
        if !reply.done() {
            return;
        }
        self.state = match self.state {
            CopyState::Fetch { index } => self.next_emit(reply.dat_r, 0, index),
            CopyState::Emit { word, lane, index } => self.next_emit(word, lane + 1, index),
            CopyState::Halt => CopyState::Done,
            CopyState::Done => CopyState::Done,
        };
        self.gap = !matches!(self.state, CopyState::Done);
    }

    fn reset(&mut self) {
        self.state = Self::fetch_or_halt(0, self.words);
        self.gap = false;
    }
}
