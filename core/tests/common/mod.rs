use fabric_core::core::bus::{BusMaster, MasterPort, TargetPort};

/// One step of a scripted master's traffic.
#[derive(Clone, Copy, Debug)]
pub enum Op {
    /// Full-word read at a byte address.
    Read(u32),
    /// Write `(adr, dat_w, sel)`.
    Write(u32, u32, u8),
    /// Deassert everything for N cycles.
    Idle(u32),
}

/// Minimal bus master for testing: replays a fixed script, holding each
/// transaction's signals stable until a completion pulse arrives, and
/// records every completion it observes.
pub struct ScriptedMaster {
    script: Vec<Op>,
    pc: usize,
    active: Option<MasterPort>,
    idle_left: u32,
    /// Replies sampled at each transaction completion, in order.
    pub completions: Vec<TargetPort>,
}

impl ScriptedMaster {
    pub fn new(script: Vec<Op>) -> Self {
        let mut master = Self {
            script,
            pc: 0,
            active: None,
            idle_left: 0,
            completions: Vec::new(),
        };
        master.advance();
        master
    }

    /// Script exhausted and nothing left on the wire.
    pub fn finished(&self) -> bool {
        self.active.is_none() && self.idle_left == 0 && self.pc >= self.script.len()
    }

    fn advance(&mut self) {
        self.active = None;
        if self.pc >= self.script.len() {
            return;
        }
        let op = self.script[self.pc];
        self.pc += 1;
        match op {
            Op::Read(adr) => self.active = Some(MasterPort::read(adr)),
            Op::Write(adr, dat_w, sel) => self.active = Some(MasterPort::write(adr, dat_w, sel)),
            Op::Idle(cycles) => self.idle_left = cycles,
        }
    }
}

impl BusMaster for ScriptedMaster {
    fn output(&self) -> MasterPort {
        if self.idle_left > 0 {
            return MasterPort::IDLE;
        }
        self.active.unwrap_or(MasterPort::IDLE)
    }

    fn tick(&mut self, reply: TargetPort) {
        if self.idle_left > 0 {
            self.idle_left -= 1;
            if self.idle_left == 0 {
                self.advance();
            }
            return;
        }
        if self.active.is_some() && reply.done() {
            self.completions.push(reply);
            self.advance();
        }
    }

    fn reset(&mut self) {
        self.pc = 0;
        self.idle_left = 0;
        self.completions.clear();
        self.advance();
    }
}
