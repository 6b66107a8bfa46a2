//! Composition root: two bus masters, one arbiter, one decoder.
//!
//! Each `tick()` runs one clock cycle in two phases. First every
//! combinational value is computed from the masters' current outputs and
//! the state registered at the previous edge: the arbiter picks the
//! shared request, the decoder routes it and presents the shared reply,
//! and the reply is copied field-by-field back to the granted master
//! while the other master's completion lines are held idle. Then all
//! registered state — target acknowledge bits, the decoder's error
//! pulse, the grant bit, and the masters themselves — advances
//! atomically at the edge.

use super::arbiter::Arbiter;
use super::bus::{BusMaster, BusTarget, HostEvent, MasterPort};
use super::decoder::Decoder;
use super::machine::Activity;

/// The wired-up fabric. `I` and `D` are the instruction-fetch and
/// data-access masters; anything implementing [`BusMaster`] fits.
pub struct Interconnect<I, D> {
    ibus: I,
    dbus: D,
    arbiter: Arbiter,
    decoder: Decoder,
}

impl<I: BusMaster, D: BusMaster> Interconnect<I, D> {
    pub fn new(ibus: I, dbus: D, decoder: Decoder) -> Self {
        Self {
            ibus,
            dbus,
            arbiter: Arbiter::new(),
            decoder,
        }
    }

    /// Advance the whole fabric by one clock tick, reporting any
    /// host-visible activity that occurred during the cycle.
    pub fn tick(&mut self) -> Activity {
        // Combinational phase.
        let ireq = self.ibus.output();
        let dreq = self.dbus.output();
        let shared: MasterPort = self.arbiter.forward(&ireq, &dreq);
        let reply = self.decoder.reply(&shared);
        let event = self.decoder.host_event(&shared);
        let (ireply, dreply) = self.arbiter.reflect(reply);

        // Registered phase: everything updates off the same edge.
        self.decoder.tick(&shared);
        self.arbiter.tick(ireq.cyc, dreq.cyc);
        self.ibus.tick(ireply);
        self.dbus.tick(dreply);

        match event {
            Some(HostEvent::Emit(byte)) => Activity {
                emitted: Some(byte),
                halted: false,
            },
            Some(HostEvent::Halt) => Activity {
                emitted: None,
                halted: true,
            },
            None => Activity::default(),
        }
    }

    pub fn reset(&mut self) {
        self.ibus.reset();
        self.dbus.reset();
        self.arbiter.reset();
        self.decoder.reset();
    }

    /// The instruction-side master, for inspection by drivers and tests.
    pub fn ibus(&self) -> &I {
        &self.ibus
    }

    /// The data-side master, for inspection by drivers and tests.
    pub fn dbus(&self) -> &D {
        &self.dbus
    }
}
