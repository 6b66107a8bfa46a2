/// Host-visible activity produced by one clock tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activity {
    /// Byte written to the output register this cycle, if any.
    pub emitted: Option<u8>,
    /// The halt register was strobed this cycle; the run should end.
    pub halted: bool,
}

/// System-agnostic interface for a runnable composition.
///
/// Each system (the hello SoC, test fixtures, future boards) implements
/// this so the front-end can drive the clock and observe emitted bytes
/// without knowing what is wired behind the fabric.
pub trait Machine {
    /// Advance the system by one clock tick.
    fn tick(&mut self) -> Activity;

    /// Reset the system to its initial power-on state.
    fn reset(&mut self);
}
