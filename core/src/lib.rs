pub mod core;
pub mod device;

pub mod prelude {
    pub use crate::core::bus::{BusMaster, BusTarget, HostEvent, MasterPort, TargetPort};
    pub use crate::core::machine::{Activity, Machine};
    pub use crate::core::{Arbiter, Decoder, Grant, Interconnect, MapError, Window};
}
