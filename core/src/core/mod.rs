pub mod arbiter;
pub mod bus;
pub mod decoder;
pub mod interconnect;
pub mod machine;

pub use arbiter::{Arbiter, Grant};
pub use bus::{BusMaster, BusTarget, HostEvent, MasterPort, TargetPort};
pub use decoder::{Decoder, MapError, Window};
pub use interconnect::Interconnect;
pub use machine::{Activity, Machine};
