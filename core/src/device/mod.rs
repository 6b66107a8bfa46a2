pub mod halt;
pub mod outport;
pub mod rom;

pub use halt::HaltPort;
pub use outport::OutputPort;
pub use rom::Rom;
