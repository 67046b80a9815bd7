//! Linux bindings for raw links and interface setup.

mod libc;
pub mod packet;
pub mod process;

pub use self::packet::PacketSocket;
pub use self::process::SystemRunner;
