//! Raw Ethernet messaging over an ad-hoc (IBSS) wireless network.
//!
//! The [configure](core/configure/fn.configure.html) routine puts a wireless
//! interface into ad-hoc mode and joins a network, and a
//! [DataLink](core/datalink/struct.DataLink.html) exchanges opaque payloads
//! with other nodes in range using a non-standard EtherType.

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
extern crate byteorder;
extern crate libc;
#[macro_use]
extern crate log;
#[cfg(test)]
extern crate rand;

pub mod core;

#[cfg(target_os = "linux")]
pub mod linux;

use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};

use core::command::CommandError;

#[derive(Debug)]
pub enum Error {
    /// Indicates an interface setup command failed to run or exited
    /// unsuccessfully.
    Command(CommandError),
    /// Indicates an error binding, sending or receiving on a raw link.
    Socket(std::io::Error),
    /// Indicates an error where a frame is shorter than an Ethernet header.
    Malformed,
    /// Indicates an error where a hardware address could not be resolved.
    Address,
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Socket(err)
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        Error::Command(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match *self {
            Error::Command(ref err) => write!(f, "{}", err),
            Error::Socket(ref err) => write!(f, "socket error: {}", err),
            Error::Malformed => write!(f, "frame shorter than an Ethernet header"),
            Error::Address => write!(f, "hardware address not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self {
            Error::Command(ref err) => Some(err),
            Error::Socket(ref err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
