//! Serialization and deserialization of link layer frames.
//!
//! The `repr` module provides views over byte buffers for reading and writing
//! Ethernet headers, and the hardware address type they carry.

pub mod ethernet;

pub use self::ethernet::{
    eth_types,
    format_mac,
    make_frame,
    Address as EthernetAddress,
    Frame as EthernetFrame,
};
