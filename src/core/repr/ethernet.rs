use std::fmt::{
    Display,
    Formatter,
    Result as FmtResult,
};
use std::result::Result as StdResult;
use std::str::FromStr;

use byteorder::{
    ByteOrder,
    NetworkEndian,
};

use {
    Error,
    Result,
};

/// [MAC address](https://en.wikipedia.org/wiki/MAC_address) in network byte order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 6]);

impl Address {
    pub const BROADCAST: Address = Address([0xFF; 6]);

    /// Creates a MAC address from a network byte order buffer.
    pub fn new(addr: [u8; 6]) -> Address {
        Address(addr)
    }

    /// Tries to creates a MAC address from a network byte order slice.
    pub fn try_new(addr: &[u8]) -> Result<Address> {
        if addr.len() != 6 {
            return Err(Error::Address);
        }

        let mut _addr: [u8; 6] = [0; 6];
        _addr.copy_from_slice(addr);
        Ok(Address(_addr))
    }

    /// Returns a reference to the network byte order representation of the
    /// address.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    // Checks if this is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !(self.is_multicast() || self.is_broadcast())
    }

    // Checks if this is a multicast address.
    pub fn is_multicast(&self) -> bool {
        (self.0[0] & 0b00000001) > 0
    }

    /// Checks if this is a broadcast address.
    pub fn is_broadcast(&self) -> bool {
        self.0 == [0xFF; 6]
    }

    /// Checks if this is a locally assigned address or OUI assigned by IEEE.
    pub fn is_local(&self) -> bool {
        (self.0[0] & 0b00000010) > 0
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        write!(f, "{}", format_mac(&self.0))
    }
}

impl FromStr for Address {
    type Err = ();

    /// Parses a MAC address from an a:b:c:d:e:f style string.
    fn from_str(addr: &str) -> StdResult<Address, Self::Err> {
        let mut mac: [u8; 6] = [0; 6];
        let mut count = 0;

        for token in addr.split(':') {
            if count == 6 || token.is_empty() || token.len() > 2 {
                return Err(());
            }
            mac[count] = u8::from_str_radix(token, 16).map_err(|_| ())?;
            count += 1;
        }

        if count != 6 {
            return Err(());
        }

        Ok(Address::new(mac))
    }
}

/// Returns the colon separated, lower case hex representation of a hardware
/// address.
pub fn format_mac(addr: &[u8]) -> String {
    addr.iter()
        .map(|byte| format!("{:02x}", byte))
        .collect::<Vec<_>>()
        .join(":")
}

/// [https://en.wikipedia.org/wiki/EtherType](https://en.wikipedia.org/wiki/EtherType)
pub mod eth_types {
    /// Non-standard protocol number for ad-hoc messaging.
    pub const ADHOC: u16 = 0x0700;
}

mod fields {
    use std::ops::{
        Range,
        RangeFrom,
    };

    pub const DST_ADDR: Range<usize> = 0 .. 6;

    pub const SRC_ADDR: Range<usize> = 6 .. 12;

    pub const ETH_TYPE: Range<usize> = 12 .. 14;

    pub const PAYLOAD: RangeFrom<usize> = 14 ..;
}

/// View of a byte buffer as an Ethernet frame.
#[derive(Debug)]
pub struct Frame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AsRef<[u8]> for Frame<T> {
    fn as_ref(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> AsMut<[u8]> for Frame<T> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.buffer.as_mut()
    }
}

impl<T: AsRef<[u8]>> Frame<T> {
    pub const HEADER_LEN: usize = 14;

    /// Tries to create an Ethernet frame view over a byte buffer.
    ///
    /// # Errors
    ///
    /// An error occurs if the buffer is shorter than an Ethernet header.
    pub fn try_new(buffer: T) -> Result<Frame<T>> {
        if buffer.as_ref().len() < Self::HEADER_LEN {
            Err(Error::Malformed)
        } else {
            Ok(Frame { buffer })
        }
    }

    /// Returns the length of an Ethernet frame with the specified payload size.
    pub fn buffer_len(payload_len: usize) -> usize {
        Self::HEADER_LEN + payload_len
    }

    pub fn dst_addr(&self) -> Address {
        Self::addr_at(&self.buffer.as_ref()[fields::DST_ADDR])
    }

    pub fn src_addr(&self) -> Address {
        Self::addr_at(&self.buffer.as_ref()[fields::SRC_ADDR])
    }

    pub fn eth_type(&self) -> u16 {
        NetworkEndian::read_u16(&self.buffer.as_ref()[fields::ETH_TYPE])
    }

    pub fn payload(&self) -> &[u8] {
        &self.buffer.as_ref()[fields::PAYLOAD]
    }

    fn addr_at(bytes: &[u8]) -> Address {
        let mut addr = [0; 6];
        addr.copy_from_slice(bytes);
        Address::new(addr)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Frame<T> {
    pub fn set_dst_addr(&mut self, addr: Address) {
        self.buffer.as_mut()[fields::DST_ADDR].copy_from_slice(addr.as_bytes());
    }

    pub fn set_src_addr(&mut self, addr: Address) {
        self.buffer.as_mut()[fields::SRC_ADDR].copy_from_slice(addr.as_bytes());
    }

    pub fn set_eth_type(&mut self, eth_type: u16) {
        NetworkEndian::write_u16(&mut self.buffer.as_mut()[fields::ETH_TYPE], eth_type);
    }

    pub fn payload_mut(&mut self) -> &mut [u8] {
        &mut self.buffer.as_mut()[fields::PAYLOAD]
    }
}

/// Packs an Ethernet header and payload into a newly allocated frame buffer.
pub fn make_frame(src_addr: Address, dst_addr: Address, eth_type: u16, payload: &[u8]) -> Vec<u8> {
    let mut eth_buffer = vec![0; Frame::<&[u8]>::buffer_len(payload.len())];

    {
        let mut eth_frame = Frame {
            buffer: &mut eth_buffer[..],
        };
        eth_frame.set_dst_addr(dst_addr);
        eth_frame.set_src_addr(src_addr);
        eth_frame.set_eth_type(eth_type);
        eth_frame.payload_mut().copy_from_slice(payload);
    }

    eth_buffer
}
