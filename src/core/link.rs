use core::repr::EthernetAddress;
use Result;

/// A low level interface for sending and receiving whole frames across a link.
pub trait Link {
    /// Sends a frame across a link.
    fn send(&mut self, buffer: &[u8]) -> Result<()>;

    /// Blocks until a frame is read from the link into the buffer and returns
    /// the size of the frame. Bytes beyond the length of the buffer are
    /// discarded.
    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize>;

    /// Returns the hardware address associated with the link.
    fn get_ethernet_addr(&self) -> Result<EthernetAddress>;
}
