use core::config::{
    Config,
    RECV_BUFFER_LEN,
};
use core::link::Link;
use core::repr::{
    make_frame,
    EthernetAddress,
    EthernetFrame,
};
use Result;

/// A session exchanging raw Ethernet frames with other nodes in range.
///
/// The hardware address of the link is resolved once, when the session is
/// created. Dropping the session releases the link.
pub struct DataLink<L: Link> {
    link: L,
    ethernet_addr: EthernetAddress,
    eth_type: u16,
    recv_buffer: Vec<u8>,
}

impl<L: Link> DataLink<L> {
    /// Creates a session over an already bound link.
    pub fn new(link: L, config: &Config) -> Result<DataLink<L>> {
        let ethernet_addr = link.get_ethernet_addr()?;

        Ok(DataLink {
            link,
            ethernet_addr,
            eth_type: config.eth_type,
            recv_buffer: vec![0; RECV_BUFFER_LEN],
        })
    }

    /// Returns the local hardware address.
    pub fn ethernet_addr(&self) -> EthernetAddress {
        self.ethernet_addr
    }

    /// Returns the EtherType stamped on sent frames.
    pub fn eth_type(&self) -> u16 {
        self.eth_type
    }

    /// Returns a reference to the underlying link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Broadcasts a payload to all nodes within range.
    pub fn broadcast(&mut self, payload: &[u8]) -> Result<()> {
        self.send(EthernetAddress::BROADCAST, payload)
    }

    /// Sends a payload to a specific node in range.
    pub fn send(&mut self, dst_addr: EthernetAddress, payload: &[u8]) -> Result<()> {
        let eth_buffer = make_frame(self.ethernet_addr, dst_addr, self.eth_type, payload);
        debug!(
            "Sending {} byte payload from {} to {}.",
            payload.len(),
            self.ethernet_addr,
            dst_addr
        );
        self.link.send(&eth_buffer)
    }

    /// Blocks until a frame arrives and returns its destination, source and
    /// payload.
    ///
    /// Frames are returned regardless of their destination or EtherType. The
    /// payload is whatever follows the header in a single read from the link.
    ///
    /// # Errors
    ///
    /// An error occurs if reading from the link fails or the frame is shorter
    /// than an Ethernet header.
    pub fn recv(&mut self) -> Result<(EthernetAddress, EthernetAddress, Vec<u8>)> {
        let read = self.link.recv(&mut self.recv_buffer)?;
        let eth_frame = EthernetFrame::try_new(&self.recv_buffer[.. read])?;

        debug!(
            "Received {} byte payload from {} to {} with type 0x{:04x}.",
            eth_frame.payload().len(),
            eth_frame.src_addr(),
            eth_frame.dst_addr(),
            eth_frame.eth_type()
        );

        Ok((
            eth_frame.dst_addr(),
            eth_frame.src_addr(),
            eth_frame.payload().to_vec(),
        ))
    }
}
