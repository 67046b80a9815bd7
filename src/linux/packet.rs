use std;

use libc;

use core::config::Config;
use core::datalink::DataLink;
use core::link::Link;
use core::repr::EthernetAddress;
use linux::libc as _libc;
use {
    Error,
    Result,
};

/// [Packet socket](http://man7.org/linux/man-pages/man7/packet.7.html) for
/// sending and receiving raw Ethernet frames of a single EtherType on one
/// interface.
#[derive(Debug)]
pub struct PacketSocket {
    fd: libc::c_int,
    ifr_name: String,
}

impl PacketSocket {
    /// Opens a raw packet socket for an EtherType and binds it to the
    /// interface with the specified name.
    ///
    /// # Errors
    ///
    /// An error occurs if the interface does not exist or the socket can not
    /// be created or bound, usually for lack of CAP_NET_RAW.
    pub fn bind(ifr_name: &str, eth_type: u16) -> Result<PacketSocket> {
        let ifindex = _libc::if_nametoindex(ifr_name)?;

        let fd = unsafe {
            libc::socket(
                libc::AF_PACKET,
                libc::SOCK_RAW,
                eth_type.to_be() as libc::c_int,
            )
        };

        if fd == -1 {
            return Err(Error::Socket(std::io::Error::last_os_error()));
        }

        // Closes the descriptor if binding fails.
        let socket = PacketSocket {
            fd,
            ifr_name: ifr_name.to_string(),
        };

        let addr = _libc::sockaddr_ll(ifindex, eth_type);
        let bound = unsafe {
            libc::bind(
                fd,
                &addr as *const libc::sockaddr_ll as *const libc::sockaddr,
                _libc::sockaddr_ll_len(),
            )
        };

        if bound == -1 {
            return Err(Error::Socket(std::io::Error::last_os_error()));
        }

        debug!(
            "Bound packet socket {} to {} (index {}) for type 0x{:04x}.",
            fd, ifr_name, ifindex, eth_type
        );

        Ok(socket)
    }

    /// Returns the name of the bound interface.
    pub fn ifr_name(&self) -> &str {
        &self.ifr_name
    }
}

impl Link for PacketSocket {
    fn send(&mut self, buffer: &[u8]) -> Result<()> {
        let ptr = buffer.as_ptr() as *const libc::c_void;
        if unsafe { libc::send(self.fd, ptr, buffer.len(), 0) } == -1 {
            return Err(Error::Socket(std::io::Error::last_os_error()));
        }
        Ok(())
    }

    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let ptr = buffer.as_mut_ptr() as *mut libc::c_void;
        let read = unsafe { libc::recv(self.fd, ptr, buffer.len(), 0) };
        if read == -1 {
            return Err(Error::Socket(std::io::Error::last_os_error()));
        }
        Ok(read as usize)
    }

    fn get_ethernet_addr(&self) -> Result<EthernetAddress> {
        let mut addr = _libc::sockaddr_ll(0, 0);
        let mut addr_len = _libc::sockaddr_ll_len();

        let ret = unsafe {
            libc::getsockname(
                self.fd,
                &mut addr as *mut libc::sockaddr_ll as *mut libc::sockaddr,
                &mut addr_len,
            )
        };

        if ret == -1 {
            return Err(Error::Socket(std::io::Error::last_os_error()));
        }

        let halen = addr.sll_halen as usize;
        if halen > addr.sll_addr.len() {
            return Err(Error::Address);
        }

        EthernetAddress::try_new(&addr.sll_addr[.. halen])
    }
}

impl Drop for PacketSocket {
    fn drop(&mut self) {
        debug!("Closing packet socket {} on {}.", self.fd, self.ifr_name);
        unsafe {
            libc::close(self.fd);
        }
    }
}

impl DataLink<PacketSocket> {
    /// Binds a raw packet socket to a named interface and opens a session on
    /// it.
    ///
    /// # Errors
    ///
    /// See [PacketSocket::bind](struct.PacketSocket.html#method.bind).
    pub fn open(ifr_name: &str, config: &Config) -> Result<DataLink<PacketSocket>> {
        let socket = PacketSocket::bind(ifr_name, config.eth_type)?;
        let datalink = DataLink::new(socket, config)?;
        info!(
            "Opened data link on {} with address {}.",
            ifr_name,
            datalink.ethernet_addr()
        );
        Ok(datalink)
    }

    /// Returns the name of the bound interface.
    pub fn interface(&self) -> &str {
        self.link().ifr_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_missing_interface() {
        assert_matches!(
            PacketSocket::bind("nosuchif0", 0x0700),
            Err(Error::Socket(_))
        );
    }

    #[test]
    #[ignore]
    fn test_loopback_round_trip() {
        // Needs CAP_NET_RAW.
        let config = Config::default();
        let mut datalink = DataLink::open("lo", &config).unwrap();
        assert_eq!(datalink.interface(), "lo");

        let addr = datalink.ethernet_addr();
        datalink.send(addr, b"ping").unwrap();

        // Loopback delivers the outgoing copy and the incoming one.
        let (dst_addr, src_addr, payload) = datalink.recv().unwrap();
        assert_eq!(dst_addr, addr);
        assert_eq!(src_addr, addr);
        assert_eq!(payload, b"ping".to_vec());
    }
}
