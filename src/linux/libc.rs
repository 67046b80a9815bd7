use std;
use std::ffi::CString;
use std::io::{
    Error as IOError,
    ErrorKind,
};

use libc;

/// Returns the index of the network interface with the specified name.
///
/// See [if_nametoindex](http://man7.org/linux/man-pages/man3/if_nametoindex.3.html).
pub fn if_nametoindex(ifr_name: &str) -> std::io::Result<libc::c_int> {
    if ifr_name.is_empty() || ifr_name.len() >= libc::IF_NAMESIZE {
        return Err(IOError::new(
            ErrorKind::InvalidInput,
            format!("bad interface name '{}'", ifr_name),
        ));
    }

    let c_name = CString::new(ifr_name).map_err(|err| IOError::new(ErrorKind::InvalidInput, err))?;

    match unsafe { libc::if_nametoindex(c_name.as_ptr()) } {
        0 => Err(IOError::last_os_error()),
        ifindex => Ok(ifindex as libc::c_int),
    }
}

/// Creates a [link layer socket address](http://man7.org/linux/man-pages/man7/packet.7.html)
/// for an interface and EtherType in host byte order.
pub fn sockaddr_ll(ifindex: libc::c_int, eth_type: u16) -> libc::sockaddr_ll {
    let mut addr: libc::sockaddr_ll = unsafe { std::mem::zeroed() };
    addr.sll_family = libc::AF_PACKET as libc::c_ushort;
    addr.sll_protocol = eth_type.to_be();
    addr.sll_ifindex = ifindex;
    addr
}

/// Length of a link layer socket address.
pub fn sockaddr_ll_len() -> libc::socklen_t {
    std::mem::size_of::<libc::sockaddr_ll>() as libc::socklen_t
}
