#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::{
    Arc,
    Mutex,
};

use adhoc::core::command::{
    Command,
    CommandError,
    Runner,
};
use adhoc::core::config::Config;
use adhoc::core::datalink::DataLink;
use adhoc::core::link::Link;
use adhoc::core::repr::EthernetAddress;
use adhoc::{
    Error,
    Result,
};

lazy_static! {
    pub static ref NODE_A: EthernetAddress =
        EthernetAddress::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x0A]);

    pub static ref NODE_B: EthernetAddress =
        EthernetAddress::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x0B]);

    pub static ref NODE_C: EthernetAddress =
        EthernetAddress::new([0x02, 0x00, 0x00, 0x00, 0x00, 0x0C]);
}

/// A shared radio medium. Every frame sent by a node is heard by every other
/// node, the way an IBSS cell delivers frames to all stations in range.
#[derive(Clone, Default)]
pub struct Air {
    queues: Arc<Mutex<Vec<(EthernetAddress, VecDeque<Vec<u8>>)>>>,
}

impl Air {
    pub fn new() -> Air {
        Air::default()
    }

    /// Attaches a node with the specified hardware address to the medium.
    pub fn attach(&self, addr: EthernetAddress) -> AirLink {
        let mut queues = self.queues.lock().unwrap();
        queues.push((addr, VecDeque::new()));
        AirLink {
            air: self.clone(),
            index: queues.len() - 1,
            addr,
        }
    }

    /// Injects raw bytes as if a foreign station sent them.
    pub fn inject(&self, buffer: &[u8]) {
        for &mut (_, ref mut queue) in self.queues.lock().unwrap().iter_mut() {
            queue.push_back(buffer.to_vec());
        }
    }

    /// Opens a data link session for a node attached to the medium.
    pub fn datalink(&self, addr: EthernetAddress) -> DataLink<AirLink> {
        DataLink::new(self.attach(addr), &Config::default()).unwrap()
    }
}

pub struct AirLink {
    air: Air,
    index: usize,
    addr: EthernetAddress,
}

impl AirLink {
    /// Returns the number of frames waiting to be received.
    pub fn pending(&self) -> usize {
        self.air.queues.lock().unwrap()[self.index].1.len()
    }
}

impl Link for AirLink {
    fn send(&mut self, buffer: &[u8]) -> Result<()> {
        let mut queues = self.air.queues.lock().unwrap();
        for (i, &mut (_, ref mut queue)) in queues.iter_mut().enumerate() {
            if i != self.index {
                queue.push_back(buffer.to_vec());
            }
        }
        Ok(())
    }

    fn recv(&mut self, buffer: &mut [u8]) -> Result<usize> {
        let frame = self.air.queues.lock().unwrap()[self.index].1.pop_front();
        match frame {
            Some(frame) => {
                let len = ::std::cmp::min(frame.len(), buffer.len());
                buffer[.. len].copy_from_slice(&frame[.. len]);
                Ok(len)
            }
            None => Err(Error::Socket(io::Error::new(
                io::ErrorKind::WouldBlock,
                "nothing in the air",
            ))),
        }
    }

    fn get_ethernet_addr(&self) -> Result<EthernetAddress> {
        Ok(self.addr)
    }
}

/// Records every command and fails the nth one (1-based), if any.
#[derive(Default)]
pub struct RecordingRunner {
    pub ran: Vec<Command>,
    pub fail_at: Option<usize>,
}

impl RecordingRunner {
    pub fn failing_at(step: usize) -> RecordingRunner {
        RecordingRunner {
            ran: Vec::new(),
            fail_at: Some(step),
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.ran.iter().map(|command| command.to_string()).collect()
    }
}

impl Runner for RecordingRunner {
    fn run(&mut self, command: &Command) -> ::std::result::Result<(), CommandError> {
        self.ran.push(command.clone());
        if Some(self.ran.len()) == self.fail_at {
            Err(CommandError::Status {
                command: command.clone(),
                code: Some(1),
            })
        } else {
            Ok(())
        }
    }
}
