//! Network parameters shared by the interface setup and the data link.

use core::repr::eth_types;

/// SSID of the ad-hoc network nodes join by default.
pub const DEFAULT_SSID: &str = "KnowledgeNet";

/// Frequency of the ad-hoc network in MHz (2.4 GHz band, channel 2).
pub const DEFAULT_FREQUENCY: u32 = 2417;

/// Number of bytes read from a link per received frame.
pub const RECV_BUFFER_LEN: usize = 4096;

/// Parameters of the ad-hoc network and the frames exchanged over it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// SSID of the IBSS network to join.
    pub ssid: String,
    /// Frequency of the IBSS network in MHz.
    pub frequency: u32,
    /// EtherType stamped on sent frames and used to open raw sockets.
    pub eth_type: u16,
}

impl Config {
    pub fn with_ssid<S: Into<String>>(mut self, ssid: S) -> Config {
        self.ssid = ssid.into();
        self
    }

    pub fn with_frequency(mut self, frequency: u32) -> Config {
        self.frequency = frequency;
        self
    }

    pub fn with_eth_type(mut self, eth_type: u16) -> Config {
        self.eth_type = eth_type;
        self
    }
}

impl Default for Config {
    fn default() -> Config {
        Config {
            ssid: DEFAULT_SSID.to_string(),
            frequency: DEFAULT_FREQUENCY,
            eth_type: eth_types::ADHOC,
        }
    }
}
