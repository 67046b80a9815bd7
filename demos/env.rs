use adhoc::core::config::{
    self,
    Config,
};

/// Default wireless interface.
pub static DEFAULT_INTERFACE: &str = "wlan0";

lazy_static! {
    /// Default ad-hoc network parameters.
    pub static ref DEFAULT_CONFIG: Config = Config::default();

    /// Default SSID as a command line default value.
    pub static ref DEFAULT_SSID: String = config::DEFAULT_SSID.to_string();

    /// Default frequency as a command line default value.
    pub static ref DEFAULT_FREQUENCY: String = config::DEFAULT_FREQUENCY.to_string();
}
