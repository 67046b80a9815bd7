use clap;

use adhoc::core::config::Config;

use env;

pub trait App {
    fn with_defaults(self) -> Self;
}

impl<'a, 'b> App for clap::App<'a, 'b> {
    fn with_defaults(self) -> Self {
        self.arg(
            clap::Arg::with_name("interface")
                .long("interface")
                .short("i")
                .value_name("IFACE")
                .help("Wireless interface")
                .default_value(env::DEFAULT_INTERFACE)
                .takes_value(true),
        ).arg(
                clap::Arg::with_name("ssid")
                    .long("ssid")
                    .value_name("SSID")
                    .help("SSID of the ad-hoc network")
                    .default_value(&env::DEFAULT_SSID)
                    .takes_value(true),
            )
            .arg(
                clap::Arg::with_name("frequency")
                    .long("frequency")
                    .value_name("MHZ")
                    .help("Frequency of the ad-hoc network in MHz")
                    .default_value(&env::DEFAULT_FREQUENCY)
                    .takes_value(true),
            )
    }
}

/// Returns the interface name and network parameters from parsed arguments.
pub fn config(matches: &clap::ArgMatches) -> (String, Config) {
    let interface = matches.value_of("interface").unwrap().to_string();

    let frequency = matches
        .value_of("frequency")
        .and_then(|frequency| frequency.parse::<u32>().ok())
        .expect("Bad frequency!");

    let config = env::DEFAULT_CONFIG
        .clone()
        .with_ssid(matches.value_of("ssid").unwrap())
        .with_frequency(frequency);

    (interface, config)
}
