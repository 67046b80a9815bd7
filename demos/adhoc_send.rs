extern crate adhoc;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;

mod cli;
mod env;

use std::process;
use std::str::FromStr;

use adhoc::core::datalink::DataLink;
use adhoc::core::repr::EthernetAddress;

use cli::App;

/// Sends a single message to one node, or to every node in range when the
/// address is omitted.
fn main() {
    env_logger::init();

    let matches = clap::App::new("adhoc_send")
        .with_defaults()
        .arg(
            clap::Arg::with_name("MESSAGE")
                .help("Message to send")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::with_name("ADDRESS")
                .help("MAC address of the receiving node")
                .index(2),
        )
        .get_matches();

    let (interface, config) = cli::config(&matches);
    let message = matches.value_of("MESSAGE").unwrap();

    let dst_addr = matches
        .value_of("ADDRESS")
        .map(|addr| EthernetAddress::from_str(addr).expect("Bad MAC address!"))
        .unwrap_or(EthernetAddress::BROADCAST);

    let result = DataLink::open(&interface, &config)
        .and_then(|mut datalink| datalink.send(dst_addr, message.as_bytes()));

    if let Err(err) = result {
        eprintln!("Sending to {} failed: {}", dst_addr, err);
        process::exit(1);
    }
}
