extern crate adhoc;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;

mod cli;
mod env;

use std::process;

use adhoc::core::configure::{
    configure,
    setup_commands,
};
use adhoc::linux::SystemRunner;

use cli::App;

/// Switches a wireless interface to IBSS mode and joins the ad-hoc network.
/// Needs root.
fn main() {
    env_logger::init();

    let matches = clap::App::new("adhoc_up")
        .with_defaults()
        .arg(
            clap::Arg::with_name("dry-run")
                .long("dry-run")
                .help("Print the setup commands without running them"),
        )
        .get_matches();

    let (interface, config) = cli::config(&matches);

    if matches.is_present("dry-run") {
        for command in setup_commands(&interface, &config) {
            println!("{}", command);
        }
        return;
    }

    if let Err(err) = configure(&mut SystemRunner::new(), &interface, &config) {
        eprintln!("Configuring {} failed: {}", interface, err);
        process::exit(1);
    }

    println!(
        "{} joined '{}' at {} MHz.",
        interface, config.ssid, config.frequency
    );
}
