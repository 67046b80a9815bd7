extern crate adhoc;
extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate lazy_static;

mod cli;
mod env;

use std::io;
use std::sync::mpsc;
use std::thread;

use adhoc::core::datalink::DataLink;

use cli::App;

/// Broadcasts lines read from stdin and prints every frame received on the
/// interface. Run adhoc_up first.
fn main() {
    env_logger::init();

    let matches = clap::App::new("adhoc_chat").with_defaults().get_matches();
    let (interface, config) = cli::config(&matches);

    let mut sender = DataLink::open(&interface, &config).expect("Opening data link!");
    let mut receiver = DataLink::open(&interface, &config).expect("Opening data link!");

    println!(
        "Chatting on {} as {}; type a line to broadcast it.",
        interface,
        sender.ethernet_addr()
    );

    let (send, recv) = mpsc::channel::<String>();

    thread::spawn(move || loop {
        let (dst_addr, src_addr, payload) = match receiver.recv() {
            Ok(frame) => frame,
            Err(err) => {
                eprintln!("Receiving failed: {}", err);
                continue;
            }
        };
        if src_addr == receiver.ethernet_addr() {
            continue;
        }
        println!(
            "[{} -> {}] {}",
            src_addr,
            dst_addr,
            String::from_utf8_lossy(&payload).trim_end()
        );
    });

    thread::spawn(move || loop {
        let mut buf = String::new();
        match io::stdin().read_line(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(_) => if send.send(buf).is_err() {
                break;
            },
        }
    });

    for line in recv {
        if let Err(err) = sender.broadcast(line.as_bytes()) {
            eprintln!("Broadcasting failed: {}", err);
        }
    }
}
