//! Booking demo server

#![warn(missing_docs)]

mod handler;
mod http;
mod logger;

use log::info;
use room_booking_core::Config;

use crate::handler::DeskHandler;

/// Command line options
#[derive(Debug)]
struct Opts {
    /// Configuration of the room booking system
    config: Config,

    /// Port for the HTTP server to listen on
    port: u16,
    /// Host for the HTTP server to listen on
    host: String,
}

impl Opts {
    fn from_args() -> Self {
        let mut opts = Opts {
            port: 8585,
            host: String::from("127.0.0.1"),
            config: Config::default(),
        };

        let mut option: Option<String> = None;
        for arg in std::env::args().skip(1) {
            if let Some(opt) = option {
                match opt.as_str() {
                    "-port" => opts.port = arg.parse().expect("-port takes a decimal u16"),
                    "-host" => opts.host = arg,
                    "-seed" => {
                        opts.config.seed = Some(arg.parse().expect("-seed takes a decimal u64"))
                    }
                    _ => {
                        eprintln!("Error: ignoring unknown option {opt}");
                        std::process::exit(1);
                    }
                }
                option = None;
            } else {
                option = Some(arg);
            }
        }
        if let Some(opt) = option {
            eprintln!("Error: ignoring leftover option {opt}");
            std::process::exit(1);
        }

        opts
    }
}

fn http_loop(server: &tiny_http::Server, desk: &DeskHandler) {
    loop {
        let rq = server.recv().expect("HTTP receive failed");
        http::handle(rq, desk);
    }
}

fn main() {
    let opts = Opts::from_args();
    logger::init();

    let server = tiny_http::Server::http((opts.host.as_str(), opts.port)).unwrap();
    info!("serving the booking demo on http://{}:{}", opts.host, opts.port);

    http_loop(&server, &DeskHandler::new(&opts.config));
}
