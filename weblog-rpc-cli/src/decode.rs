use clap::{App, Arg, ArgMatches, SubCommand};
use std::fs::File;
use std::io::{self, Read};
use std::process;
use tracing::info;

use weblog_rpc::{decode_with, RpcCommand, CONFIG};

pub fn command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("decode")
        .about("Decode an XML-RPC method call and print the resulting command as JSON")
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("File holding the request body, standard input if not given"),
        )
        .arg(
            Arg::with_name("pretty")
                .short("p")
                .long("pretty")
                .help("Indent the JSON output"),
        )
}

pub fn run<'a>(args: &ArgMatches<'a>) {
    let payload = match read_payload(args.value_of("input")) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("Couldn't read the request: {}", e);
            process::exit(2);
        }
    };
    info!("decoding {} bytes", payload.len());

    match decode_with(&CONFIG, &payload) {
        Ok(command) => {
            let json = render(&command);
            let output = if args.is_present("pretty") {
                serde_json::to_string_pretty(&json)
            } else {
                serde_json::to_string(&json)
            };
            match output {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("Couldn't serialize the command: {}", e);
                    process::exit(2);
                }
            }
        }
        Err(fault) => {
            eprintln!("fault {}: {}", fault.code(), fault);
            process::exit(1);
        }
    }
}

fn read_payload(path: Option<&str>) -> io::Result<Vec<u8>> {
    let mut payload = Vec::new();
    match path {
        Some(path) => File::open(path)?.read_to_end(&mut payload)?,
        None => io::stdin().read_to_end(&mut payload)?,
    };
    Ok(payload)
}

fn render(command: &RpcCommand) -> serde_json::Value {
    serde_json::to_value(command).unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }))
}
