use clap::App;
use tracing_subscriber::EnvFilter;

mod decode;
mod methods;

fn main() {
    let mut app = App::new("weblog-rpc CLI")
        .bin_name("wrpc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect MetaWeblog, Blogger and WordPress XML-RPC calls.")
        .subcommand(decode::command())
        .subcommand(methods::command());
    let matches = app.clone().get_matches();

    match dotenv::dotenv() {
        Ok(path) => eprintln!("Configuration read from {}", path.display()),
        Err(ref e) if e.not_found() => {}
        Err(e) => eprintln!("Couldn't read .env: {}", e),
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        ("decode", Some(args)) => decode::run(args),
        ("methods", Some(args)) => methods::run(args),
        _ => app.print_help().expect("Couldn't print help"),
    };
}
