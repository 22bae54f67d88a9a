use clap::{App, Arg, ArgMatches, SubCommand};

use weblog_rpc::{Dialect, Method};

pub fn command<'a, 'b>() -> App<'a, 'b> {
    SubCommand::with_name("methods")
        .about("List the supported methods and their parameters")
        .arg(
            Arg::with_name("dialect")
                .short("d")
                .long("dialect")
                .takes_value(true)
                .possible_values(&["metaWeblog", "blogger", "wp"])
                .help("Only list the methods of this API"),
        )
}

pub fn run<'a>(args: &ArgMatches<'a>) {
    let dialect = args.value_of("dialect").and_then(Dialect::from_prefix);
    for line in listing(dialect) {
        println!("{}", line);
    }
}

fn listing(dialect: Option<Dialect>) -> Vec<String> {
    Method::all()
        .filter(|method| dialect.map_or(true, |dialect| method.dialect() == dialect))
        .map(|method| {
            let slots: Vec<String> = method.schema().iter().map(ToString::to_string).collect();
            format!("{}({})", method, slots.join(", "))
        })
        .collect()
}
