use std::process;

use clap::{App, Arg};
use log::debug;

use vacuum_planner::config::Method;
use vacuum_planner::{LoadLevel, Solve};

fn main() {
    env_logger::init();

    let matches = App::new("vacuum-planner")
        .author("martin-t")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plans how a cleaning robot vacuums every dirty cell of a grid world")
        .arg(
            Arg::with_name("stats")
                .short("s")
                .long("stats")
                .help("Print per-depth search statistics to stderr"),
        )
        .arg(
            Arg::with_name("show")
                .short("w")
                .long("show")
                .help("Print the world after every action of the plan to stderr"),
        )
        .arg(
            Arg::with_name("algorithm")
                .required(true)
                .possible_values(&Method::NAMES)
                .help("Search algorithm"),
        )
        .arg(
            Arg::with_name("world")
                .required(true)
                .help("World description file"),
        )
        .get_matches();

    // clap restricts the value to Method::NAMES
    let method: Method = matches
        .value_of("algorithm")
        .unwrap_or_default()
        .parse()
        .unwrap_or_else(|err| {
            eprintln!("{}", err);
            process::exit(1);
        });
    let path = matches.value_of("world").unwrap_or_default();

    let level = path.load_level().unwrap_or_else(|err| {
        eprintln!("Error reading world file {}: {}", path, err);
        process::exit(1);
    });
    debug!("Loaded {}:\n{}", path, level);

    let solution = level.solve(method);
    print!("{}", solution);

    if matches.is_present("show") {
        if let Some(ref actions) = solution.actions {
            eprint!("{}", level.format_solution(actions));
        }
    }
    if matches.is_present("stats") {
        eprintln!("{:?}", solution);
        eprint!("{}", solution.stats.table());
    }
}
