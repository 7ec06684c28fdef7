use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

use raidcheck::commands;

fn cli() -> Command {
    Command::new("raidcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Monitoring plugin for MegaRAID controllers on ESXi hosts, via storcli over esxcli")
        .after_help(
            "Examples:\n  raidcheck -H 10.10.10.20 -u nagios\n  raidcheck -H 10.10.10.20 -u nagios -v 0\n  raidcheck -H 10.10.10.20 -u nagios -c 1\n\n\
             Output toggles (environment): ENABLE_PERFDATA, ENABLE_LONG_OUTPUT, SHOW_HOST, TERSE_OUTPUT",
        )
        .arg(
            Arg::new("host")
                .short('H')
                .long("host")
                .value_name("HOST")
                .help("ESXi host IP address")
                .required(true),
        )
        .arg(
            Arg::new("user")
                .short('u')
                .long("user")
                .value_name("USER")
                .help("Username for ESXi connection")
                .required(true),
        )
        .arg(
            Arg::new("vd")
                .short('v')
                .long("vd")
                .value_name("NUM")
                .help("Check specific virtual drive number")
                .value_parser(clap::value_parser!(u32)),
        )
        .arg(
            Arg::new("controller")
                .short('c')
                .long("controller")
                .value_name("ID")
                .help("Controller ID")
                .value_parser(clap::value_parser!(u32))
                .default_value("0"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("Timeout per storcli command in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("60"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("JSON site config (thumbprints, esxcli path, thresholds)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("replay")
                .long("replay")
                .value_name("DIR")
                .help("Evaluate captured storcli output from DIR instead of querying the host")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose-log")
                .long("debug")
                .help("Log every command and check to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = cli().get_matches();

    if matches.get_flag("verbose-log") && std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "debug");
    }
    raidcheck::init_logging();

    let verdict = commands::check(&matches);
    println!("{}", verdict.message);
    std::process::exit(verdict.state.code());
}
