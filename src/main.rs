use clap::Parser;
use http_json_graphite::config::Args;
use http_json_graphite::config::Config;
use http_json_graphite::config::argument_error_state;
use http_json_graphite::execute;
use http_json_graphite::exit_code;
use simplelog::WriteLogger;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return exit_code(argument_error_state(&e));
        }
    };

    let log_config = simplelog::Config::default();
    if let Err(e) = WriteLogger::init(args.log_level(), log_config, io::stderr()) {
        eprintln!("logging unavailable: {}", e);
    }

    let config = Config::from(args);
    exit_code(execute(&config, io::stdout().lock()))
}
