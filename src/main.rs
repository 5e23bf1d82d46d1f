use std::process::ExitCode;
use tracing::Level;

fn main() -> ExitCode {
    let args = neuradiff::args::parsed();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level).with_writer(std::io::stderr).init();

    match neuradiff::run(&args) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("neuradiff: {e:#}");
            let code = e.downcast_ref::<neuradiff::Error>().map_or(1, neuradiff::Error::exit_code);
            ExitCode::from(code)
        }
    }
}
