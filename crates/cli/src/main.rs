use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "usage: theater-statement <plays.json> <invoices.json>";

fn main() -> ExitCode {
    theater_observability::init();

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let (Some(plays), Some(invoices), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };

    let result = theater_cli::load_config()
        .and_then(|config| theater_cli::run(&plays, &invoices, &config));

    match result {
        Ok(statements) => {
            for statement in statements {
                print!("{statement}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", theater_cli::error_report(&err));
            ExitCode::FAILURE
        }
    }
}
