//! todo - edit markdown checklists by line number

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = todo_md::cli::run() {
        match e.downcast_ref::<clap::Error>() {
            Some(usage) => {
                let _ = usage.print();
            }
            None => eprintln!("Error: {:#}", e),
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
