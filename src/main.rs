use std::io::{self, Write};
use std::process::ExitCode;

use textbook_sort_rs::runner::{self, TestStatus};

fn report(out: &mut impl Write) -> io::Result<TestStatus> {
    let status = runner::run_all(out, &runner::routines())?;
    out.flush()?;

    Ok(status)
}

fn main() -> ExitCode {
    let mut stdout = io::stdout().lock();

    match report(&mut stdout) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Failed to write report: {err}");
            ExitCode::FAILURE
        }
    }
}
