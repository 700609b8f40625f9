use expense_ledger::{cli::run_cli, init};

fn main() {
    init();
    match run_cli() {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    }
}
