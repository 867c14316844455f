use nscli::NscliError;
use std::process;

fn main() {
    if let Err(e) = nscli::cli::run() {
        match &e {
            NscliError::Usage(err) => {
                let _ = err.print();
            }
            _ => eprintln!("Error: {}", e),
        }
        process::exit(e.exit_code());
    }
}
