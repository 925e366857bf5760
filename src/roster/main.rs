//! The `roster` binary. All terminal concerns live in `cli/`; this file only runs
//! it and turns an error into a non-zero exit.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        log::logger().flush();
        std::process::exit(1);
    }
}
