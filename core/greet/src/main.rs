mod app;
mod env;

use std::process;

fn main() {
    let exit_code = match app::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("greet: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}
