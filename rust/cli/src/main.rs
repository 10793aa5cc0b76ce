use std::io;

fn main() {
    lumo_cli::logging::init_logging();
    let code = lumo_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
