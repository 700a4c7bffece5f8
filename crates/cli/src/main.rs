fn main() {
    if let Err(e) = classglob_cli::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
