fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("SCANPRINT_LOG", "warn"))
        .init();

    if let Err(err) = scanprint::cli::run() {
        scanprint::ui::eprintln_error(&err);
        std::process::exit(scanprint::exit::exit_code(&err));
    }
}
