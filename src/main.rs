fn main() {
    if let Err(err) = wpreport::cli::run() {
        wpreport::ui::eprintln_error(&err);
        std::process::exit(wpreport::exit::exit_code(&err));
    }
}
