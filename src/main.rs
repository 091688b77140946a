fn main() {
    if let Err(e) = whorl::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
