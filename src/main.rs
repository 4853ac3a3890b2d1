fn main() {
    if let Err(err) = hello_scaffold::run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
