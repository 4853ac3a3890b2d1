fn main() {
    if let Err(err) = hello_scaffold::run_manage() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
