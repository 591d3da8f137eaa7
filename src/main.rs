fn main() {
    #[cfg(feature = "cli")]
    resdiff::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("resdiff: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
