fn main() {
    #[cfg(feature = "cli")]
    rlenc::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("rlenc: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
