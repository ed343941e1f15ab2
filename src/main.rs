//! PyInstaller wizard - interactive front-end for packaging Python scripts.
//!
//! Locates PyInstaller, asks for the script and packaging options, shows the
//! resulting command and runs it after confirmation.

use pyinstaller_wizard::cli::{self, Args, RuntimeConfig};

fn main() {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);

    // Initialize logging
    let env = env_logger::Env::default().default_filter_or(config.log_filter());
    env_logger::Builder::from_env(env).init();

    // Outcomes are reported on stdout; the exit status is always success
    if let Err(e) = cli::run(&config) {
        eprintln!("Error: {}", e);
    }
}
