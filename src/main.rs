//! Cat Pong entry point
//!
//! Usage: `cat-pong [settings.json]`. Logs go to stderr (`RUST_LOG=info`),
//! so redirect them when playing: `cat-pong 2>pong.log`.

use std::path::PathBuf;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use cat_pong::consts::TICKS_PER_SECOND;
use cat_pong::platform::TerminalPlatform;
use cat_pong::{Session, Settings, TickClock};

fn main() -> ExitCode {
    env_logger::init();

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    let seed = settings.resolve_seed();
    log::info!("Cat Pong starting with seed {}", seed);

    let platform = match TerminalPlatform::new(&settings) {
        Ok(platform) => platform,
        Err(e) => {
            log::error!("Cannot start terminal frontend: {}", e);
            eprintln!("cat-pong: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new(
        Pcg32::seed_from_u64(seed),
        platform,
        TickClock::fixed(TICKS_PER_SECOND),
    );
    let result = session.run();
    // Hand the terminal back before printing anything
    drop(session);

    match result {
        Ok(end) => {
            log::info!("Exiting cleanly ({:?})", end);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Session aborted: {}", e);
            eprintln!("cat-pong: {e}");
            ExitCode::FAILURE
        }
    }
}
