use std::path::PathBuf;

/// Load environment variables from `.env` in the current directory.
///
/// Runs before argument parsing so `DATABASE_URL` and friends reach clap's
/// `env` fallbacks; tracing is not initialized yet, so the caller logs the
/// returned path. Variables already set in the environment win.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}
