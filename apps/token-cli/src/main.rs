use std::time::SystemTime;

use token_cli::{mint_access_token, SecurityConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so stdout carries nothing but the token.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_line_number(false)
        .with_file(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let security = SecurityConfig::default();

    let token = match mint_access_token(SystemTime::now(), &security) {
        Ok(token) => token,
        Err(e) => {
            eprintln!("❌ Failed to mint token: {e}");
            std::process::exit(1);
        }
    };

    tracing::debug!("minted local analyst token");
    println!("{token}");
}
