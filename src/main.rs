use anyhow::Result;
use rune_mobile_core::{config::Config, validation};
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rune_mobile_core=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;

    // Resolve the active locale once; a bad fallback stops startup here
    let translator = config.translator()?;
    let locale = translator.locale();
    info!(
        "{}",
        translator.translate_with("locale.active", &[("language", locale.native_name)])
    );

    let usernames: Vec<String> = std::env::args().skip(1).collect();
    if usernames.is_empty() {
        println!("{}", translator.translate("username.rules"));
        return Ok(());
    }

    let mut invalid = 0;
    for username in &usernames {
        let args = [("username", username.as_str())];
        match validation::check_username(username) {
            Ok(()) => println!("{}", translator.translate_with("username.valid", &args)),
            Err(e) => {
                warn!(username = %username, reason = %e, "Rejected username");
                invalid += 1;
                println!("{}", translator.translate_with("username.invalid", &args));
            }
        }
    }

    if invalid > 0 {
        println!("{}", translator.translate("username.rules"));
        std::process::exit(1);
    }

    Ok(())
}
