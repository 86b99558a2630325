use stockdemo::{demos, Console, Settings};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // First argument sets the log level, environment sets the rest
    let args: Vec<String> = std::env::args().collect();
    let settings = Settings::load(&args)?;

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .with_max_level(settings.log_level)
        .init();

    tracing::info!("Log level set to: {}", settings.log_level);

    let console = Console::new();
    demos::run_all(&console);

    print!("{}", console.render(settings.format)?);

    Ok(())
}
