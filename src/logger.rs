use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_logger() {
    let base_dir = std::env::current_dir().unwrap_or_default();

    let file_appender = rolling::never(base_dir, "formguard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Filter from environment or default to INFO
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    // leaked guard keeps the file writer alive for the process duration
    std::mem::forget(guard);
}
