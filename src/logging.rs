use tracing_subscriber::EnvFilter;

use crate::cli::Log;

pub fn init(log: &Log) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match log {
        Log::Plain => subscriber.init(),
        Log::Json => subscriber.json().init(),
    }
}
