use env_logger::{Builder, Env};
use log::error;

fn init_logger() {
    // Уровень берём из RUST_LOG, иначе дефолт — info.
    // Пример: RUST_LOG=debug ./tdcache decode ...
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = tdata_cache::cli::run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}
