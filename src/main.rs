use log::LevelFilter;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    lispy::cli::run();
}
