use colored::Colorize;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use netlab_calc::cli;
use netlab_calc::config::Config;
use std::error::Error;
use std::path::Path;

const LOG_CONFIG: &str = "log4rs.yml";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match cli::run(&args, &config) {
        Ok(out) => {
            println!("{out}");
            Ok(())
        }
        Err(e) => {
            log::warn!("{failed} {args:?}", failed = "failed".on_red());
            eprintln!("{} {e}", "ERR".red());
            std::process::exit(1);
        }
    }
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if Path::new(LOG_CONFIG).exists() {
        log4rs::init_file(LOG_CONFIG, Default::default())?;
    } else {
        let stderr = ConsoleAppender::builder()
            .target(log4rs::append::console::Target::Stderr)
            .encoder(Box::new(PatternEncoder::new("{l} {t} - {m}{n}")))
            .build();
        let config = LogConfig::builder()
            .appender(Appender::builder().build("stderr", Box::new(stderr)))
            .build(Root::builder().appender("stderr").build(log::LevelFilter::Warn))?;
        log4rs::init_config(config)?;
    }
    Ok(())
}
