use std::{env, fs, io::Read};

use anyhow::Context;
use chatlog_tools::{convert_to_html, storage, Config, LogCustom};

/// Converts a chat log to HTML.
///
/// Usage: `cargo run --example convert_log -- [log.txt] [state]`
/// where `state` is a compressed storage string (cookie value or `?style=`
/// parameter). Without a log file the text is read from stdin.
fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = env::args().skip(1);
    let text = match args.next() {
        Some(path) => fs::read_to_string(&path).with_context(|| format!("reading {}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let (log_custom, config) = match args.next() {
        Some(compressed) => {
            let state = storage::decompress_state(&compressed)?;
            log::info!("Loaded stored state");
            (
                state.log_custom.unwrap_or_default(),
                state.config.unwrap_or_default(),
            )
        }
        None => (LogCustom::default(), Config::default()),
    };

    let html = convert_to_html(&text, &config, &log_custom)?;
    log::info!("Converted {} bytes of log into {} bytes of HTML", text.len(), html.len());
    println!("{}", html);

    if config.change_mode {
        let next = config.after_conversion();
        log::info!("Next conversion will use {:?}", next.selected_mode);
    }
    Ok(())
}
