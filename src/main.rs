use chatroom::ClockFormat;
use chatroom::core::config::{self, ChatConfig, CliOverrides};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "chatroom", about = "Terminal chat room with a local message log")]
struct Args {
    /// Display name used as the sender of your messages
    #[arg(short, long)]
    name: Option<String>,

    /// Clock format for message timestamps
    #[arg(short, long, value_enum)]
    clock: Option<ClockFormat>,

    /// Title shown in the header bar
    #[arg(short, long)]
    title: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("chatroom.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        ChatConfig::default()
    });

    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            display_name: args.name.as_deref(),
            room_title: args.title.as_deref(),
            clock: args.clock,
        },
    );

    log::info!(
        "Chatroom starting up as {:?} ({} users in roster, {} clock)",
        resolved.display_name,
        resolved.users.len(),
        resolved.clock.label()
    );

    chatroom::tui::run(resolved)
}
