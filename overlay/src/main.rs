use clap::Parser;
use coarsetime::Instant;
use crossbeam_channel::bounded;
use league_common::{config::Config, game_packet::GameTickPacket};
use log::{LevelFilter, info, warn};
#[cfg(debug_assertions)]
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::{
    append::rolling_file::{
        RollingFileAppender,
        policy::compound::{
            CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
        },
    },
    config::{Appender, Config as LogConfig, Logger, Root},
    encode::pattern::PatternEncoder,
};
use macroquad::prelude::*;
use network::{BridgeClient, Feed};
use std::path::PathBuf;

mod load_images;
mod network;
mod pages;
mod recorded;
mod render;
mod scene;
mod splash;
mod state;

use recorded::RecordedFeed;
use render::Renderer;
use scene::Scene;

const APP_NAME: &str = "league-overlay";
const PACKET_CHANNEL_LEN: usize = 8;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[clap(long, short, action(clap::ArgAction::Count))]
    /// Increase the log verbosity
    verbose: u8,

    #[clap(long)]
    /// Directory within which log files will be placed, default is platform dependent
    log_location: Option<PathBuf>,

    #[clap(long, default_value = "5000000")]
    /// Max size in bytes that a log file is allowed to reach before being rolled over
    log_max_file_size: u64,

    #[clap(long, default_value = "3")]
    /// Number of archived logs to keep
    num_old_logs: u32,

    #[clap(long)]
    /// Replay packets from a recording (one JSON packet per line) instead of polling the bridge
    replay: Option<PathBuf>,
}

#[macroquad::main(window_conf())]
async fn main() {
    let args = Cli::parse();
    init_logging(&args);

    let config: Config = match confy::load(APP_NAME, None) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to read config file, overwriting with default. Error: {e}");
            let config = Config::default();
            if let Err(e) = confy::store(APP_NAME, None, &config) {
                warn!("Failed to write default config file: {e}");
            }
            config
        }
    };
    info!(
        "Starting overlay with the {} theme for channel {}",
        config.overlay.theme, config.overlay.twitch_channel
    );
    if config.overlay.experimental_features {
        info!("Experimental features requested, this build has none");
    }

    let feed = match &args.replay {
        Some(path) => Feed::Recorded(
            RecordedFeed::from_file(path)
                .unwrap_or_else(|e| panic!("Couldn't load recording {}: {e}", path.display())),
        ),
        None => {
            let client = BridgeClient::new(&config.bridge).expect("Couldn't create HTTP client!");
            info!("Polling bridge at {}", client.packet_url());
            Feed::Bridge(client)
        }
    };

    let (tx, rx) = bounded::<GameTickPacket>(PACKET_CHANNEL_LEN);
    let period = config.overlay.poll_period();
    let net_worker = std::thread::spawn(move || {
        network::networking_thread(tx, feed, period);
    });

    let scene_renderer = pages::SceneRenderer {
        assets: load_images::Textures::load(&config.overlay.assets_path, config.overlay.theme),
    };
    let mut scene = Scene::regular_overlay();
    let mut renderer = Renderer::new();
    show_mouse(false);

    loop {
        assert!(!net_worker.is_finished(), "Networking thread panikd!");
        clear_background(BLACK);

        let now = Instant::now();
        for packet in rx.try_iter() {
            renderer.render(&packet, &mut scene, now);
        }
        renderer.advance(&mut scene, now);

        scene_renderer.draw(&scene, now);
        next_frame().await;
    }
}

fn init_logging(args: &Cli) {
    let log_level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let log_base_path = args.log_location.clone().unwrap_or_else(|| {
        let mut path = directories::BaseDirs::new()
            .expect("Could not find a directory to store logs")
            .data_local_dir()
            .to_path_buf();
        path.push("league-overlay-logs");
        path
    });
    let mut log_path = log_base_path.clone();
    let mut archived_log_path = log_base_path.clone();
    log_path.push(format!("{APP_NAME}-log.txt"));
    archived_log_path.push(format!("{APP_NAME}-log-{{}}.txt.gz"));

    #[cfg(debug_assertions)]
    println!("Log path: {}", log_path.display());

    // Only log to the console in debug mode
    #[cfg(all(debug_assertions, not(target_os = "windows")))]
    let console_target = Target::Stderr;
    #[cfg(all(debug_assertions, target_os = "windows"))]
    let console_target = Target::Stdout; // Windows apps don't get a stderr handle
    #[cfg(debug_assertions)]
    let console = ConsoleAppender::builder()
        .target(console_target)
        .encoder(Box::new(PatternEncoder::new("[{d} {h({l:5})} {M}] {m}{n}")))
        .build();

    // Setup the file log roller
    let roller = FixedWindowRoller::builder()
        .build(
            archived_log_path
                .as_os_str()
                .to_str()
                .expect("Log path is not valid UTF-8"),
            args.num_old_logs,
        )
        .expect("Couldn't set up log roller");
    let file_policy = CompoundPolicy::new(
        Box::new(SizeTrigger::new(args.log_max_file_size)),
        Box::new(roller),
    );
    let file_appender = RollingFileAppender::builder()
        .append(true)
        .encoder(Box::new(PatternEncoder::new("[{d} {l:5} {M}] {m}{n}")))
        .build(log_path, Box::new(file_policy))
        .expect("Couldn't open log file");

    // Everything outside the overlay only logs errors
    let root = Root::builder().appender("file_appender");
    #[cfg(debug_assertions)]
    let root = root.appender("console");
    let root = root.build(LevelFilter::Error);

    let log_config = LogConfig::builder()
        .appender(Appender::builder().build("file_appender", Box::new(file_appender)));

    #[cfg(debug_assertions)]
    let log_config = log_config.appender(Appender::builder().build("console", Box::new(console)));

    let log_config = log_config
        .logger(Logger::builder().build("league_overlay", log_level))
        .build(root)
        .expect("Invalid logging config");

    log4rs::init_config(log_config).expect("Logging was already initialized");
    log_panics::init();
}

fn window_conf() -> Conf {
    Conf {
        window_title: String::from("League Overlay"),
        window_width: 3840,
        window_height: 1080,
        window_resizable: false,
        ..Default::default()
    }
}
