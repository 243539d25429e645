use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use wirebug::audio::open_audio;
use wirebug::events::EventBridge;
use wirebug::game::{dispatch, Scheduler};
use wirebug::input::map_key;
use wirebug::{build_info, logging, ui, GameConfig, GameInput, GameMessage, WorldState};

struct CliOptions {
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    muted: bool,
}

fn print_usage() {
    println!(
        "Wirebug - dodge the birds\n\
         \n\
         Usage: wirebug [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --config FILE   Load game tuning from a JSON file\n\
         \x20 --seed N        Seed the bird pattern\n\
         \x20 --mute          Disable sound\n\
         \x20 --version, -v   Show version information\n\
         \x20 --help, -h      Show this help\n\
         \n\
         Keys: ←/→ or A/D move, P pause, R restart, Q quit"
    );
}

fn parse_args() -> CliOptions {
    let args: Vec<String> = std::env::args().collect();
    let mut options = CliOptions {
        config_path: None,
        seed: None,
        muted: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => options.config_path = Some(PathBuf::from(path)),
                    None => fail("--config requires a file path"),
                }
            }
            "--seed" => {
                i += 1;
                match args.get(i).and_then(|s| s.parse().ok()) {
                    Some(seed) => options.seed = Some(seed),
                    None => fail("--seed requires a number"),
                }
            }
            "--mute" => options.muted = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    options
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'wirebug --help' for usage.");
    std::process::exit(1);
}

fn main() -> io::Result<()> {
    let options = parse_args();

    // Config problems are reported before the terminal switches to raw mode
    let config = match GameConfig::resolve(options.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e.to_string()),
    };

    if let Some(path) = logging::default_log_path() {
        if let Err(e) = logging::init(&path) {
            eprintln!("Logging disabled: {}", e);
        }
    }
    log::info!("{}", build_info::version_line());

    let audio = open_audio(options.muted, config.music_volume);
    let rng = match options.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, config, EventBridge::new(audio), rng);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    result
}

/// Frame loop: draw, take at most one key, then feed elapsed time to the scheduler.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    config: GameConfig,
    mut bridge: EventBridge,
    mut rng: StdRng,
) -> io::Result<()> {
    let mut scheduler = Scheduler::new(&config);
    let mut world = WorldState::new(config);
    let mut last_step = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, &world, bridge.best_score()))?;

        let timeout = Duration::from_millis(scheduler.until_next_frame_ms());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                let input = map_key(key);
                if input == GameInput::Quit {
                    log::info!("quit with score {}", world.score);
                    break;
                }
                let events = dispatch(&mut world, GameMessage::Input(input), &mut rng);
                bridge.apply(&events);
            }
        }

        // Carry the sub-millisecond remainder into the next step
        let dt_ms = last_step.elapsed().as_millis() as u64;
        last_step += Duration::from_millis(dt_ms);

        for message in scheduler.advance(dt_ms) {
            let events = dispatch(&mut world, message, &mut rng);
            bridge.apply(&events);
        }
    }

    Ok(())
}
