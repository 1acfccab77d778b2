//! Tank Defense entry point
//!
//! Hosts the simulation either in the terminal (interactive) or headless with
//! the autopilot at the controls.

use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    ExecutableCommand, cursor,
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal,
};

use tank_defense::platform::{FrameClock, HostCommand, KeyTracker};
use tank_defense::renderer::{Canvas, draw_snapshot, present};
use tank_defense::sim::{GameEvent, TickInput, World, autopilot, tick};
use tank_defense::{Settings, Tuning};

#[derive(Debug, Parser)]
#[command(
    name = "tank-defense",
    version,
    about = "Shell the helicopters before their bombs get you"
)]
struct Cli {
    /// Run without a terminal UI, with the autopilot playing
    #[arg(long)]
    headless: bool,

    /// Ticks to simulate in headless mode
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// JSON file with host settings
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Write the final snapshot as JSON to this file (headless mode)
    #[arg(long)]
    dump_snapshot: Option<PathBuf>,
}

fn load_tuning(path: Option<&Path>) -> Tuning {
    let Some(path) = path else {
        return Tuning::default();
    };
    match Tuning::load(path) {
        Ok(tuning) => tuning,
        Err(err) => {
            log::error!("{}; using default tuning", err);
            Tuning::default()
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn log_events(world: &World) {
    for event in world.events() {
        match event {
            GameEvent::ShellFired => log::debug!("Shell fired"),
            GameEvent::BombDropped { slot } => log::debug!("Helicopter {} dropped a bomb", slot),
            GameEvent::HelicopterWrapped { slot } => {
                log::debug!("Helicopter {} flew past", slot)
            }
            GameEvent::HelicopterDowned { slot } => log::info!("Helicopter {} shot down", slot),
            GameEvent::TankHit { lives_left } => log::info!("Tank hit, {} lives left", lives_left),
            GameEvent::GameOver { score } => log::info!("Game over, final score {}", score),
        }
    }
}

/// Tallies for the headless summary
#[derive(Debug, Default)]
struct SessionStats {
    shots: u32,
    kills: u32,
    bombs: u32,
    hits: u32,
}

impl SessionStats {
    fn record(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::ShellFired => self.shots += 1,
                GameEvent::HelicopterDowned { .. } => self.kills += 1,
                GameEvent::BombDropped { .. } => self.bombs += 1,
                GameEvent::TankHit { .. } => self.hits += 1,
                GameEvent::HelicopterWrapped { .. } | GameEvent::GameOver { .. } => {}
            }
        }
    }
}

fn run_headless(
    mut world: World,
    settings: &Settings,
    cli: &Cli,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = TickInput::default();
    let mut stats = SessionStats::default();

    for _ in 0..cli.ticks {
        input = autopilot(&world, &input);
        let hud = tick(&mut world, &input, settings.headless_dt);
        log_events(&world);
        stats.record(world.events());
        if hud.game_over {
            break;
        }
    }

    println!("{}", world.hud());
    println!(
        "ticks: {}  shots: {}  kills: {}  bombs dropped: {}  tank hits: {}",
        world.time_ticks, stats.shots, stats.kills, stats.bombs, stats.hits
    );

    if let Some(path) = &cli.dump_snapshot {
        let json = serde_json::to_string_pretty(&world.snapshot())?;
        std::fs::write(path, json)?;
        log::info!("Snapshot written to {}", path.display());
    }
    Ok(())
}

/// Raw mode and the alternate screen, undone on drop
struct TerminalSession<W: Write> {
    out: W,
    keyboard_enhanced: bool,
}

impl<W: Write> TerminalSession<W> {
    fn start(out: W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut session = Self {
            out,
            keyboard_enhanced: false,
        };
        session.out.execute(terminal::EnterAlternateScreen)?;
        session.out.execute(cursor::Hide)?;

        // Key-release events where the terminal supports them
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            session.keyboard_enhanced = session
                .out
                .execute(PushKeyboardEnhancementFlags(
                    KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
                ))
                .is_ok();
        }
        Ok(session)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if self.keyboard_enhanced {
            let _ = self.out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = self.out.execute(cursor::Show);
        let _ = self.out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_terminal<W: Write>(
    out: &mut W,
    world: &mut World,
    settings: &Settings,
    mut keys: KeyTracker,
    rx: &mpsc::Receiver<Event>,
) -> std::io::Result<()> {
    let mut clock = FrameClock::new();
    // Resized to the terminal on the first frame
    let mut canvas = Canvas::new(0, 0, world.snapshot().playfield);
    let hud_rows = u16::from(settings.show_hud);

    loop {
        let now = Instant::now();
        while let Ok(event) = rx.try_recv() {
            if let Event::Key(key) = event {
                if keys.handle(&key, now) == Some(HostCommand::Quit) {
                    log::info!("Quit requested");
                    return Ok(());
                }
            }
        }

        let dt = clock.tick();
        let input = keys.sample(now);
        let hud = tick(world, &input, dt);
        log_events(world);

        let (cols, rows) = terminal::size()?;
        let rows = rows.saturating_sub(hud_rows).max(1);
        let snap = world.snapshot();
        if canvas.cols() != cols || canvas.rows() != rows {
            canvas = Canvas::new(cols, rows, snap.playfield);
        }
        draw_snapshot(&mut canvas, &snap);
        let status = hud.to_string();
        present(out, &canvas, settings.show_hud.then_some(status.as_str()))?;

        if hud.game_over {
            thread::sleep(settings.game_over_linger());
            return Ok(());
        }

        thread::sleep(settings.frame_sleep());
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.settings.as_deref());
    let tuning = load_tuning(cli.tuning.as_deref());
    let seed = cli.seed.or(settings.seed).unwrap_or_else(time_seed);
    let mut world = World::with_tuning(tuning, seed);

    if cli.headless {
        return run_headless(world, &settings, &cli);
    }

    let result = {
        let mut session = TerminalSession::start(BufWriter::new(stdout()))?;

        // Blocking reads happen on their own thread so the frame loop never stalls
        let (tx, rx) = mpsc::channel::<Event>();
        thread::spawn(move || {
            while let Ok(ev) = event::read() {
                if tx.send(ev).is_err() {
                    break;
                }
            }
        });

        let keys = KeyTracker::new(settings.key_hold_window())
            .with_release_events(session.keyboard_enhanced);
        run_terminal(&mut session.out, &mut world, &settings, keys, &rx)
    };

    result?;
    log::info!(
        "Session ended after {} ticks, score {}, lives {}",
        world.time_ticks,
        world.score,
        world.lives
    );
    if world.is_game_over() {
        println!("The tank ran out of lives. Final score: {}", world.score);
    }
    Ok(())
}
