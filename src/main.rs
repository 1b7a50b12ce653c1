mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use space_game::events::play_cues;
use space_game::timers::FrameClock;
use space_game::{Cue, CueSink, GameConfig, GameStateMachine, InputEvent};

const FRAME: Duration = Duration::from_millis(20); // one simulation tick at default config

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Plays every cue as the terminal bell.
struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> CueSink for TerminalBell<W> {
    fn play(&mut self, _cue: Cue) -> std::io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal is in raw mode for the whole run, so logs go to a file and
/// only when `RUST_LOG` asks for them.
fn init_logging() -> Option<PathBuf> {
    std::env::var_os("RUST_LOG")?;
    let path = std::env::temp_dir().join("space_game.log");
    let file = File::create(&path).ok()?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Some(path)
}

// ── Input ─────────────────────────────────────────────────────────────────────

enum Command {
    Game(InputEvent),
    Quit,
}

fn map_key(KeyEvent { code, modifiers, .. }: KeyEvent) -> Option<Command> {
    let input = match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Command::Quit)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Some(Command::Quit),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::MoveLeft,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::MoveRight,
        KeyCode::Char(' ') => InputEvent::Fire,
        KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::ActivateShield,
        KeyCode::Char('1') => InputEvent::SelectEasy,
        KeyCode::Char('2') => InputEvent::SelectHard,
        KeyCode::Enter => InputEvent::Restart,
        _ => return None,
    };
    Some(Command::Game(input))
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Owns the engine for the whole run.  Key events arrive over `rx` from the
/// reader thread and are applied between timer steps, never during one.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut GameStateMachine,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<()> {
    let mut rng = thread_rng();
    let mut bell = TerminalBell { out: stdout() };
    let mut clock = FrameClock::new();
    let mut last = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(key) = ev else { continue };
            if key.kind == KeyEventKind::Release {
                continue;
            }
            match map_key(key) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Game(input)) => game.handle_input(input),
                None => {}
            }
        }

        // ── Advance timers by the real time that passed ───────────────────────
        let now = Instant::now();
        let elapsed = clock.take_ms(now.duration_since(last));
        last = now;
        game.advance(elapsed, &mut rng);

        let events = game.drain_events();
        play_cues(&events, &mut bell);

        display::render(out, &game.snapshot()).context("drawing frame")?;

        let spent = frame_start.elapsed();
        if spent < FRAME {
            thread::sleep(FRAME - spent);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => GameConfig::load(&PathBuf::from(path))?,
        None => GameConfig::default(),
    };
    if let Some(path) = init_logging() {
        log::info!("logging to {}", path.display());
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("enabling raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut game = GameStateMachine::new(config);
    let result = game_loop(&mut out, &mut game, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}
