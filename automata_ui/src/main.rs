// main.rs - Interactive cellular automata on top of the `automata` core

use std::time::{Duration, Instant};

use anyhow::{Context, anyhow};
use clap::Parser;
use eframe::egui;
use log::{LevelFilter, info};
use simple_logger::SimpleLogger;

use automata::{AutomatonId, DEFAULT_SIDE, Session, SessionConfig};

mod input;
mod palette;
mod render;
mod ui;

use input::{Command, Mouse};
use render::History;

/// Frames drawn per second; the simulation ticks once per frame.
const FRAME_RATE: u64 = 60;

#[derive(Parser, Debug)]
#[command(version, about = "Paint a grid and watch cellular automata evolve it")]
struct Args {
    /// Side length of the shared 2-D grid
    #[arg(long, default_value_t = DEFAULT_SIDE)]
    side: usize,

    /// Automaton shown at startup (rule30, rule90, rule110, life,
    /// brians-brain, wireworld, langtons-ant)
    #[arg(long, default_value = "langtons-ant")]
    automaton: AutomatonId,

    /// Frames to wait between generations; 0 is fastest
    #[arg(long, default_value_t = 0)]
    speed: u32,

    /// On-screen size of one 2-D cell in points
    #[arg(long, default_value_t = 6.0)]
    cell_size: f32,

    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        SessionConfig {
            side: self.side,
            active: self.automaton,
            speed: self.speed,
            ..SessionConfig::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    SimpleLogger::new()
        .with_level(args.log_level)
        .init()
        .context("failed to initialise logging")?;
    info!("Starting cellular automata v{} ...", env!("CARGO_PKG_VERSION"));

    let session = Session::new(&args.session_config()).context("invalid automaton setup")?;
    let app = CellularApp::new(session, args.side as f32 * args.cell_size);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([app.canvas_size + 40.0, app.canvas_size + 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Cellular Automata",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
    .map_err(|err| anyhow!("window closed with an error: {err}"))
}

/// UI state wrapped around the controller.
pub struct CellularApp {
    pub session: Session,
    pub canvas_size: f32,
    pub selected_pattern: usize,
    history: History,
    history_for: AutomatonId,
    mouse: Mouse,
    texture: Option<egui::TextureHandle>,
    last_tick: Instant,
    frame_interval: Duration,
    seed: u64,
}

impl CellularApp {
    pub fn new(session: Session, canvas_size: f32) -> Self {
        let history_for = session.active_id();
        let rows = session.active().grid().borrow().side();
        Self {
            session,
            canvas_size,
            selected_pattern: 0,
            history: History::new(rows.saturating_sub(1)),
            history_for,
            mouse: Mouse::default(),
            texture: None,
            last_tick: Instant::now(),
            frame_interval: Duration::from_millis(1000 / FRAME_RATE),
            seed: 0,
        }
    }

    /// Forwards a command to the session, dropping the 1-D history when the
    /// picture it belongs to goes away.
    pub fn run(&mut self, command: Command) {
        input::apply(&mut self.session, command);
        if command == Command::Clear {
            self.history.clear();
        }
        self.sync_history();
    }

    pub fn load_selected_pattern(&mut self) {
        if let Some(pattern) = automata::patterns::PATTERNS.get(self.selected_pattern) {
            if pattern.fits(self.session.active().rule()) {
                self.session.load_pattern(pattern);
                self.history.clear();
            }
        }
    }

    pub fn randomize(&mut self) {
        self.seed = self.seed.wrapping_add(1);
        self.session.randomize(self.seed ^ self.session.generation());
        self.history.clear();
    }

    /// Runs the simulation for this frame if a frame interval has passed.
    fn advance(&mut self) {
        if self.last_tick.elapsed() < self.frame_interval {
            return;
        }
        self.last_tick = Instant::now();

        let before = {
            let grid = self.session.active().grid().borrow();
            (grid.dimensionality() == automata::Dimensionality::One).then(|| grid.cells().to_vec())
        };
        if self.session.tick() {
            if let Some(row) = before {
                self.history.push(row);
            }
        }
    }

    fn sync_history(&mut self) {
        let active = self.session.active_id();
        if active != self.history_for {
            let rows = self.session.active().grid().borrow().side();
            self.history.clear();
            self.history.resize(rows.saturating_sub(1));
            self.history_for = active;
        }
    }
}
