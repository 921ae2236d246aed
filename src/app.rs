//! src/app.rs
//!
//! Live optical-flow dashboard.
//!
//! Polls the sensor's `/data` endpoint on a fixed interval and shows the
//! latest samples as two charts (flow X/Y and height), a flow-vector figure,
//! and a live read-out.
//!
//! # Top-Level Application (`app.rs`)
//!
//! Owns all dashboard state in one [`App`] value, runs the frame loop and maps
//! key presses onto settings edits.
//!
//! ## Overview
//! Each frame the loop:
//! - drains finished fetches from the poller and applies them,
//! - fires the poll timer if it is due,
//! - redraws every panel from the current state,
//! - handles pending key presses.
//!
//! # Building and Running
//!
//! ```text
//! cargo run --release -- --endpoint http://192.168.4.1/data
//! cargo run --release -- --simulate
//! ```
//!
//! Logs go to `flow-monitor.log` (see `--log-file`); `RUST_LOG=debug` adds
//! skipped-tick messages.
//!
//! # Keyboard Controls
//!
//! - **Tab**: Switch focus between the interval and point-count inputs.
//! - **0-9 / Backspace**: Edit the focused input.
//! - **Enter**: Validate and save both settings. On success the window
//!   capacity changes, both values are written to the settings file and the
//!   poll timer restarts at the new interval. On failure nothing changes and
//!   the footer shows what was wrong.
//! - **q / Esc**: Quit and restore the terminal.
//!
//! # Poll Cycle
//!
//! A fetch runs on a worker thread; its outcome is applied here on the loop
//! thread. A failed fetch is logged and skipped, leaving the displayed data
//! as it was. While a fetch is in flight, further due ticks are skipped.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{info, warn};
use ratatui::DefaultTerminal;
use ratatui::layout::Constraint;

use crate::cli::Args;
use crate::graph::{Charts, SampleBuffer, VectorFigure};
use crate::net::{FetchOutcome, HttpSource, Poller, SampleSource, SimulatedSource};
use crate::panels::{
    GraphPanel, HistoryPanel, InfoPanel, LiveValues, SettingsPanel, Status, StatusPanel,
    TitlePanel, VectorPanel,
};
use crate::settings::{FileStore, Settings, SettingsError, SettingsForm, SettingsStore};
use crate::ui::{Node, column, leaf, row};

const FRAME_TIME: Duration = Duration::from_millis(50);

/// Wall-clock time-of-day label for a new sample.
fn timestamp_now() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// All dashboard state, owned by the UI loop.
pub struct App {
    pub settings: Settings,
    pub buffer: SampleBuffer,
    pub charts: Charts,
    pub vector: VectorFigure,
    pub live: Option<LiveValues>,
    pub poller: Poller,
    pub form: SettingsForm,
    pub status: Option<Status>,
    store: Box<dyn SettingsStore>,
    running: bool,
}

impl App {
    /// Restore settings, build empty charts and a neutral vector.
    pub fn new(source: Arc<dyn SampleSource>, store: Box<dyn SettingsStore>) -> Self {
        let settings = Settings::load(store.as_ref());
        info!(
            "starting with interval={}ms points={}",
            settings.poll_interval_ms, settings.buffer_capacity
        );
        Self {
            buffer: SampleBuffer::new(settings.buffer_capacity),
            charts: Charts::new(),
            vector: VectorFigure::draw(0.0, 0.0),
            live: None,
            poller: Poller::new(source, settings.poll_interval()),
            form: SettingsForm::new(&settings),
            status: None,
            settings,
            store,
            running: true,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.poller.start(now);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Apply finished fetches, then fire the timer if due.
    pub fn step(&mut self, now: Instant) {
        while let Some(outcome) = self.poller.try_recv() {
            self.apply_outcome(outcome);
        }
        self.poller.tick(now);
    }

    /// Feed one fetch outcome through buffer, vector and charts.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let reading = match outcome {
            Ok(r) => r,
            Err(e) => {
                warn!("failed to fetch data: {e}");
                return;
            }
        };

        let updated_at = timestamp_now();
        self.buffer.push(reading.to_sample(updated_at.clone()));
        self.vector = VectorFigure::draw(reading.flow_x, reading.flow_y);
        self.charts.update(&self.buffer.snapshot());
        self.live = Some(LiveValues {
            reading,
            updated_at,
        });
    }

    /// Validate, apply, persist and restart the timer.
    ///
    /// Invalid input leaves every value untouched and writes nothing. A storage
    /// failure is reported after the new values are already live.
    pub fn save_settings(
        &mut self,
        interval_input: &str,
        points_input: &str,
        now: Instant,
    ) -> Result<Settings, SettingsError> {
        let settings = Settings::parse(interval_input, points_input)?;

        self.settings = settings;
        self.buffer.set_capacity(settings.buffer_capacity);
        self.poller.restart(settings.poll_interval(), now);
        self.form.reflect(&settings);
        info!(
            "settings saved: interval={}ms points={}",
            settings.poll_interval_ms, settings.buffer_capacity
        );

        settings.persist(self.store.as_mut())?;
        Ok(settings)
    }

    fn submit_form(&mut self, now: Instant) {
        let interval = self.form.interval.clone();
        let points = self.form.points.clone();
        self.status = Some(match self.save_settings(&interval, &points, now) {
            Ok(_) => Status::Info("Settings saved".to_string()),
            Err(e) => {
                warn!("settings not saved: {e}");
                Status::Error(e.to_string())
            }
        });
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => self.form.cycle_focus(),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => self.submit_form(now),
            KeyCode::Char(c) => self.form.input(c),
            _ => {}
        }
    }

    /// Layout tree for one frame.
    fn layout(&self) -> Node<'_> {
        let charts = column(vec![
            (Constraint::Percentage(55), leaf(GraphPanel::new(&self.charts.flow))),
            (Constraint::Percentage(45), leaf(GraphPanel::new(&self.charts.height))),
        ]);

        let side = column(vec![
            (Constraint::Percentage(40), leaf(VectorPanel::new(&self.vector))),
            (
                Constraint::Length(8),
                leaf(InfoPanel::new(
                    self.live.as_ref(),
                    self.buffer.len(),
                    self.buffer.capacity(),
                )),
            ),
            (Constraint::Length(4), leaf(SettingsPanel::new(&self.form))),
            (Constraint::Min(3), leaf(HistoryPanel::new(&self.buffer))),
        ]);

        column(vec![
            (
                Constraint::Length(3),
                leaf(TitlePanel::new(
                    "Optical Flow Monitor",
                    self.poller.source().describe(),
                    self.settings.poll_interval_ms,
                )),
            ),
            (
                Constraint::Min(10),
                row(vec![
                    (Constraint::Percentage(62), charts),
                    (Constraint::Percentage(38), side),
                ]),
            ),
            (Constraint::Length(3), leaf(StatusPanel::new(self.status.as_ref()))),
        ])
    }

    fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while self.is_running() {
            let frame_start = Instant::now();

            self.step(frame_start);
            terminal.draw(|f| self.layout().draw(f, f.area()))?;

            while event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key, Instant::now());
                }
            }

            let elapsed = frame_start.elapsed();
            if elapsed < FRAME_TIME {
                thread::sleep(FRAME_TIME - elapsed);
            }
        }
        self.poller.stop();
        Ok(())
    }
}

fn open_store(args: &Args) -> FileStore {
    match FileStore::open(&args.settings) {
        Ok(store) => {
            info!("settings file {}", store.path().display());
            store
        }
        Err(e) => {
            warn!("{e}; starting from defaults");
            FileStore::empty(&args.settings)
        }
    }
}

pub fn run(args: Args) -> Result<()> {
    let source: Arc<dyn SampleSource> = if args.simulate {
        Arc::new(SimulatedSource::new())
    } else {
        Arc::new(HttpSource::new(
            &args.endpoint,
            Duration::from_millis(args.timeout_ms),
        ))
    };
    info!("polling {}", source.describe());

    let mut app = App::new(source, Box::new(open_store(&args)));
    app.start(Instant::now());

    let mut terminal = ratatui::init();
    let result = app.event_loop(&mut terminal);
    ratatui::restore();
    result
}
