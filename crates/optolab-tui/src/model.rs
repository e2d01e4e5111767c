//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, trace};

use optolab_core::{EvaluationResult, Experiment, ExperimentParams};

use crate::caption::render_caption;
use crate::chart::render_output;
use crate::controls::render_controls;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, LogScrollState};
use crate::messages::LabMessage;
use crate::styles::ColorTheme;

const MAX_LOGS: usize = 500;
const PAGE_STEPS: i32 = 10;

/// Screen regions; `caption` and `logs` are absent when hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabLayout {
    pub header: Rect,
    pub controls: Rect,
    pub output: Rect,
    pub caption: Option<Rect>,
    pub logs: Option<Rect>,
    pub footer: Rect,
}

/// TUI application state (Elm Model).
pub struct LabApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Experiment on screen.
    pub experiment: Experiment,
    /// Control values in `experiment.controls()` order.
    pub values: Vec<f64>,
    /// Index of the selected control.
    pub selected: usize,
    /// Latest accepted evaluation.
    pub result: Option<EvaluationResult>,
    /// Log messages.
    pub logs: Vec<String>,
    pub log_scroll: LogScrollState,
    pub show_caption: bool,
    pub show_logs: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    tx: Sender<LabMessage>,
    rx: Receiver<LabMessage>,
    /// Generation of the most recent evaluation request.
    generation: u64,
    theme: ColorTheme,
}

impl LabApp {
    /// Create the app on `params` and queue their first evaluation.
    #[must_use]
    pub fn new(params: ExperimentParams) -> Self {
        let (tx, rx) = unbounded();
        let mut app = Self {
            should_quit: false,
            experiment: params.experiment(),
            values: params.values(),
            selected: 0,
            result: None,
            logs: Vec::new(),
            log_scroll: LogScrollState::new(),
            show_caption: true,
            show_logs: true,
            terminal_width: 80,
            terminal_height: 24,
            tx,
            rx,
            generation: 0,
            theme: ColorTheme::default(),
        };
        app.request_evaluation();
        app
    }

    /// Get the current generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bump the generation and evaluate the current values once.
    pub fn request_evaluation(&mut self) {
        self.generation += 1;
        let generation = self.generation;
        let experiment = self.experiment;
        debug!(
            generation,
            experiment = experiment.slug(),
            values = ?self.values,
            "evaluation requested"
        );
        let message = match ExperimentParams::from_values(experiment, &self.values)
            .and_then(|params| params.evaluate_checked())
        {
            Ok(result) => LabMessage::Evaluated {
                generation,
                experiment,
                result,
            },
            Err(err) => LabMessage::Error(err.to_string()),
        };
        // rx lives as long as self
        let _ = self.tx.send(message);
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: LabMessage) {
        match msg {
            LabMessage::Evaluated {
                generation,
                experiment,
                result,
            } => {
                if generation < self.generation || experiment != self.experiment {
                    trace!(generation, current = self.generation, "stale evaluation dropped");
                    return;
                }
                let summary = match &result {
                    EvaluationResult::Scalar(readout) => readout.to_string(),
                    EvaluationResult::Curve(curve) => {
                        format!("{} ({} points)", curve.title, curve.len())
                    }
                };
                self.push_log(format!("[INFO] #{generation} {}: {summary}", experiment.slug()));
                self.result = Some(result);
            }
            LabMessage::Log(line) => self.push_log(line),
            LabMessage::Error(err) => self.push_log(format!("[ERROR] {err}")),
            LabMessage::KeyPress(action) => self.handle_key_action(action),
            LabMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            LabMessage::Quit => self.should_quit = true,
        }
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
            self.log_scroll.on_trim();
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::NextExperiment => self.switch_to(self.experiment.next()),
            KeyAction::PreviousExperiment => self.switch_to(self.experiment.previous()),
            KeyAction::SelectExperiment(index) => {
                if let Some(&experiment) = Experiment::ALL.get(index) {
                    self.switch_to(experiment);
                }
            }
            KeyAction::SelectUp => {
                let count = self.values.len().max(1);
                self.selected = (self.selected + count - 1) % count;
            }
            KeyAction::SelectDown => {
                self.selected = (self.selected + 1) % self.values.len().max(1);
            }
            KeyAction::Decrease => self.nudge_selected(-1),
            KeyAction::Increase => self.nudge_selected(1),
            KeyAction::PageDecrease => self.nudge_selected(-PAGE_STEPS),
            KeyAction::PageIncrease => self.nudge_selected(PAGE_STEPS),
            KeyAction::Minimum => {
                if let Some(spec) = self.experiment.controls().get(self.selected) {
                    self.set_selected(spec.min);
                }
            }
            KeyAction::Maximum => {
                if let Some(spec) = self.experiment.controls().get(self.selected) {
                    self.set_selected(spec.max);
                }
            }
            KeyAction::Reset => self.reset(),
            KeyAction::ToggleCaption => self.show_caption = !self.show_caption,
            KeyAction::ToggleLogs => self.show_logs = !self.show_logs,
            KeyAction::LogScrollUp => self.log_scroll.scroll_up(),
            KeyAction::LogScrollDown => self.log_scroll.scroll_down(self.logs.len()),
            KeyAction::None => {}
        }
    }

    /// Show `experiment` at its defaults.
    pub fn switch_to(&mut self, experiment: Experiment) {
        if experiment == self.experiment {
            return;
        }
        debug!(from = self.experiment.slug(), to = experiment.slug(), "experiment selected");
        self.experiment = experiment;
        self.values = experiment.default_params().values();
        self.selected = 0;
        self.result = None;
        self.request_evaluation();
    }

    /// Restore every control of the current experiment to its default.
    pub fn reset(&mut self) {
        self.values = self.experiment.default_params().values();
        self.request_evaluation();
    }

    fn nudge_selected(&mut self, steps: i32) {
        if let Some(spec) = self.experiment.controls().get(self.selected) {
            let current = self.values[self.selected];
            self.set_selected(spec.nudge(current, steps));
        }
    }

    fn set_selected(&mut self, value: f64) {
        let Some(slot) = self.values.get_mut(self.selected) else {
            return;
        };
        if (*slot - value).abs() > f64::EPSILON {
            *slot = value;
            self.request_evaluation();
        }
    }

    /// Compute the screen layout: controls left, output right, info strip below.
    #[must_use]
    pub fn compute_layout(area: Rect, show_caption: bool, show_logs: bool) -> LabLayout {
        let info_height = if show_caption || show_logs { 7 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // header
                Constraint::Min(6),              // controls + output
                Constraint::Length(info_height), // caption + logs
                Constraint::Length(2),           // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(outer[1]);

        let (caption, logs) = match (show_caption, show_logs) {
            (true, true) => {
                let info = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                    .split(outer[2]);
                (Some(info[0]), Some(info[1]))
            }
            (true, false) => (Some(outer[2]), None),
            (false, true) => (None, Some(outer[2])),
            (false, false) => (None, None),
        };

        LabLayout {
            header: outer[0],
            controls: main[0],
            output: main[1],
            caption,
            logs,
            footer: outer[3],
        }
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let layout = Self::compute_layout(frame.area(), self.show_caption, self.show_logs);

        render_header(frame, layout.header, self.experiment, &self.theme);
        render_controls(
            frame,
            layout.controls,
            self.experiment.controls(),
            &self.values,
            self.selected,
            &self.theme,
        );
        render_output(frame, layout.output, self.result.as_ref(), &self.theme);

        if let Some(area) = layout.caption {
            let details = ExperimentParams::from_values(self.experiment, &self.values)
                .map(|params| params.details())
                .unwrap_or_default();
            render_caption(frame, area, self.experiment.caption(), &details, &self.theme);
        }
        if let Some(area) = layout.logs {
            render_logs(frame, area, &self.logs, &self.log_scroll, &self.theme);
        }

        render_footer(frame, layout.footer);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);
        loop {
            self.update();
            terminal.draw(|frame| self.render(frame))?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_message(LabMessage::KeyPress(map_key(key)));
                    }
                    Event::Resize(width, height) => {
                        self.handle_message(LabMessage::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    }
}
