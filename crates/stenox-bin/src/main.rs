//! Stenox entrypoint.
use anyhow::Result;
use clap::Parser;
use core_actions::{dispatch, open_buffer, translate_key};
use core_config::{Config, load_from};
use core_events::{EVENT_CHANNEL_CAP, Event, KeyEvent};
use core_phoneme::{DictionaryInterpreter, InputMethod, PhonemeTable};
use core_state::{EditSettings, EditorState};
use core_terminal::{CrosstermBackend, ScreenGuard, TerminalBackend, compose_frame, paint};
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tokio::sync::mpsc;
use tracing::{error, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "stenox.log";
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "stenox", version, about = "Line editor with phoneme input")]
struct Args {
    /// File to edit. Created empty if it does not exist.
    pub path: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `stenox.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Phoneme dictionary (overrides `[phoneme] dictionary`).
    #[arg(long = "dictionary")]
    pub dictionary: Option<PathBuf>,
}

struct AppStartup {
    log_guard: Option<WorkerGuard>,
}

struct EditorBootstrap {
    state: EditorState,
    config: Config,
}

impl AppStartup {
    fn new() -> Self {
        Self { log_guard: None }
    }

    fn configure_logging(&mut self) -> Result<()> {
        let log_dir = Path::new(".");
        let log_path = log_dir.join(LOG_FILE_NAME);
        if log_path.exists() {
            let _ = std::fs::remove_file(&log_path);
        }

        let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
        let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
        match tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_ansi(false)
            .with_writer(nb_writer)
            .try_init()
        {
            Ok(_) => {
                self.log_guard = Some(guard);
            }
            Err(_err) => {
                // Global subscriber already installed; dropping the guard stops the writer.
            }
        }
        Ok(())
    }

    fn install_panic_hook() {
        static HOOK: Once = Once::new();
        HOOK.call_once(|| {
            let default_panic = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                tracing::error!(target: "runtime.panic", ?info, "panic");
                default_panic(info);
            }));
        });
    }
}

/// Load config, dictionary and document. A dictionary that fails to load is
/// logged and replaced by an empty one so the editor still starts.
fn load_editor_state(args: &Args, terminal: (u16, u16)) -> Result<EditorBootstrap> {
    let config = load_from(args.config.clone())?;
    let (height, width) = config.viewport_for(terminal.0, terminal.1);
    let (buffer, outcome) = open_buffer(args.path.clone(), height, width)?;

    let table = PhonemeTable::standard();
    let mut dictionary_failed = false;
    let dictionary = match args.dictionary.clone().or_else(|| config.dictionary_path()) {
        Some(path) => match DictionaryInterpreter::load(&path, table) {
            Ok(dict) => dict,
            Err(e) => {
                error!(target: "phoneme.dictionary", file = %path.display(), error = %e, "dictionary_load_failed");
                dictionary_failed = true;
                DictionaryInterpreter::new()
            }
        },
        None => {
            warn!(target: "phoneme.dictionary", "no_dictionary_configured");
            DictionaryInterpreter::new()
        }
    };
    let dictionary_keys = dictionary.len();

    let settings = EditSettings {
        tab_width: config.tab_width(),
        unmatched_prefix: config.unmatched_prefix(),
    };
    let input = InputMethod::new(table, Box::new(dictionary));
    let mut state = EditorState::new(buffer, input, settings);
    if dictionary_failed {
        state.set_status("Dictionary failed to load (see log)");
    }

    info!(
        target: "runtime",
        path = ?args.path,
        ?outcome,
        config_override = args.config.is_some(),
        dictionary_keys,
        height,
        width,
        "bootstrap_complete"
    );
    Ok(EditorBootstrap { state, config })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShutdownReason {
    Quit,
    ChannelClosed,
}

impl ShutdownReason {
    fn as_str(&self) -> &'static str {
        match self {
            ShutdownReason::Quit => "quit",
            ShutdownReason::ChannelClosed => "channel_closed",
        }
    }
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoopControl {
    Continue,
    Break { reason: ShutdownReason },
}

struct EditorRuntime<W: Write> {
    state: EditorState,
    config: Config,
    terminal_size: (u16, u16),
    out: W,
    rx: mpsc::Receiver<Event>,
    input_task: Option<tokio::task::JoinHandle<()>>,
    input_shutdown: Option<core_input::AsyncInputShutdown>,
}

impl<W: Write> EditorRuntime<W> {
    fn new(
        bootstrap: EditorBootstrap,
        terminal_size: (u16, u16),
        out: W,
        rx: mpsc::Receiver<Event>,
    ) -> Self {
        Self {
            state: bootstrap.state,
            config: bootstrap.config,
            terminal_size,
            out,
            rx,
            input_task: None,
            input_shutdown: None,
        }
    }

    fn attach_input(
        &mut self,
        task: tokio::task::JoinHandle<()>,
        shutdown: core_input::AsyncInputShutdown,
    ) {
        self.input_task = Some(task);
        self.input_shutdown = Some(shutdown);
    }

    async fn run(&mut self) -> Result<ShutdownReason> {
        self.render()?;

        let mut shutdown_reason = ShutdownReason::ChannelClosed;
        while let Some(event) = self.rx.recv().await {
            let control = match &event {
                Event::Key(key) => self.handle_key(key),
                Event::Resize(w, h) => self.handle_resize(*w, *h),
            };
            if let LoopControl::Break { reason } = control {
                shutdown_reason = reason;
                break;
            }
            if self.state.dirty {
                self.render()?;
            }
        }

        self.rx.close();
        self.finalize_shutdown(shutdown_reason).await;
        Ok(shutdown_reason)
    }

    fn handle_key(&mut self, key: &KeyEvent) -> LoopControl {
        let Some(action) = translate_key(key) else {
            trace!(target: "runtime", key = %key, "unbound_key");
            return LoopControl::Continue;
        };
        let result = dispatch(action, &mut self.state);
        if result.quit {
            LoopControl::Break {
                reason: ShutdownReason::Quit,
            }
        } else {
            LoopControl::Continue
        }
    }

    fn handle_resize(&mut self, columns: u16, rows: u16) -> LoopControl {
        self.terminal_size = (columns, rows);
        let (height, width) = self.config.viewport_for(columns, rows);
        self.state.buffer.resize(height, width);
        self.state.dirty = true;
        trace!(target: "runtime", columns, rows, height, width, "resize");
        LoopControl::Continue
    }

    fn render(&mut self) -> Result<()> {
        let frame = compose_frame(&self.state, self.terminal_size.0, self.terminal_size.1);
        paint(&mut self.out, &frame)?;
        self.state.dirty = false;
        Ok(())
    }

    async fn finalize_shutdown(&mut self, reason: ShutdownReason) {
        info!(target: "runtime", reason = reason.as_str(), modified = self.state.modified, "shutdown_begin");
        if let Some(shutdown) = self.input_shutdown.take() {
            shutdown.signal();
        }
        if let Some(handle) = self.input_task.take() {
            match handle.await {
                Ok(()) => trace!(target: "runtime", "input_task_joined"),
                Err(err) if err.is_cancelled() => trace!(target: "runtime", "input_task_cancelled"),
                Err(err) => error!(target: "runtime", ?err, "input_task_join_failed"),
            }
        }
        info!(target: "runtime", reason = reason.as_str(), "shutdown_complete");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut startup = AppStartup::new();
    startup.configure_logging()?;
    AppStartup::install_panic_hook();
    info!(target: "runtime", "startup");

    let mut backend = CrosstermBackend::new();
    let size = backend.size().unwrap_or(FALLBACK_SIZE);
    let bootstrap = load_editor_state(&args, size)?;

    let _screen = ScreenGuard::enter(&mut backend, "stenox")?;

    let (tx, rx) = mpsc::channel::<Event>(EVENT_CHANNEL_CAP);
    let (input_task, input_shutdown) = core_input::spawn_async_input(tx);
    let mut runtime = EditorRuntime::new(bootstrap, size, std::io::stdout(), rx);
    runtime.attach_input(input_task, input_shutdown);
    runtime.run().await?;
    Ok(())
}
