use std::{
    io::{self, Write},
    time::Duration,
};

use crate::{
    backend::{Frame, Imaging, VideoSource, Window},
    codegen::{self, Language},
    command::{Command, KeyMap},
    error::ScopeError,
    filter::{FilterConfig, FilterKind},
    options::{EnumCycler, OptionEntry},
    params::ParameterStore,
};

/// Prefix added to the window title while the view is paused.
pub const PAUSED_MARKER: &str = "**PAUSED** ";

/// Configuration of a [`FilterSession`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long each iteration waits for a key press. This also paces the loop.
    pub poll_interval: Duration,
    /// The key bindings.
    pub keymap: KeyMap,
    /// The language of the emit-primary-code command.
    pub primary: Language,
    /// The language of the emit-secondary-code command.
    pub secondary: Language,
}

impl SessionConfig {
    /// Creates a configuration with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the key poll interval.
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Sets the key bindings.
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the primary and secondary code languages.
    pub fn with_languages(mut self, primary: Language, secondary: Language) -> Self {
        self.primary = primary;
        self.secondary = secondary;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(1),
            keymap: KeyMap::default(),
            primary: Language::Rust,
            secondary: Language::Python,
        }
    }
}

/// The state of a [`FilterSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Filtered frames are displayed.
    Running,
    /// Captured frames are displayed unfiltered.
    Paused,
    /// The loop has ended. Terminal.
    Terminated,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The operator issued the terminate command.
    Requested,
    /// The video source failed to deliver a frame.
    SourceFailed,
}

/// The live exploration loop for one filter.
///
/// The session exclusively owns its video source and window. Both are
/// released when the session is dropped, which [`FilterSession::run`] does on
/// every exit path.
pub struct FilterSession<S, W, I>
where
    S: VideoSource,
    W: Window<Frame = S::Frame>,
    I: Imaging<Frame = S::Frame>,
{
    kind: FilterKind,
    source: S,
    window: W,
    imaging: I,
    params: ParameterStore,
    cycler: Option<EnumCycler>,
    state: SessionState,
    exit: Option<ExitReason>,
    config: SessionConfig,
    out: Box<dyn Write>,
}

impl<S, W, I> FilterSession<S, W, I>
where
    S: VideoSource,
    W: Window<Frame = S::Frame>,
    I: Imaging<Frame = S::Frame>,
{
    /// Creates a session, installing the filter's trackbars in `window`.
    ///
    /// Code fragments are written to the standard output.
    pub fn new(
        kind: FilterKind,
        source: S,
        window: W,
        imaging: I,
        config: SessionConfig,
    ) -> Result<Self, ScopeError> {
        let mut session = Self {
            kind,
            source,
            window,
            imaging,
            params: ParameterStore::new(kind),
            cycler: kind.options().map(EnumCycler::new),
            state: SessionState::Running,
            exit: None,
            config,
            out: Box::new(io::stdout()),
        };
        session.params.install(&mut session.window)?;
        session.retitle()?;
        Ok(session)
    }

    /// Redirects code fragments to `out`.
    pub fn with_output(mut self, out: impl Write + 'static) -> Self {
        self.out = Box::new(out);
        self
    }

    /// Returns the current state.
    #[inline]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns why the session ended, once it has.
    #[inline]
    pub fn exit_reason(&self) -> Option<ExitReason> {
        self.exit
    }

    /// Returns the filter parameters.
    #[inline]
    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    /// Returns the selected discrete option, if the filter has one.
    pub fn option(&self) -> Option<&'static OptionEntry> {
        self.cycler.as_ref().map(EnumCycler::current)
    }

    /// Returns the window title for the current option and state.
    pub fn title(&self) -> String {
        let title = self.kind.title(self.option());
        match self.state {
            SessionState::Paused => format!("{PAUSED_MARKER}{title}"),
            _ => title,
        }
    }

    /// Runs one iteration: capture, validate, filter, display, poll, dispatch.
    ///
    /// A read failure is reported and terminates the session without
    /// returning an error. Empty frames are skipped.
    pub fn step(&mut self) -> Result<(), ScopeError> {
        if self.state == SessionState::Terminated {
            return Ok(());
        }

        let frame = match self.source.read() {
            Ok(frame) => frame,
            Err(err) => {
                log::error!("{err}");
                self.terminate(ExitReason::SourceFailed);
                return Ok(());
            }
        };
        if frame.is_empty() {
            return Ok(());
        }

        // slider positions are corrected before the filter sees them
        self.params.pull(&self.window)?;
        let option = self.cycler.as_ref().map_or(0, EnumCycler::index);
        let config = self.params.resolve(option);
        self.params.push(&mut self.window)?;

        let processed = self.imaging.apply(&frame, &config)?;

        // while paused the operator inspects the unmodified source
        match self.state {
            SessionState::Paused => self.window.show(&frame)?,
            _ => self.window.show(&processed)?,
        }

        if let Some(key) = self.window.wait_key(self.config.poll_interval)? {
            if let Some(command) = self.config.keymap.translate(key) {
                self.dispatch(command, &config)?;
            }
        }

        Ok(())
    }

    /// Applies an operator command.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to apply.
    /// * `config` - The configuration resolved in the current iteration, used by code emission.
    pub fn dispatch(&mut self, command: Command, config: &FilterConfig) -> Result<(), ScopeError> {
        log::debug!("dispatching {command:?}");
        match command {
            Command::CyclePrev | Command::CycleNext => {
                let Some(cycler) = self.cycler.as_mut() else {
                    return Ok(());
                };
                if command == Command::CyclePrev {
                    cycler.prev();
                } else {
                    cycler.next();
                }
                log::debug!("selected option {}", cycler.current().symbol);
                self.retitle()?;
            }
            Command::EmitPrimaryCode => self.emit(self.config.primary, config)?,
            Command::EmitSecondaryCode => self.emit(self.config.secondary, config)?,
            Command::TogglePause => {
                self.state = match self.state {
                    SessionState::Running => SessionState::Paused,
                    SessionState::Paused => SessionState::Running,
                    SessionState::Terminated => SessionState::Terminated,
                };
                self.retitle()?;
            }
            Command::Terminate => self.terminate(ExitReason::Requested),
        }
        Ok(())
    }

    /// Loops until the session terminates, then releases the source and window.
    pub fn run(mut self) -> Result<ExitReason, ScopeError> {
        log::info!("Start reading video: {}", self.source.describe());
        for line in self.config.keymap.describe() {
            log::info!("  {line}");
        }

        while self.state != SessionState::Terminated {
            self.step()?;
        }

        let reason = self.exit.unwrap_or(ExitReason::Requested);
        log::info!("{} session finished: {:?}", self.kind.name(), reason);
        Ok(reason)
    }

    fn emit(&mut self, language: Language, config: &FilterConfig) -> Result<(), ScopeError> {
        let text = codegen::render(language, config);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    fn retitle(&mut self) -> Result<(), ScopeError> {
        let title = self.title();
        self.window.set_title(&title)
    }

    fn terminate(&mut self, reason: ExitReason) {
        self.state = SessionState::Terminated;
        self.exit = Some(reason);
    }
}
