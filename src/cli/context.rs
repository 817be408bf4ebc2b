use std::io::{self, Write};
use std::sync::Arc;

use crossterm::{
    cursor,
    terminal::{self, ClearType},
    ExecutableCommand,
};
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::commands::{self, CliError, Command, CommandError};
use crate::cli::output;
use crate::cli::render::{render_fields, render_view};
use crate::config::{ConfigManager, FormConfig};
use crate::schema::catalog;
use crate::session::{Clock, FormSession, ManualClock, Mode, SystemClock, Transition};
use crate::utils::build_info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Time source for the shell. Scripts run on a manual clock so `wait` is
/// instant and reproducible.
enum ShellClock {
    System,
    Manual(ManualClock),
}

pub struct ShellContext {
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
    session: FormSession,
    clock: ShellClock,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::from_env()?.load()?;
        Ok(Self::with_config(mode, &config))
    }

    pub fn with_config(mode: CliMode, config: &FormConfig) -> Self {
        output::set_preferences(output::OutputPreferences {
            quiet_mode: config.quiet_mode,
            plain: mode == CliMode::Script || !config.ui_color_enabled,
        });

        let (clock, handle): (ShellClock, Arc<dyn Clock>) = match mode {
            CliMode::Interactive => (ShellClock::System, Arc::new(SystemClock)),
            CliMode::Script => {
                let manual = ManualClock::new(chrono::Utc::now());
                (ShellClock::Manual(manual.clone()), Arc::new(manual))
            }
        };
        let session = FormSession::with_clock(catalog::sports_profile(), handle, config.timings());
        tracing::info!(session = %session.id(), ?mode, "shell started");

        Self {
            mode,
            running: true,
            session,
            clock,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn session(&self) -> &FormSession {
        &self.session
    }

    pub fn prompt(&self) -> String {
        match self.session.current_field() {
            Some(field) => format!("form[{}]> ", field.name),
            None => format!("form[{}]> ", self.session.state().mode()),
        }
    }

    /// Field names, for completion after `set`.
    pub fn field_names(&self) -> Vec<String> {
        self.session.schema().names().map(str::to_string).collect()
    }

    pub fn dispatch(&mut self, name: &str, args: &[&str]) -> Result<LoopControl, CommandError> {
        let spec = commands::lookup(name).ok_or_else(|| CommandError::Unknown(name.to_string()))?;

        match spec.command {
            Command::Enter => {
                let field = self
                    .session
                    .current_field()
                    .map(|field| field.name.clone())
                    .ok_or(crate::errors::FormError::WrongMode {
                        operation: "enter",
                        mode: self.session.state().mode(),
                    })?;
                self.session.set_field_value(&field, args.join(" "))?;
                let transition = self.session.advance_step()?;
                self.report(&transition);
            }
            Command::Set => {
                let (field, rest) = args.split_first().ok_or_else(|| {
                    CommandError::InvalidArguments("usage: set <field> <value>".into())
                })?;
                self.session.set_field_value(field, rest.join(" "))?;
            }
            Command::Next => {
                let transition = self.session.advance_step()?;
                self.report(&transition);
            }
            Command::Edit => {
                self.session.begin_edit()?;
            }
            Command::Save => {
                let transition = self.session.save_edit()?;
                self.report(&transition);
            }
            Command::Cancel => {
                self.session.cancel_edit()?;
            }
            Command::Show => {}
            Command::Json => {
                self.session.expire_due();
                let json = serde_json::to_string_pretty(&self.session.view())?;
                println!("{json}");
                return Ok(LoopControl::Continue);
            }
            Command::Fields => {
                print!("{}", render_fields(&self.session.view()));
                return Ok(LoopControl::Continue);
            }
            Command::Wait => {
                let millis = args
                    .first()
                    .and_then(|raw| raw.parse::<u64>().ok())
                    .ok_or_else(|| {
                        CommandError::InvalidArguments("usage: wait <milliseconds>".into())
                    })?;
                self.wait(millis);
            }
            Command::Help => {
                self.print_help(args.first().copied());
                return Ok(LoopControl::Continue);
            }
            Command::Version => {
                println!("{}", build_info::current());
                return Ok(LoopControl::Continue);
            }
            Command::Exit => {
                self.session.teardown();
                return Ok(LoopControl::Exit);
            }
        }

        self.render()?;
        Ok(LoopControl::Continue)
    }

    /// Expires due effects and redraws the form.
    pub fn render(&mut self) -> Result<(), CommandError> {
        self.session.expire_due();
        if self.mode == CliMode::Interactive {
            let mut stdout = io::stdout();
            stdout.execute(terminal::Clear(ClearType::All))?;
            stdout.execute(cursor::MoveTo(0, 0))?;
        }
        let screen = render_view(&self.session.view());
        let mut stdout = io::stdout();
        stdout.write_all(screen.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn wait(&mut self, millis: u64) {
        match &self.clock {
            ShellClock::Manual(clock) => {
                clock.advance_ms(i64::try_from(millis).unwrap_or(i64::MAX));
            }
            ShellClock::System => std::thread::sleep(std::time::Duration::from_millis(millis)),
        }
    }

    fn report(&self, transition: &Transition) {
        match transition {
            Transition::Rejected { field, .. } => {
                tracing::debug!(field = %field, "input rejected");
            }
            Transition::SaveRejected { fields } => {
                output::warning(format!("{} field(s) need attention", fields.len()));
            }
            _ => {}
        }
    }

    fn print_help(&self, topic: Option<&str>) {
        if let Some(name) = topic {
            match commands::lookup(name) {
                Some(spec) => {
                    println!("{}", spec.usage);
                    println!("  {}", spec.summary);
                }
                None => output::warning(format!("No help for `{name}`")),
            }
            return;
        }
        for spec in commands::COMMANDS {
            println!("  {:<22} {}", spec.usage, spec.summary);
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt("Exit form?")
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::Unknown(name) => {
                output::error(format!("Unknown command `{name}`"));
                match commands::suggest(&name) {
                    Some(best) => output::hint(format!("Did you mean `{best}`?")),
                    None => output::hint("Use `help` to list commands."),
                }
            }
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Form(crate::errors::FormError::WrongMode { mode, .. }) => {
                output::error(format!("That action is not available in {mode} mode."));
                output::hint(mode_hint(mode));
            }
            other => output::error(other),
        }
    }
}

fn mode_hint(mode: Mode) -> &'static str {
    match mode {
        Mode::Wizard => "Answer the current step with `enter <value>`.",
        Mode::Display => "Use `edit` to change the submitted data.",
        Mode::Edit => "Use `set <field> <value>`, then `save` or `cancel`.",
    }
}
