//! Terminal UI.
//!
//! [`TuiApp`] owns the terminal and the UI state. Key presses become
//! [`Command`]s for the [`Mediator`]; the model pushes every change back
//! through a [`ListSnapshot`] observer, which the app copies into its state
//! before the next frame.

mod board;
mod constants;
mod detail;
mod dialog;
mod help;
mod layout;
mod log_pane;
mod styles;

pub use layout::render_layout;
pub use styles::{ColorConfig, Palette};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::mediator::{Command, Effect, Mediator, Outcome};
use crate::model::{AppError, KeyAction, ListId, ListObserver, Subscription};
use crate::state::{
    confirm_answer, handle_prompt_key, AppState, CategoryChoice, Dialog, FormMode, FormOutcome,
    ItemFormState, ListSnapshot, LogPaneEntry, PromptKind, PromptOutcome, PromptState, SortOrder,
    DEFAULT_LOG_CAPACITY,
};
use constants::EVENT_POLL_MILLIS;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, Level};


/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Startup settings for the TUI.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Colors on or off.
    pub colors: ColorConfig,
    /// Sort order a freshly opened list starts with.
    pub default_sort: SortOrder,
    /// Entries kept by the log pane.
    pub log_capacity: usize,
    /// Key to action map.
    pub key_bindings: KeyBindings,
}

impl RunOptions {
    /// Options from the resolved configuration.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            colors: ColorConfig::new(!config.no_color),
            default_sort: config.default_sort,
            log_capacity: config.log_buffer_capacity,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            colors: ColorConfig::default(),
            default_sort: SortOrder::Default,
            log_capacity: DEFAULT_LOG_CAPACITY,
            key_bindings: KeyBindings::default(),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    mediator: Mediator,
    snapshot: Rc<ListSnapshot>,
    /// Snapshot revision last copied into `app_state`.
    seen_revision: u64,
    _subscription: Subscription,
    key_bindings: KeyBindings,
    palette: Palette,
    /// Tracing events for the log pane.
    log_events: Option<Receiver<LogPaneEntry>>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Set up the terminal (raw mode, alternate screen) and build the app.
    pub fn new(
        mediator: Mediator,
        options: RunOptions,
        log_events: Option<Receiver<LogPaneEntry>>,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self::with_terminal(terminal, mediator, options, log_events))
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build the app on an existing terminal and subscribe to the model.
    pub fn with_terminal(
        terminal: Terminal<B>,
        mediator: Mediator,
        options: RunOptions,
        log_events: Option<Receiver<LogPaneEntry>>,
    ) -> Self {
        let snapshot = Rc::new(ListSnapshot::new());
        let subscription = {
            let mut model = mediator.model().borrow_mut();
            let subscription = model.subscribe(snapshot.clone());
            snapshot.update(model.lists());
            subscription
        };

        let mut app = Self {
            terminal,
            app_state: AppState::new(options.default_sort, options.log_capacity),
            mediator,
            snapshot,
            seen_revision: 0,
            _subscription: subscription,
            key_bindings: options.key_bindings,
            palette: Palette::new(options.colors),
            log_events,
        };
        app.sync();
        app
    }

    /// Run the event loop until the user quits (q or Ctrl+C).
    ///
    /// Redraws after every key press and resize, and when new log events
    /// arrive while idle.
    pub fn run(&mut self) -> Result<(), TuiError> {
        let poll_interval = Duration::from_millis(EVENT_POLL_MILLIS);
        self.draw()?;

        loop {
            if event::poll(poll_interval)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        self.draw()?;
                    }
                    Event::Resize(..) => self.draw()?,
                    _ => {}
                }
            } else if self.sync() {
                self.draw()?;
            }
        }
    }

    /// Render the current frame.
    fn draw(&mut self) -> Result<(), TuiError> {
        self.sync();
        let state = &self.app_state;
        let palette = &self.palette;
        self.terminal
            .draw(|frame| render_layout(frame, state, palette))?;
        Ok(())
    }

    /// Copy model changes and pending log events into the UI state.
    /// Returns whether anything changed.
    fn sync(&mut self) -> bool {
        let mut changed = false;
        if let Some((revision, lists)) = self.snapshot.changed_since(self.seen_revision) {
            self.seen_revision = revision;
            self.app_state.set_lists(lists);
            changed = true;
        }
        if let Some(events) = &self.log_events {
            for entry in events.try_iter() {
                self.app_state.log_pane.push(entry);
                changed = true;
            }
        }
        changed
    }

    // ===== Keys =====

    /// Handle keyboard input. Returns true if the app should quit.
    ///
    /// Dialogs take every key, help only its own dismiss keys, and
    /// everything else goes through the key bindings.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        if self.app_state.dialog.is_open() {
            self.handle_dialog_key(key);
        } else if self.app_state.help_visible {
            match self.key_bindings.get(key) {
                Some(KeyAction::Help | KeyAction::Close) => self.app_state.help_visible = false,
                Some(KeyAction::Quit) => return true,
                _ => {}
            }
        } else if let Some(action) = self.key_bindings.get(key) {
            if self.apply_action(action) {
                return true;
            }
        }

        self.sync();
        false
    }

    fn apply_action(&mut self, action: KeyAction) -> bool {
        debug!(?action, "Key action");
        match action {
            KeyAction::Quit => return true,
            KeyAction::SelectPrev => self.app_state.move_selection(-1),
            KeyAction::SelectNext => self.app_state.move_selection(1),
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::CycleFocus => {
                if self.app_state.detail.is_none() {
                    self.app_state.cycle_focus();
                }
            }
            KeyAction::Open => {
                if self.app_state.detail.is_some() {
                    self.open_edit_form();
                } else {
                    self.app_state.open_selected();
                }
            }
            KeyAction::Close => {
                if self.app_state.detail.is_some() {
                    self.app_state.close_detail();
                } else {
                    self.app_state.clear_status();
                }
            }
            KeyAction::NewList => {
                self.app_state.dialog = Dialog::Prompt(PromptState::new(PromptKind::NewList));
            }
            KeyAction::Rename => {
                if let Some(list) = self.require_list() {
                    let name = self
                        .app_state
                        .list(list)
                        .map(|list| list.name.clone())
                        .unwrap_or_default();
                    self.app_state.dialog =
                        Dialog::Prompt(PromptState::prefilled(PromptKind::RenameList(list), &name));
                }
            }
            KeyAction::Delete => self.delete_selected(),
            KeyAction::MarkComplete => {
                if let Some(list) = self.require_list() {
                    self.dispatch(Command::MarkListComplete { list });
                }
            }
            KeyAction::Reopen => {
                if let Some(list) = self.require_list() {
                    self.dispatch(Command::ReopenList { list });
                }
            }
            KeyAction::Share => {
                if let Some(list) = self.require_list() {
                    self.app_state.dialog =
                        Dialog::Prompt(PromptState::new(PromptKind::ShareList(list)));
                }
            }
            KeyAction::AddItem => {
                if let Some(list) = self.require_list() {
                    if self.app_state.detail.is_none() {
                        self.app_state.open_selected();
                    }
                    self.app_state.dialog = Dialog::ItemForm(Box::new(ItemFormState::add(list)));
                }
            }
            KeyAction::EditItem => self.open_edit_form(),
            KeyAction::ToggleItem => {
                if let (Some(detail), Some(row)) =
                    (self.app_state.detail, self.app_state.selected_item())
                {
                    self.dispatch(Command::ToggleItem {
                        list: detail.list_id,
                        item: row.item_id,
                    });
                }
            }
            KeyAction::ToggleCategoryFilter => self.app_state.toggle_category_filter(),
            KeyAction::CycleSort => self.app_state.cycle_sort(),
            KeyAction::AddCategory => {
                self.app_state.dialog =
                    Dialog::Prompt(PromptState::new(PromptKind::NewCategory { parked: None }));
            }
            KeyAction::Help => self.app_state.help_visible = true,
            KeyAction::ToggleLogPane => self.app_state.log_pane.toggle_visible(),
        }
        false
    }

    /// The list an action applies to, or a hint when there is none.
    fn require_list(&mut self) -> Option<ListId> {
        let list = self.app_state.target_list();
        if list.is_none() {
            self.app_state.report(Level::INFO, "Select a list first");
        }
        list
    }

    fn open_edit_form(&mut self) {
        let (Some(detail), Some(row)) = (self.app_state.detail, self.app_state.selected_item())
        else {
            return;
        };
        let form = self
            .app_state
            .list(detail.list_id)
            .and_then(|list| list.item(row.item_id))
            .map(|item| ItemFormState::edit(detail.list_id, item));
        if let Some(form) = form {
            self.app_state.dialog = Dialog::ItemForm(Box::new(form));
        }
    }

    /// Delete the selected item inside a list, or the selected list on the
    /// board.
    fn delete_selected(&mut self) {
        match self.app_state.detail {
            Some(detail) => {
                if let Some(row) = self.app_state.selected_item() {
                    self.dispatch(Command::DeleteItem {
                        list: detail.list_id,
                        index: row.index,
                    });
                }
            }
            None => {
                if let Some(list) = self.require_list() {
                    self.dispatch(Command::DeleteList { list });
                }
            }
        }
    }

    // ===== Dialogs =====

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        match std::mem::take(&mut self.app_state.dialog) {
            Dialog::None => {}
            Dialog::Prompt(mut prompt) => match handle_prompt_key(&mut prompt, key) {
                PromptOutcome::Continue => self.app_state.dialog = Dialog::Prompt(prompt),
                PromptOutcome::Cancel => self.cancel_prompt(prompt),
                PromptOutcome::Submit(value) => self.submit_prompt(prompt, value),
            },
            Dialog::Confirm(request) => match confirm_answer(key) {
                None => self.app_state.dialog = Dialog::Confirm(request),
                Some(true) => {
                    let outcome = self.mediator.confirm(request);
                    self.handle_outcome(outcome);
                }
                Some(false) => self.app_state.report(Level::INFO, "Cancelled"),
            },
            Dialog::ItemForm(mut form) => {
                let categories = self.mediator.model().borrow().categories().names().to_vec();
                match form.handle_key(key, &categories) {
                    FormOutcome::Continue => self.app_state.dialog = Dialog::ItemForm(form),
                    FormOutcome::Cancel => {}
                    FormOutcome::RequestNewCategory => {
                        self.app_state.dialog = Dialog::Prompt(PromptState::new(
                            PromptKind::NewCategory { parked: Some(form) },
                        ));
                    }
                    FormOutcome::Submit(draft) => {
                        let command = match form.mode {
                            FormMode::Add { list } => Command::AddItem { list, draft },
                            FormMode::Edit { list, item } => Command::UpdateItem { list, item, draft },
                        };
                        let outcome = self.mediator.dispatch(command);
                        if let Outcome::Rejected(reason) = &outcome {
                            form.error = Some(reason.to_string());
                            self.app_state.dialog = Dialog::ItemForm(form);
                        }
                        self.handle_outcome(outcome);
                    }
                }
            }
        }
    }

    /// A cancelled category prompt hands control back to the parked form.
    fn cancel_prompt(&mut self, prompt: PromptState) {
        if let PromptKind::NewCategory {
            parked: Some(mut form),
        } = prompt.kind
        {
            form.category = CategoryChoice::None;
            self.app_state.dialog = Dialog::ItemForm(form);
        }
    }

    fn submit_prompt(&mut self, prompt: PromptState, value: String) {
        let command = match &prompt.kind {
            PromptKind::NewList => Command::CreateList { name: value },
            PromptKind::RenameList(list) => Command::RenameList {
                list: *list,
                name: value,
            },
            PromptKind::ShareList(list) => Command::ShareList {
                list: *list,
                participant: value,
            },
            PromptKind::NewCategory { .. } => Command::AddCategory { name: value },
        };
        let outcome = self.mediator.dispatch(command);
        let rejected = matches!(outcome, Outcome::Rejected(_));
        let created_category = match &outcome {
            Outcome::Applied(Effect::CategoryAdded { name }) => Some(name.clone()),
            _ => None,
        };
        self.handle_outcome(outcome);

        if rejected {
            self.app_state.dialog = Dialog::Prompt(prompt);
            return;
        }
        if let PromptKind::NewCategory {
            parked: Some(mut form),
        } = prompt.kind
        {
            match created_category {
                Some(name) => form.set_category(name),
                None => form.category = CategoryChoice::None,
            }
            self.app_state.dialog = Dialog::ItemForm(form);
        }
    }

    // ===== Outcomes =====

    fn dispatch(&mut self, command: Command) {
        let outcome = self.mediator.dispatch(command);
        self.handle_outcome(outcome);
    }

    fn handle_outcome(&mut self, outcome: Outcome) {
        self.sync();
        match outcome {
            Outcome::Applied(effect) => {
                if let Effect::ListCreated { list, .. } = &effect {
                    self.app_state.close_detail();
                    self.app_state.select_list(*list);
                }
                self.app_state.report(Level::INFO, effect.to_string());
            }
            Outcome::Rejected(reason) => self.app_state.report(Level::WARN, reason.to_string()),
            Outcome::NeedsConfirmation(request) => {
                self.app_state.dialog = Dialog::Confirm(request);
            }
            Outcome::Failed(err) => self.app_state.report(Level::ERROR, err.to_string()),
        }
    }
}

/// Run the TUI until the user quits.
///
/// Sets up the terminal, runs the event loop and always restores the
/// terminal afterwards. Logging must be initialized by the caller.
pub fn run_app(
    mediator: Mediator,
    options: RunOptions,
    log_events: Option<Receiver<LogPaneEntry>>,
) -> Result<(), TuiError> {
    let mut app = TuiApp::new(mediator, options, log_events)?;

    // Run the app and ensure cleanup happens even on error
    let result = app.run();
    restore_terminal()?;
    result
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
