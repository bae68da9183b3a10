//! Application orchestration.
//!
//! [`App`] owns the state, translates key events into [`Message`]s,
//! applies them through a synchronous [`App::update`], and executes the
//! resulting backend [`Command`]s. Keeping `update` synchronous and
//! side-effect free makes the whole interaction model unit-testable;
//! only [`App::run`] touches the terminal and the network.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use ratatui::{buffer::Buffer, layout::Rect};
use storymap_api::{ApiClient, NewStory, PollEvent, PollHandle, StoryMove, spawn_poll};
use storymap_config::Config;
use storymap_protocol::{Message, Project, StoryId, StoryStatus, WireframeStatus};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::event::{key_to_draft_message, key_to_message, poll_event};
use crate::interaction::{CardKey, DragState, HoverState};
use crate::layout::STATUS_BAR_HEIGHT;
use crate::state::{AppState, Focus};
use crate::terminal::AppTerminal;
use crate::theme::Severity;
use crate::virtualize::VirtualizePolicy;
use crate::widgets::{
    FilterEntry, filter_entries, render_board, render_draft_form, render_filter_panel,
    render_help, render_preview, render_status_bar, render_wireframe_panel,
};

/// A backend operation requested by [`App::update`].
///
/// Commands carry everything needed to run without touching the state
/// again, so they can be executed after `update` returns.
#[derive(Debug, Clone)]
pub enum Command {
    /// Create a story from a submitted draft.
    SubmitStory(NewStory),
    /// Set a story's status to the next step in the cycle.
    CycleStatus {
        /// The card being changed.
        key: CardKey,
        /// The successor status, computed locally.
        status: StoryStatus,
    },
    /// Move a story into another cell.
    MoveStory {
        /// The story being moved.
        story_id: StoryId,
        /// Destination cell and position.
        target: StoryMove,
    },
    /// Delete a story from the board.
    DeleteStory {
        /// The story being deleted.
        story_id: StoryId,
    },
    /// Enqueue a wireframe generation job.
    GenerateWireframe,
    /// Re-fetch the project snapshot.
    Refresh {
        /// Suppress the confirmation toast when `true`.
        silent: bool,
    },
}

/// The application.
pub struct App {
    /// All UI state.
    pub state: AppState,
    config: Config,
    client: Option<Arc<ApiClient>>,
    policy: VirtualizePolicy,
    /// Cursor into the filter panel's entry list.
    filter_cursor: usize,
    /// Vertical scroll of the wireframe panel.
    wireframe_scroll: u16,
    poll: Option<(PollHandle, UnboundedReceiver<PollEvent>)>,
    should_quit: bool,
}

impl App {
    /// Creates the application for a project snapshot.
    ///
    /// `client` is `None` in offline demo mode; backend commands then
    /// surface a read-only notice instead of running.
    #[must_use]
    pub fn new(project: Project, config: Config, client: Option<Arc<ApiClient>>) -> Self {
        let policy = VirtualizePolicy::from_config(&config.board);
        Self {
            state: AppState::new(project),
            config,
            client,
            policy,
            filter_cursor: 0,
            wireframe_scroll: 0,
            poll: None,
            should_quit: false,
        }
    }

    /// Returns whether the main loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one message to the state.
    ///
    /// Returns a [`Command`] when the message requires a backend call.
    pub fn update(&mut self, message: Message) -> Option<Command> {
        if message.is_terminating() {
            self.should_quit = true;
            return None;
        }

        // The help overlay swallows everything except the quit key.
        if self.state.help_visible {
            if message == Message::ToggleHelp {
                self.state.toggle_help();
            } else {
                let _ = self.state.dismiss_help();
            }
            return None;
        }
        if message == Message::ToggleHelp {
            self.state.toggle_help();
            return None;
        }

        let command = match self.state.focus {
            Focus::Board => self.update_board(message),
            Focus::DraftForm => self.update_draft(message),
            Focus::FilterPanel => {
                self.update_filter_panel(message);
                None
            }
            Focus::Wireframe => self.update_wireframe_panel(message),
        };
        self.sync_hover(Instant::now());
        command
    }

    fn update_board(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::NavigateLeft => self.state.navigate_left(),
            Message::NavigateRight => self.state.navigate_right(),
            Message::NavigateUp => self.state.navigate_up(),
            Message::NavigateDown => self.state.navigate_down(),
            Message::PrevRelease => self.state.prev_release(),
            Message::NextRelease => self.state.next_release(),
            Message::Select => {
                if self.state.drag.is_some() {
                    return self.drop_card();
                }
                if self.state.selected_story.is_none() {
                    self.state.navigate_down();
                }
            }
            Message::Escape => self.escape(),
            Message::Back => self.put_back(),
            Message::Grab => {
                if self.state.drag.is_some() {
                    return self.drop_card();
                }
                self.pick_up();
            }
            Message::CycleStatus => return self.cycle_status(),
            Message::DeleteStory => return self.delete_selected(),
            Message::OpenAddForm => {
                if let Some(cell) = self.state.current_cell() {
                    self.state.drafts.open(cell);
                    self.state.focus = Focus::DraftForm;
                }
            }
            Message::ToggleFilterPanel => {
                self.filter_cursor = 0;
                self.state.focus = Focus::FilterPanel;
            }
            Message::ResetFilters => {
                self.state.filter.reset();
                self.state.clamp_selection();
            }
            Message::ToggleWireframePanel => {
                self.state.wireframe_visible = !self.state.wireframe_visible;
                self.wireframe_scroll = 0;
                self.state.focus = if self.state.wireframe_visible {
                    Focus::Wireframe
                } else {
                    Focus::Board
                };
            }
            Message::GenerateWireframe => return self.request_wireframe(),
            Message::Refresh => return Some(Command::Refresh { silent: false }),
            _ => {}
        }

        // While a card is in hand, navigation retargets the drop cell.
        if message.is_navigation()
            && let Some(cell) = self.state.current_cell()
            && let Some(drag) = self.state.drag.as_mut()
        {
            drag.set_target(cell);
        }
        None
    }

    fn update_draft(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::Input(ch) => {
                if let Some(draft) = self.state.drafts.active_draft_mut() {
                    draft.input_char(ch);
                }
            }
            Message::DeleteChar => {
                if let Some(draft) = self.state.drafts.active_draft_mut() {
                    draft.delete_char();
                }
            }
            Message::NextField => {
                if let Some(draft) = self.state.drafts.active_draft_mut() {
                    draft.next_field();
                }
            }
            Message::SubmitDraft => {
                let cell = self.state.drafts.active()?;
                match self.state.drafts.submit(cell) {
                    Ok(submission) => {
                        self.state.focus = Focus::Board;
                        return Some(Command::SubmitStory(NewStory {
                            task_id: submission.cell.task_id,
                            release_id: Some(submission.cell.release_id),
                            title: submission.title,
                            description: submission.description,
                            priority: submission.priority,
                            acceptance_criteria: Vec::new(),
                        }));
                    }
                    Err(err) => debug!(error = %err, "draft rejected"),
                }
            }
            Message::Escape => {
                // Closing keeps the draft content for later.
                if let Some(cell) = self.state.drafts.active() {
                    self.state.drafts.close(cell);
                }
                self.state.focus = Focus::Board;
            }
            _ => {}
        }
        None
    }

    fn update_filter_panel(&mut self, message: Message) {
        let entries = filter_entries(&self.state.project.releases);
        match message {
            Message::NavigateUp => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
            }
            Message::NavigateDown => {
                if self.filter_cursor + 1 < entries.len() {
                    self.filter_cursor += 1;
                }
            }
            Message::Select => {
                match entries.get(self.filter_cursor) {
                    Some(FilterEntry::Status(status)) => self.state.filter.toggle_status(*status),
                    Some(FilterEntry::Release(id)) => self.state.filter.toggle_release(*id),
                    None => {}
                }
                self.state.clamp_selection();
            }
            Message::ResetFilters => {
                self.state.filter.reset();
                self.state.clamp_selection();
            }
            Message::Escape | Message::ToggleFilterPanel => {
                self.state.focus = Focus::Board;
            }
            _ => {}
        }
    }

    fn update_wireframe_panel(&mut self, message: Message) -> Option<Command> {
        match message {
            Message::NavigateUp => {
                self.wireframe_scroll = self.wireframe_scroll.saturating_sub(1);
            }
            Message::NavigateDown => {
                self.wireframe_scroll = self.wireframe_scroll.saturating_add(1);
            }
            Message::GenerateWireframe => return self.request_wireframe(),
            Message::Escape | Message::ToggleWireframePanel => {
                self.state.wireframe_visible = false;
                self.state.focus = Focus::Board;
            }
            _ => {}
        }
        None
    }

    /// Contextual cancel for board focus: drop the drag first, then
    /// the card selection, then any toasts.
    fn escape(&mut self) {
        if self.state.drag.take().is_some() {
            return;
        }
        if self.state.selected_story.is_some() {
            self.state.clear_selection();
            return;
        }
        self.state.toasts.clear();
    }

    /// Puts a grabbed card back where it came from.
    fn put_back(&mut self) {
        self.state.drag = None;
    }

    fn pick_up(&mut self) {
        let Some(key) = self.state.selected_card() else {
            return;
        };
        if !self.state.interactions.can_pick_up(key) {
            self.state
                .push_toast(Severity::Warning, "This card cannot be moved right now");
            return;
        }
        self.state.drag = Some(DragState::new(key));
    }

    /// Drops the card in hand into the current cell.
    fn drop_card(&mut self) -> Option<Command> {
        let drag = self.state.drag.take()?;
        let cell = drag.drop_cell();
        if cell == drag.source.cell() {
            return None;
        }

        #[allow(clippy::cast_possible_truncation)]
        let position = self.state.project.cell_stories(cell).len() as u32;
        Some(Command::MoveStory {
            story_id: drag.source.story_id,
            target: StoryMove {
                task_id: cell.task_id,
                release_id: Some(cell.release_id),
                position,
            },
        })
    }

    fn cycle_status(&mut self) -> Option<Command> {
        let key = self.state.selected_card()?;
        if self.state.interactions.status_in_flight(key) {
            return None;
        }
        let story = self.state.selected_story_ref()?;
        let next = story.status.next_in_cycle();
        self.state.interactions.begin_status_change(key);
        Some(Command::CycleStatus { key, status: next })
    }

    /// Deletes the selected story. Refused while a card is in hand, so
    /// the drag never outlives its source.
    fn delete_selected(&mut self) -> Option<Command> {
        if self.state.drag.is_some() {
            return None;
        }
        let key = self.state.selected_card()?;
        Some(Command::DeleteStory {
            story_id: key.story_id,
        })
    }

    fn request_wireframe(&mut self) -> Option<Command> {
        if self.state.wireframe_pending() {
            self.state
                .push_toast(Severity::Info, "A wireframe job is already running");
            return None;
        }
        Some(Command::GenerateWireframe)
    }

    /// Keeps the dwell preview in sync with the card selection.
    ///
    /// Re-arming only on a selection change lets the timer actually
    /// expire; this runs on every loop tick.
    fn sync_hover(&mut self, now: Instant) {
        match self.state.selected_card() {
            Some(key) => {
                let tracked = match self.state.hover {
                    HoverState::Arming { key: k, .. } | HoverState::Showing { key: k } => k == key,
                    HoverState::Idle => false,
                };
                if !tracked {
                    self.state
                        .hover
                        .pointer_enter(key, now, self.config.board.hover_delay());
                }
            }
            None => self.state.hover.pointer_leave(),
        }
        self.state.hover.tick(now, self.state.drag.is_some());
    }

    /// Applies one event from the wireframe poll loop.
    ///
    /// A resolved job triggers exactly one silent refresh so the
    /// generated markdown (or persisted error) becomes visible.
    fn apply_poll_event(&mut self, event: PollEvent) -> Option<Command> {
        match event {
            PollEvent::Status { status, error } => {
                self.state.wireframe.apply(status, error);
                None
            }
            PollEvent::Resolved { status, error } => {
                self.state.wireframe.apply(status, error.clone());
                self.poll = None;
                match status {
                    WireframeStatus::Error => {
                        let detail = error.unwrap_or_else(|| "wireframe generation failed".into());
                        self.state.push_toast(Severity::Error, detail);
                    }
                    _ => self.state.push_toast(Severity::Info, "Wireframe ready"),
                }
                Some(Command::Refresh { silent: true })
            }
            PollEvent::Failed(detail) => {
                warn!(%detail, "wireframe status check failed");
                self.state.push_toast(Severity::Warning, detail);
                None
            }
        }
    }

    /// Executes a backend command, updating state from the outcome.
    async fn execute(&mut self, command: Command) {
        let Some(client) = self.client.clone() else {
            self.state
                .push_toast(Severity::Warning, "No backend configured (read-only demo)");
            if let Command::CycleStatus { key, .. } = command {
                self.state.interactions.finish_status_change(key);
            }
            return;
        };
        let project_id = self.state.project.id;

        match command {
            Command::SubmitStory(story) => match client.create_story(&story).await {
                Ok(created) => {
                    debug!(story_id = created.id, "story created");
                    self.refresh(&client, true).await;
                }
                Err(err) => self.report(&err),
            },
            Command::CycleStatus { key, status } => {
                let outcome = client.update_story_status(key.story_id, status).await;
                self.state.interactions.finish_status_change(key);
                match outcome {
                    Ok(_) => self.refresh(&client, true).await,
                    Err(err) => self.report(&err),
                }
            }
            Command::MoveStory { story_id, target } => {
                match client.move_story(story_id, &target).await {
                    Ok(_) => self.refresh(&client, true).await,
                    Err(err) => self.report(&err),
                }
            }
            Command::DeleteStory { story_id } => match client.delete_story(story_id).await {
                Ok(()) => {
                    self.state.clear_selection();
                    self.refresh(&client, true).await;
                    self.state.push_toast(Severity::Info, "Story deleted");
                }
                Err(err) => self.report(&err),
            },
            Command::GenerateWireframe => match client.generate_wireframe(project_id).await {
                Ok(job_id) => {
                    self.state.wireframe.begin(job_id);
                    let poll_client = Arc::clone(&client);
                    let (handle, rx) = spawn_poll(
                        move || {
                            let client = Arc::clone(&poll_client);
                            async move { client.wireframe_status(project_id).await }
                        },
                        self.config.polling.initial_delay(),
                        self.config.polling.interval(),
                    );
                    if let Some((old, _)) = self.poll.replace((handle, rx)) {
                        old.cancel();
                    }
                }
                Err(err) => self.report(&err),
            },
            Command::Refresh { silent } => {
                self.refresh(&client, silent).await;
            }
        }
    }

    async fn refresh(&mut self, client: &ApiClient, silent: bool) {
        match client.fetch_project(self.state.project.id).await {
            Ok(project) => {
                self.state.replace_project(project);
                if !silent {
                    self.state.push_toast(Severity::Info, "Project refreshed");
                }
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &storymap_api::Error) {
        self.state.push_toast(Severity::Error, err.to_string());
    }

    /// Renders one frame into the buffer.
    pub fn view(&self, area: Rect, buf: &mut Buffer) {
        if area.height <= STATUS_BAR_HEIGHT {
            return;
        }
        let body = Rect::new(
            area.x,
            area.y,
            area.width,
            area.height - STATUS_BAR_HEIGHT,
        );
        let bar = Rect::new(area.x, body.bottom(), area.width, STATUS_BAR_HEIGHT);

        render_board(
            &self.state,
            &self.policy,
            self.config.board.column_width,
            body,
            buf,
        );
        render_status_bar(&self.state, bar, buf);

        if let Some(key) = self.state.hover.preview()
            && let Some((_, story)) = self.state.project.find_story(key.story_id)
        {
            render_preview(story, side_panel(body), buf);
        }

        if let Some(cell) = self.state.drafts.active()
            && let Some(draft) = self.state.drafts.draft(cell)
        {
            render_draft_form(draft, centered(body, 48, 10), buf);
        }

        if self.state.focus == Focus::FilterPanel {
            render_filter_panel(
                &self.state.filter,
                &self.state.project.releases,
                self.filter_cursor,
                centered(body, 40, 14),
                buf,
            );
        }

        if self.state.wireframe_visible {
            render_wireframe_panel(
                &self.state.project,
                &self.state.wireframe,
                self.wireframe_scroll,
                side_panel(body),
                buf,
            );
        }

        if self.state.help_visible {
            render_help(body, buf);
        }
    }

    /// Runs the main loop until quit.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be drawn or read.
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| {
                let area = frame.area();
                self.view(area, frame.buffer_mut());
            })?;

            if let Some(Event::Key(key)) = poll_event()?
                && key.kind == KeyEventKind::Press
            {
                let message = if self.state.focus == Focus::DraftForm {
                    key_to_draft_message(key)
                } else {
                    key_to_message(key)
                };
                if let Some(message) = message
                    && let Some(command) = self.update(message)
                {
                    self.execute(command).await;
                }
            }

            let mut events = Vec::new();
            if let Some((_, rx)) = self.poll.as_mut() {
                while let Ok(event) = rx.try_recv() {
                    events.push(event);
                }
            }
            for event in events {
                if let Some(command) = self.apply_poll_event(event) {
                    self.execute(command).await;
                }
            }

            self.sync_hover(Instant::now());
        }

        if let Some((handle, _)) = self.poll.take() {
            handle.cancel();
        }
        Ok(())
    }
}

/// A right-hand side panel covering a third of the body.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn side_panel(area: Rect) -> Rect {
    let width = (area.width / 3).max(24).min(area.width);
    Rect::new(area.right() - width, area.y, width, area.height)
}
