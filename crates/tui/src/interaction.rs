//! Per-card interaction state.
//!
//! Cards carry three independent pieces of interaction state: drag/drop
//! eligibility flags, a delayed hover preview, and an in-progress drag.
//! Every card is addressed by a composite key rather than the story id
//! alone, because a story can briefly render in two positional contexts
//! while a move is settling.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use storymap_protocol::{CellRef, ReleaseId, StoryId, TaskId};

/// Composite key uniquely addressing one rendered card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardKey {
    /// The story shown on the card.
    pub story_id: StoryId,
    /// The task column the card sits in.
    pub task_id: TaskId,
    /// The release row the card sits in.
    pub release_id: ReleaseId,
}

impl CardKey {
    /// Creates a card key for a story rendered in a cell.
    #[must_use]
    pub const fn new(story_id: StoryId, cell: CellRef) -> Self {
        Self {
            story_id,
            task_id: cell.task_id,
            release_id: cell.release_id,
        }
    }

    /// Returns the cell this card is rendered in.
    #[must_use]
    pub const fn cell(self) -> CellRef {
        CellRef::new(self.task_id, self.release_id)
    }
}

/// Interaction flags for one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFlags {
    /// The card cannot be picked up and renders dimmed.
    pub drag_disabled: bool,
    /// Only the grab affordance is inert; the card stays selectable.
    /// Set while a status change is in flight for this card.
    pub handle_disabled: bool,
}

impl CardFlags {
    const fn is_default(self) -> bool {
        !self.drag_disabled && !self.handle_disabled
    }
}

/// Interaction flags for all cards, keyed by card.
///
/// Cards without an entry carry default flags; entries are dropped again
/// once they return to the default so the map stays small.
#[derive(Debug, Clone, Default)]
pub struct InteractionStore {
    flags: HashMap<CardKey, CardFlags>,
}

impl InteractionStore {
    /// Returns the flags for a card.
    #[must_use]
    pub fn flags(&self, key: CardKey) -> CardFlags {
        self.flags.get(&key).copied().unwrap_or_default()
    }

    /// Returns whether the card may be picked up.
    #[must_use]
    pub fn can_pick_up(&self, key: CardKey) -> bool {
        let flags = self.flags(key);
        !flags.drag_disabled && !flags.handle_disabled
    }

    /// Sets or clears the drag-disabled flag for a card.
    pub fn set_drag_disabled(&mut self, key: CardKey, disabled: bool) {
        self.update(key, |flags| flags.drag_disabled = disabled);
    }

    /// Marks a status change as in flight: the grab handle goes inert
    /// while the card remains selectable and clickable.
    pub fn begin_status_change(&mut self, key: CardKey) {
        self.update(key, |flags| flags.handle_disabled = true);
    }

    /// Clears the in-flight marker after the status mutation settles.
    pub fn finish_status_change(&mut self, key: CardKey) {
        self.update(key, |flags| flags.handle_disabled = false);
    }

    /// Returns whether a status change is outstanding for the card.
    #[must_use]
    pub fn status_in_flight(&self, key: CardKey) -> bool {
        self.flags(key).handle_disabled
    }

    fn update(&mut self, key: CardKey, f: impl FnOnce(&mut CardFlags)) {
        let mut flags = self.flags(key);
        f(&mut flags);
        if flags.is_default() {
            self.flags.remove(&key);
        } else {
            self.flags.insert(key, flags);
        }
    }
}

/// The delayed hover preview state machine.
///
/// Entering a card arms a timer; if the pointer leaves before it fires
/// the preview never shows. The preview is suppressed entirely while a
/// drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    /// No card is hovered.
    #[default]
    Idle,
    /// A card is hovered and the delay timer is running.
    Arming {
        /// The hovered card.
        key: CardKey,
        /// When the preview should appear.
        deadline: Instant,
    },
    /// The preview is showing for a card.
    Showing {
        /// The previewed card.
        key: CardKey,
    },
}

impl HoverState {
    /// Starts (or restarts) the hover timer for a card.
    pub fn pointer_enter(&mut self, key: CardKey, now: Instant, delay: Duration) {
        *self = Self::Arming {
            key,
            deadline: now + delay,
        };
    }

    /// Cancels any pending timer and hides any visible preview.
    pub fn pointer_leave(&mut self) {
        *self = Self::Idle;
    }

    /// Advances the state machine to `now`.
    ///
    /// `dragging` suppresses the preview: an armed timer stays armed but
    /// never fires while a card is in hand.
    pub fn tick(&mut self, now: Instant, dragging: bool) {
        if dragging {
            return;
        }
        if let Self::Arming { key, deadline } = *self
            && now >= deadline
        {
            *self = Self::Showing { key };
        }
    }

    /// Returns the card whose preview should be rendered, if any.
    #[must_use]
    pub const fn preview(&self) -> Option<CardKey> {
        match self {
            Self::Showing { key } => Some(*key),
            _ => None,
        }
    }
}

/// An in-progress card drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    /// The card in hand.
    pub source: CardKey,
    /// The cell currently targeted for the drop, if any.
    pub target: Option<CellRef>,
}

impl DragState {
    /// Picks up a card.
    #[must_use]
    pub const fn new(source: CardKey) -> Self {
        Self {
            source,
            target: None,
        }
    }

    /// Tracks the cell currently under the card.
    pub fn set_target(&mut self, cell: CellRef) {
        self.target = Some(cell);
    }

    /// Returns the cell a drop would commit to.
    ///
    /// Falls back to the card's original cell when no target was ever
    /// hovered, which makes the drop a no-op move.
    #[must_use]
    pub fn drop_cell(&self) -> CellRef {
        self.target.unwrap_or_else(|| self.source.cell())
    }
}
