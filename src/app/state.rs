use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::KeyCode;

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::moods::{MoodError, MoodRegistry};
use crate::palette::{self, RandomSource, ThreadRandom};
use crate::types::{HISTORY_CAP, HistoryEntry, Palette};

use super::{AppEvent, AppView};

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: AppView,
    pub registry: MoodRegistry,
    pub current_mood: String,
    pub current_colors: Palette,
    pub history: Vec<HistoryEntry>,
    pub pending: Option<PendingPalette>,
    pub selected_mood_index: usize,
    pub selected_history_index: usize,
    pub status: Option<String>,
    pub reveal_delay: Duration,
    pub rng: Box<dyn RandomSource>,
    pub clipboard: Box<dyn Clipboard>,
}

/// A generated palette waiting out the reveal delay before it becomes
/// current. The mood is captured at request time, so switching moods while
/// a generation is in flight does not relabel the history entry.
pub struct PendingPalette {
    pub mood: String,
    pub colors: Palette,
    pub commit_at: Instant,
}

impl App {
    pub fn new(registry: MoodRegistry, reveal_delay: Duration) -> Self {
        let mut rng: Box<dyn RandomSource> = Box::new(ThreadRandom);
        // The registry is validated non-empty on load.
        let first = registry.moods()[0].clone();
        let current_colors = palette::vary(&first.colors, rng.as_mut());

        Self {
            running: true,
            view: AppView::Board,
            registry,
            current_mood: first.id,
            current_colors,
            history: Vec::new(),
            pending: None,
            selected_mood_index: 0,
            selected_history_index: 0,
            status: None,
            reveal_delay,
            rng,
            clipboard: Box::new(Osc52Clipboard::stdout()),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.commit_due_palette(),
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.view == AppView::Help {
            match key {
                KeyCode::Char('q') => self.running = false,
                KeyCode::Char('?') | KeyCode::Esc => self.view = AppView::Board,
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('?') => self.view = AppView::Help,
            KeyCode::Char('g') | KeyCode::Char(' ') => self.request_new_palette(),
            KeyCode::Char('c') => self.copy_current_palette(),
            KeyCode::Left => self.select_mood_left(),
            KeyCode::Right => self.select_mood_right(),
            KeyCode::Up => self.move_history_up(),
            KeyCode::Down => self.move_history_down(),
            KeyCode::Enter => self.apply_selected_history(),
            KeyCode::Char(ch) if ch.is_ascii_digit() => {
                if let Some(index) = (ch as usize).checked_sub('1' as usize) {
                    self.select_mood_at(index);
                }
            }
            _ => {}
        }
    }

    /// Switch to `id` and install a fresh palette for it. Mood switches
    /// never touch the history.
    pub fn select_mood(&mut self, id: &str) -> Result<(), MoodError> {
        let mood = self.registry.get(id)?;
        let id = mood.id.clone();
        let colors = mood.colors.clone();

        self.current_mood = id;
        self.current_colors = palette::vary(&colors, self.rng.as_mut());
        if let Some(index) = self.registry.position(&self.current_mood) {
            self.selected_mood_index = index;
        }
        self.status = None;
        Ok(())
    }

    /// Kick off a generation for the current mood. The palette is computed
    /// now and committed once the reveal delay elapses; a second request
    /// while one is in flight is a no-op.
    pub fn request_new_palette(&mut self) {
        if self.pending.is_some() {
            return;
        }
        let Ok(mood) = self.registry.get(&self.current_mood) else {
            return;
        };
        let colors = mood.colors.clone();
        let colors = palette::vary(&colors, self.rng.as_mut());
        self.pending = Some(PendingPalette {
            mood: self.current_mood.clone(),
            colors,
            commit_at: Instant::now() + self.reveal_delay,
        });
        self.status = None;
    }

    /// Commit the pending palette once its reveal deadline has passed:
    /// make it current and prepend it to the capped history.
    pub fn commit_due_palette(&mut self) {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| Instant::now() >= pending.commit_at);
        if !due {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };
        self.current_colors = pending.colors.clone();
        self.history.insert(
            0,
            HistoryEntry {
                mood: pending.mood,
                colors: pending.colors,
                created_at: Local::now(),
            },
        );
        self.history.truncate(HISTORY_CAP);
        self.selected_history_index = 0;
    }

    /// Bring the selected history entry's colors back as the current
    /// palette. Browsing history neither re-enters it nor changes the mood.
    pub fn apply_selected_history(&mut self) {
        if let Some(entry) = self.history.get(self.selected_history_index) {
            self.current_colors = entry.colors.clone();
        }
    }

    /// Hand the current palette to the clipboard, joined with `", "`. A
    /// missing or failing clipboard is ignored.
    pub fn copy_current_palette(&mut self) {
        let joined = self.current_colors.join(", ");
        if self.clipboard.write_text(&joined).is_ok() {
            self.status = Some(format!("Copied {joined}"));
        }
    }

    fn select_mood_left(&mut self) {
        let count = self.registry.moods().len();
        let index = if self.selected_mood_index == 0 {
            count - 1
        } else {
            self.selected_mood_index - 1
        };
        self.select_mood_at(index);
    }

    fn select_mood_right(&mut self) {
        let index = (self.selected_mood_index + 1) % self.registry.moods().len();
        self.select_mood_at(index);
    }

    fn select_mood_at(&mut self, index: usize) {
        let Some(mood) = self.registry.moods().get(index) else {
            return;
        };
        let id = mood.id.clone();
        if let Err(err) = self.select_mood(&id) {
            self.status = Some(err.to_string());
        }
    }

    fn move_history_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        if self.selected_history_index == 0 {
            self.selected_history_index = self.history.len() - 1;
        } else {
            self.selected_history_index -= 1;
        }
    }

    fn move_history_down(&mut self) {
        if self.history.is_empty() {
            return;
        }
        self.selected_history_index = (self.selected_history_index + 1) % self.history.len();
    }
}
