//! Interaction state for the student lookup input and its suggestion list.
//!
//! The component never touches a UI directly. Hosts feed it [`ComboboxEvent`]s
//! and apply the returned [`Effect`]s, including the deferred close that
//! follows a blur. A pending close is identified by a [`TimerHandle`] so that a
//! competing focus or option press can cancel it before it fires.

use std::sync::Arc;
use std::time::Duration;

use tracing::trace;

use super::directory::Directory;
use super::suggest::{Suggestion, SuggestionEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComboboxEvent {
    Input(String),
    Focus,
    Blur,
    BlurElapsed(TimerHandle),
    PointerDownOutside,
    PointerDownOption(usize),
    Key(Key),
    Submit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The list contents or highlighted option changed.
    Render,
    Close,
    ScheduleBlurClose {
        handle: TimerHandle,
        delay: Duration,
    },
    CancelBlurClose(TimerHandle),
    SetValue {
        value: String,
        caret: usize,
    },
    FocusInput,
    /// Suppress the default key or submit behavior of the input.
    PreventDefault,
    SubmitLookup(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListState {
    Closed,
    Open {
        suggestions: Vec<Suggestion>,
        active_index: Option<usize>,
    },
}

/// Combobox semantics mirrored onto the input element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaState {
    pub expanded: bool,
    pub controls: String,
    pub active_descendant: Option<String>,
}

#[derive(Debug)]
pub struct Combobox {
    directory: Arc<Directory>,
    engine: SuggestionEngine,
    listbox_id: String,
    blur_delay: Duration,
    value: String,
    state: ListState,
    pending_close: Option<TimerHandle>,
    next_timer: u64,
    // Focus returned by a selection must not reopen the list.
    suppress_focus_open: bool,
}

impl Combobox {
    pub fn new(
        directory: Arc<Directory>,
        engine: SuggestionEngine,
        listbox_id: impl Into<String>,
        blur_delay: Duration,
    ) -> Self {
        Self {
            directory,
            engine,
            listbox_id: listbox_id.into(),
            blur_delay,
            value: String::new(),
            state: ListState::Closed,
            pending_close: None,
            next_timer: 1,
            suppress_focus_open: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ListState::Open { .. })
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        match &self.state {
            ListState::Open { suggestions, .. } => suggestions,
            ListState::Closed => &[],
        }
    }

    pub fn active_index(&self) -> Option<usize> {
        match &self.state {
            ListState::Open { active_index, .. } => *active_index,
            ListState::Closed => None,
        }
    }

    pub fn pending_close(&self) -> Option<TimerHandle> {
        self.pending_close
    }

    pub fn option_id(&self, index: usize) -> String {
        format!("{}-option-{index}", self.listbox_id)
    }

    pub fn aria(&self) -> AriaState {
        AriaState {
            expanded: self.is_open(),
            controls: self.listbox_id.clone(),
            active_descendant: self.active_index().map(|index| self.option_id(index)),
        }
    }

    pub fn handle(&mut self, event: ComboboxEvent) -> Vec<Effect> {
        trace!(?event, open = self.is_open(), "combobox event");
        let mut effects = Vec::new();

        match event {
            ComboboxEvent::Input(value) => {
                self.suppress_focus_open = false;
                self.value = value;
                self.refresh(&mut effects);
            }
            ComboboxEvent::Focus => {
                self.cancel_pending_close(&mut effects);
                if std::mem::take(&mut self.suppress_focus_open) {
                    return effects;
                }
                self.refresh(&mut effects);
            }
            ComboboxEvent::Blur => {
                self.suppress_focus_open = false;
                if self.is_open() {
                    self.cancel_pending_close(&mut effects);
                    let handle = TimerHandle(self.next_timer);
                    self.next_timer += 1;
                    self.pending_close = Some(handle);
                    effects.push(Effect::ScheduleBlurClose {
                        handle,
                        delay: self.blur_delay,
                    });
                }
            }
            ComboboxEvent::BlurElapsed(handle) => {
                if self.pending_close == Some(handle) {
                    self.pending_close = None;
                    self.close(&mut effects);
                }
            }
            ComboboxEvent::PointerDownOutside => self.close(&mut effects),
            ComboboxEvent::PointerDownOption(index) => {
                // A press that misses every option leaves the pending close running.
                if index < self.suggestions().len() {
                    self.cancel_pending_close(&mut effects);
                    self.select(index, &mut effects);
                }
            }
            ComboboxEvent::Key(key) => self.handle_key(key, &mut effects),
            ComboboxEvent::Submit => {
                self.cancel_pending_close(&mut effects);
                self.close(&mut effects);
                effects.push(Effect::PreventDefault);
                effects.push(Effect::SubmitLookup(self.value.clone()));
            }
        }

        effects
    }

    fn handle_key(&mut self, key: Key, effects: &mut Vec<Effect>) {
        match key {
            Key::ArrowDown => {
                if !self.is_open() {
                    self.refresh(effects);
                }
                if let ListState::Open {
                    suggestions,
                    active_index,
                } = &mut self.state
                {
                    let next = match *active_index {
                        Some(index) => (index + 1) % suggestions.len(),
                        None => 0,
                    };
                    *active_index = Some(next);
                    effects.push(Effect::PreventDefault);
                    effects.push(Effect::Render);
                }
            }
            Key::ArrowUp => {
                if let ListState::Open {
                    suggestions,
                    active_index,
                } = &mut self.state
                {
                    let last = suggestions.len() - 1;
                    let previous = match *active_index {
                        Some(0) | None => last,
                        Some(index) => index - 1,
                    };
                    *active_index = Some(previous);
                    effects.push(Effect::PreventDefault);
                    effects.push(Effect::Render);
                }
            }
            Key::Enter => match self.active_index() {
                Some(index) => {
                    effects.push(Effect::PreventDefault);
                    self.select(index, effects);
                }
                None if self.is_open() => {
                    effects.push(Effect::PreventDefault);
                    self.close(effects);
                }
                None => {}
            },
            Key::Escape => {
                if self.is_open() {
                    effects.push(Effect::PreventDefault);
                    self.close(effects);
                }
            }
            Key::Other => {}
        }
    }

    fn refresh(&mut self, effects: &mut Vec<Effect>) {
        let suggestions = self.engine.compute(&self.directory, &self.value);
        if suggestions.is_empty() {
            self.close(effects);
            return;
        }

        self.state = ListState::Open {
            suggestions,
            active_index: None,
        };
        effects.push(Effect::Render);
    }

    fn select(&mut self, index: usize, effects: &mut Vec<Effect>) {
        let Some(suggestion) = self.suggestions().get(index) else {
            return;
        };
        let value = suggestion.value.clone();

        self.value = value.clone();
        self.close(effects);
        self.suppress_focus_open = true;
        effects.push(Effect::SetValue {
            caret: value.chars().count(),
            value,
        });
        effects.push(Effect::FocusInput);
    }

    fn close(&mut self, effects: &mut Vec<Effect>) {
        if self.is_open() {
            self.state = ListState::Closed;
            effects.push(Effect::Close);
        }
    }

    fn cancel_pending_close(&mut self, effects: &mut Vec<Effect>) {
        if let Some(handle) = self.pending_close.take() {
            effects.push(Effect::CancelBlurClose(handle));
        }
    }
}
