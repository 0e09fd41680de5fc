// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use evdesk_core::{Event, EventId, ListScreen};

use crate::tui::dispatcher::{Action, Dispatcher};

/// Work the app loop runs after a key press, since handlers await remote calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListIntent {
    Reload,
    Confirm,
    New,
    Edit(EventId),
}

#[derive(Debug, Default)]
pub struct ListStore {
    pub screen: ListScreen,
    pub selected: usize,
    pub intent: Option<ListIntent>,
    /// Google sign-in page shown while a calendar push waits for the browser.
    pub sign_in_url: Option<String>,
}

impl ListStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.screen.events().get(self.selected)
    }

    /// Puts back a screen returned by a handler, keeping the selection in range.
    pub fn set_screen(&mut self, screen: ListScreen) {
        self.screen = screen;
        self.sign_in_url = None;
        let len = self.screen.events().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::SelectPrevious => that.selected = that.selected.saturating_sub(1),
                Action::SelectNext => {
                    if that.selected + 1 < that.screen.events().len() {
                        that.selected += 1;
                    }
                }
                Action::RequestDelete => {
                    if let Some(event) = that.selected_event().cloned() {
                        that.screen.request_delete(event);
                    }
                }
                Action::RequestCalendarSync => {
                    if let Some(event) = that.selected_event().cloned() {
                        that.screen.request_calendar_sync(event);
                    }
                }
                Action::CancelDialog => that.screen.cancel(),
                Action::ConfirmDialog => that.intent = Some(ListIntent::Confirm),
                Action::Reload => that.intent = Some(ListIntent::Reload),
                Action::NewEvent => that.intent = Some(ListIntent::New),
                Action::EditSelected => {
                    that.intent = that.selected_event().map(|e| ListIntent::Edit(e.id));
                }
                _ => (),
            }
        }));
        dispatcher.register(callback);
    }
}
