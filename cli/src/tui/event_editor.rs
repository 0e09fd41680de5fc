// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evdesk_core::{Field, FormMode};
use ratatui::crossterm::event::KeyEvent;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, FormItem, Input};
use crate::tui::component_page::{Instructions, SinglePage, status_line};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventStore;

const INSTRUCTIONS: Instructions = &[("Prev", "Up"), ("Next", "Down"), ("Save", "Enter"), ("Back", "Esc")];

pub fn new_event_editor(mode: FormMode) -> SinglePage<EventStore, EventPanel> {
    let title = match mode {
        FormMode::Create => "New Event".to_string(),
        FormMode::Edit(id) => format!("Edit Event #{id}"),
    };
    SinglePage::new(title, INSTRUCTIONS, EventPanel::new())
}

/// The event fields above a status banner.
pub struct EventPanel {
    form: Form<EventStore, Box<dyn FormItem<EventStore>>>,
}

impl EventPanel {
    pub fn new() -> Self {
        Self {
            form: Form::new(vec![
                Box::new(new_name()),
                Box::new(new_description()),
                Box::new(new_date()),
                Box::new(new_init_hour()),
                Box::new(new_end_hour()),
            ]),
        }
    }

    fn split(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
    }
}

impl Component<EventStore> for EventPanel {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        let [form, banner] = Self::split(area);
        self.form.render(store, form, buf);
        Paragraph::new(status_line(store.borrow().form.status())).render(banner, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<EventStore>, area: Rect) -> Option<(u16, u16)> {
        let [form, _] = Self::split(area);
        self.form.get_cursor_position(store, form)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let [form, _] = Self::split(area);
        self.form.on_key(dispatcher, store, form, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $acc: ident, $field: expr) => {
        fn $fn() -> Input<EventStore, $acc> {
            Input::new($field.label())
        }

        struct $acc;

        impl Access<EventStore, String> for $acc {
            fn get(store: &RefCell<EventStore>) -> String {
                store.borrow().form.value($field).to_string()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::UpdateField($field, value));
                true
            }

            fn error(store: &RefCell<EventStore>) -> Option<String> {
                store.borrow().form.errors().get($field).map(str::to_string)
            }
        }
    };
}

new_input!(new_name, NameAccess, Field::Name);
new_input!(new_description, DescriptionAccess, Field::Description);
new_input!(new_date, DateAccess, Field::Date);
new_input!(new_init_hour, InitHourAccess, Field::InitHour);
new_input!(new_end_hour, EndHourAccess, Field::EndHour);
