// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evdesk_core::PendingAction;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState, Wrap};

use crate::tui::component::{Component, Message};
use crate::tui::component_page::{Instructions, SinglePage, status_line};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::list_store::ListStore;
use crate::util::{format_date, truncate_to_width};

const INSTRUCTIONS: Instructions = &[
    ("New", "n"),
    ("Edit", "e"),
    ("Delete", "d"),
    ("Calendar", "g"),
    ("Reload", "r"),
    ("Quit", "q"),
];

const DESCRIPTION_MAX_WIDTH: usize = 48;

pub fn new_list_view() -> SinglePage<ListStore, EventList> {
    SinglePage::new("Events", INSTRUCTIONS, EventList)
}

/// The event table, the status banner and the confirmation dialog.
pub struct EventList;

impl EventList {
    fn split(area: Rect) -> [Rect; 2] {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
    }

    fn render_table(store: &ListStore, area: Rect, buf: &mut Buffer) {
        let header = ["Name", "Description", "Date", "Start", "End"]
            .into_iter()
            .map(|h| Cell::from(h).bold())
            .collect::<Row>();

        let rows = store.screen.events().iter().map(|e| {
            Row::new([
                Cell::from(e.name.as_str()),
                Cell::from(truncate_to_width(&e.description, DESCRIPTION_MAX_WIDTH)),
                Cell::from(format_date(e.date)),
                Cell::from(e.init_hour.as_str()),
                Cell::from(e.end_hour.as_str()),
            ])
        });

        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(3),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(5),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .row_highlight_style(Style::new().reversed())
            .highlight_symbol("> ");

        if store.screen.events().is_empty() {
            let [_, message] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
            Widget::render(table, area, buf);
            Paragraph::new("No events yet, press n to create one".dark_gray())
                .centered()
                .render(message, buf);
            return;
        }

        let mut state = TableState::default().with_selected(Some(store.selected));
        StatefulWidget::render(table, area, buf, &mut state);
    }

    fn render_dialog(pending: &PendingAction, area: Rect, buf: &mut Buffer) {
        let [popup] = Layout::vertical([Constraint::Length(6)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::horizontal([Constraint::Percentage(60)])
            .flex(Flex::Center)
            .areas(popup);

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .title(Line::from(" Confirm ".bold()).centered())
            .yellow();
        let text = vec![
            Line::from(pending.prompt()),
            Line::default(),
            Line::from(vec![
                "<y>".blue().bold(),
                " Yes   ".into(),
                "<n>".blue().bold(),
                " No".into(),
            ]),
        ];

        Clear.render(popup, buf);
        Paragraph::new(text)
            .block(block)
            .centered()
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

impl Component<ListStore> for EventList {
    fn render(&self, store: &RefCell<ListStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let [table, banner] = Self::split(area);
        Self::render_table(&store, table, buf);
        let line = match &store.sign_in_url {
            Some(url) => Line::from(vec![
                " Sign in to Google Calendar: ".yellow(),
                url.as_str().underlined(),
            ]),
            None => status_line(store.screen.status()),
        };
        Paragraph::new(line).render(banner, buf);

        if let Some(pending) = store.screen.pending() {
            Self::render_dialog(pending, area, buf);
        }
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<ListStore>,
        _area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let dialog_open = store.borrow().screen.pending().is_some();
        if dialog_open {
            match event.code {
                KeyCode::Char('y') | KeyCode::Enter => dispatcher.dispatch(Action::ConfirmDialog),
                KeyCode::Char('n') | KeyCode::Esc => dispatcher.dispatch(Action::CancelDialog),
                _ => {}
            }
            // the dialog is modal
            return Some(Message::Handled);
        }

        let action = match event.code {
            KeyCode::Up | KeyCode::Char('k') => Action::SelectPrevious,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectNext,
            KeyCode::Char('n') => Action::NewEvent,
            KeyCode::Char('e') | KeyCode::Enter => Action::EditSelected,
            KeyCode::Char('d') => Action::RequestDelete,
            KeyCode::Char('g') => Action::RequestCalendarSync,
            KeyCode::Char('r') => Action::Reload,
            KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Exit),
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}
