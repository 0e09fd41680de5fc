// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::pin::pin;
use std::sync::Arc;
use std::{cell::RefCell, error::Error, io, rc::Rc};

use evdesk_core::{ActionStatus, Desk, EventForm, ListScreen};
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::new_event_editor;
use crate::tui::event_store::EventStore;
use crate::tui::list_store::{ListIntent, ListStore};
use crate::tui::list_view::new_list_view;

/// Runs the event list until the user quits.
pub async fn run_list(desk: &Desk) -> Result<(), Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = list_loop(desk, &mut terminal).await;
    ratatui::restore();
    result
}

/// Runs a create or edit form until the user leaves it, returning its final state.
pub async fn run_form(desk: &Desk, form: EventForm) -> Result<EventForm, Box<dyn Error>> {
    let mut terminal = ratatui::init();
    let result = form_loop(desk, form, &mut terminal).await;
    ratatui::restore();
    result
}

async fn list_loop(desk: &Desk, terminal: &mut DefaultTerminal) -> Result<(), Box<dyn Error>> {
    let store = Rc::new(RefCell::new(ListStore::new()));
    let mut dispatcher = Dispatcher::new();
    ListStore::register_to(store.clone(), &mut dispatcher);
    let mut view = new_list_view();

    reload(desk, &store, terminal, &view).await?;
    loop {
        let area = draw(terminal, &view, &*store)?;
        let Some(key) = read_key()? else {
            continue;
        };
        if is_interrupt(&key) {
            break Ok(());
        }
        if let Some(Message::Exit) = view.on_key(&mut dispatcher, &store, area, key) {
            break Ok(());
        }

        let intent = store.borrow_mut().intent.take();
        match intent {
            None => {}
            Some(ListIntent::Reload) => reload(desk, &store, terminal, &view).await?,
            Some(ListIntent::Confirm) => {
                store.borrow_mut().screen.mark_loading();
                let screen = store.borrow().screen.clone();
                store.borrow_mut().screen.cancel();
                draw(terminal, &view, &*store)?;
                let screen = confirm(desk, screen, &store, terminal, &view).await?;
                store.borrow_mut().set_screen(screen);
            }
            Some(ListIntent::New) => {
                let form = form_loop(desk, EventForm::create(), terminal).await?;
                reload(desk, &store, terminal, &view).await?;
                report_saved(&store, form.status());
            }
            Some(ListIntent::Edit(id)) => {
                store.borrow_mut().screen.mark_loading();
                draw(terminal, &view, &*store)?;
                match EventForm::load(desk.repository(), id).await {
                    Ok(form) => {
                        let form = form_loop(desk, form, terminal).await?;
                        reload(desk, &store, terminal, &view).await?;
                        report_saved(&store, form.status());
                    }
                    Err(e) => {
                        tracing::debug!(%id, error = %e, "failed to open event");
                        let status = ActionStatus::Failed(e.to_string());
                        store.borrow_mut().screen.set_status(status);
                    }
                }
            }
        }
    }
}

async fn reload<C: Component<ListStore>>(
    desk: &Desk,
    store: &RefCell<ListStore>,
    terminal: &mut DefaultTerminal,
    view: &C,
) -> Result<(), Box<dyn Error>> {
    store.borrow_mut().screen.mark_loading();
    draw(terminal, view, store)?;
    let screen = std::mem::take(&mut store.borrow_mut().screen);
    let screen = screen.load(desk.repository()).await;
    store.borrow_mut().set_screen(screen);
    Ok(())
}

/// Runs the confirmed action. While a calendar push waits for the browser, the sign-in
/// URL is shown in the banner of the screen left in `store`.
async fn confirm<C: Component<ListStore>>(
    desk: &Desk,
    screen: ListScreen,
    store: &RefCell<ListStore>,
    terminal: &mut DefaultTerminal,
    view: &C,
) -> Result<ListScreen, Box<dyn Error>> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let bridge = desk.calendar(Arc::new(move |url: &str| {
        let _ = tx.send(url.to_string());
    }));

    let mut action = pin!(screen.confirm(desk.repository(), &bridge));
    loop {
        tokio::select! {
            screen = &mut action => return Ok(screen),
            Some(url) = rx.recv() => {
                store.borrow_mut().sign_in_url = Some(url);
                draw(terminal, view, store)?;
            }
        }
    }
}

/// Keeps the form's success message on the list after it reloads.
fn report_saved(store: &RefCell<ListStore>, status: &ActionStatus) {
    let mut store = store.borrow_mut();
    if let ActionStatus::Success(_) = status
        && !matches!(store.screen.status(), ActionStatus::Failed(_))
    {
        store.screen.set_status(status.clone());
    }
}

async fn form_loop(
    desk: &Desk,
    form: EventForm,
    terminal: &mut DefaultTerminal,
) -> Result<EventForm, Box<dyn Error>> {
    let mode = form.mode();
    let store = Rc::new(RefCell::new(EventStore::new(form)));
    let mut dispatcher = Dispatcher::new();
    EventStore::register_to(store.clone(), &mut dispatcher);
    let mut view = new_event_editor(mode);
    view.activate(&mut dispatcher, &store);

    loop {
        let area = draw(terminal, &view, &*store)?;
        let Some(key) = read_key()? else {
            continue;
        };
        if is_interrupt(&key) {
            break;
        }
        if let Some(Message::Exit) = view.on_key(&mut dispatcher, &store, area, key) {
            break;
        }

        let submit = store.borrow_mut().take_submit();
        if submit {
            store.borrow_mut().form.mark_loading();
            draw(terminal, &view, &*store)?;
            let form = std::mem::take(&mut store.borrow_mut().form);
            let form = form.submit(desk.repository(), desk.today()).await;
            store.borrow_mut().form = form;
        }
    }

    view.deactivate(&mut dispatcher, &store);
    let form = std::mem::take(&mut store.borrow_mut().form);
    Ok(form)
}

/// Draws one frame and returns the area the view was laid out in.
fn draw<S, C: Component<S>>(
    terminal: &mut DefaultTerminal,
    view: &C,
    store: &RefCell<S>,
) -> io::Result<Rect> {
    let mut area = Rect::default();
    terminal.draw(|frame| {
        area = frame.area();
        view.render(store, area, frame.buffer_mut());
        if let Some(position) = view.get_cursor_position(store, area) {
            frame.set_cursor_position(position);
        }
    })?;
    Ok(area)
}

fn read_key() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
        _ => Ok(None),
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
