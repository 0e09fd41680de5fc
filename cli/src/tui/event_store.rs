// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use evdesk_core::EventForm;

use crate::tui::dispatcher::{Action, Dispatcher};

#[derive(Debug, Default)]
pub struct EventStore {
    pub form: EventForm,

    /// Whether the user asked to submit the form.
    pub submit: bool,
}

impl EventStore {
    pub fn new(form: EventForm) -> Self {
        Self {
            form,
            submit: false,
        }
    }

    /// Returns the pending submit request and clears it.
    pub fn take_submit(&mut self) -> bool {
        std::mem::take(&mut self.submit)
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| match action {
            Action::UpdateField(field, value) => {
                that.borrow_mut().form.set(*field, value.clone());
            }
            Action::SubmitChanges => {
                that.borrow_mut().submit = true;
            }
            _ => (),
        }));
        dispatcher.register(callback);
    }
}
