// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use jiff::civil::Date;

use crate::{
    ActionStatus, Error, Event, EventDraft, EventId, EventRecord, EventRepository, Field,
    FieldErrors, NewEvent, validate_existing, validate_new,
};

/// Whether submitting the form creates an event or replaces one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormMode {
    /// Submitting creates a new event.
    #[default]
    Create,
    /// Submitting replaces the event with this id.
    Edit(EventId),
}

/// A validated form, ready for the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Create a new event.
    Create(NewEvent),
    /// Replace an existing event.
    Update(Event),
}

/// State of the create and edit forms.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    mode: FormMode,
    draft: EventDraft,
    errors: FieldErrors,
    status: ActionStatus,
}

impl EventForm {
    /// Opens a form on `record`: a draft yields a create form, a saved event an edit form.
    pub fn open(record: EventRecord) -> Self {
        let (mode, draft) = match record {
            EventRecord::Draft(draft) => (FormMode::Create, draft),
            EventRecord::Persisted(event) => (FormMode::Edit(event.id), EventDraft::from_event(&event)),
        };
        Self {
            mode,
            draft,
            ..Self::default()
        }
    }

    /// An empty create form.
    pub fn create() -> Self {
        Self::open(EventRecord::Draft(EventDraft::default()))
    }

    /// Fetches event `id` and opens an edit form on it.
    pub async fn load<R>(repo: &R, id: EventId) -> Result<Self, Error>
    where
        R: EventRepository + ?Sized,
    {
        let event = repo.get_event(id).await?;
        Ok(Self::open(EventRecord::Persisted(event)))
    }

    /// Create or edit.
    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// The raw field values.
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    /// Per-field messages from the last submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Outcome of the last submission.
    pub fn status(&self) -> &ActionStatus {
        &self.status
    }

    /// The raw value of `field`.
    pub fn value(&self, field: Field) -> &str {
        field.get(&self.draft)
    }

    /// Replaces the value of `field` and clears its message.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *field.get_mut(&mut self.draft) = value.into();
        self.errors.remove(field);
    }

    /// Shows the loading indicator before [`EventForm::submit`] is awaited.
    pub fn mark_loading(&mut self) {
        self.status = ActionStatus::Loading;
    }

    /// Checks the fields against the rules for the current mode.
    pub fn validate(&self, today: Date) -> Result<Submission, FieldErrors> {
        match self.mode {
            FormMode::Create => validate_new(&self.draft, today).map(Submission::Create),
            FormMode::Edit(id) => validate_existing(id, &self.draft).map(Submission::Update),
        }
    }

    /// Validates and saves the form.
    ///
    /// Invalid input is reported per field without any remote call. After a create the
    /// fields are cleared; after an edit they hold the saved values. A failed call keeps
    /// the input for another attempt.
    pub async fn submit<R>(mut self, repo: &R, today: Date) -> Self
    where
        R: EventRepository + ?Sized,
    {
        let submission = match self.validate(today) {
            Ok(submission) => submission,
            Err(errors) => {
                tracing::debug!(%errors, "form rejected");
                self.errors = errors;
                self.status = ActionStatus::Idle;
                return self;
            }
        };

        self.errors = FieldErrors::default();
        self.status = ActionStatus::Loading;
        let result = match submission {
            Submission::Create(event) => repo.create_event(event).await,
            Submission::Update(event) => repo.update_event(event).await,
        };

        self.status = match result {
            Ok(saved) => {
                let message = saved.message.unwrap_or_else(|| "Event saved".to_string());
                let status = ActionStatus::Success(format!("{message} Id: {}", saved.data.id));
                self.draft = match self.mode {
                    FormMode::Create => EventDraft::default(),
                    FormMode::Edit(_) => EventDraft::from_event(&saved.data),
                };
                status
            }
            Err(e) => {
                tracing::debug!(error = %e, "saving event failed");
                ActionStatus::Failed(e.to_string())
            }
        };
        self
    }
}
