use iced::widget::{button, checkbox, column, container, horizontal_space, row, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod state;
mod ui;

use crate::api::{ApiError, RosterApi};
use crate::config::Config;
use crate::state::data::Student;
use crate::state::form::{self, Field, Modals, Pending};
use crate::state::roster::Roster;

/// Main application state
struct RosterManager {
    /// REST client for the roster resource
    api: RosterApi,
    /// In-memory mirror of the server's collection
    roster: Roster,
    /// Record targeted by an in-progress edit or delete
    selected: Option<Student>,
    /// Scratch record for the add flow
    draft: Student,
    /// Modal visibility flags
    modals: Modals,
    /// Per-operation in-flight flags
    pending: Pending,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Initial collection fetch finished
    Loaded(Result<Vec<Student>, ApiError>),
    /// "Add New Employee" clicked
    AddPressed,
    /// Edit clicked on a table row
    EditPressed(Student),
    /// Delete clicked on a table row
    DeletePressed(Student),
    /// Typed field edit routed to the draft (add form)
    DraftField(Field),
    /// Typed field edit routed to the selected record (edit form)
    SelectedField(Field),
    SubmitAdd,
    SubmitEdit,
    SubmitDelete,
    CancelAdd,
    CancelEdit,
    CancelDelete,
    /// Create round-trip finished
    Created(Result<Student, ApiError>),
    /// Update round-trip finished
    Updated(Result<Student, ApiError>),
    /// Delete round-trip finished, carrying the deleted id
    Deleted(Result<i64, ApiError>),
}

impl RosterManager {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        Self::with_api(RosterApi::new(&config.server))
    }

    fn with_api(api: RosterApi) -> (Self, Task<Message>) {
        tracing::info!(endpoint = api.endpoint(), "loading roster");

        let fetch = Task::perform(api.clone().fetch_all(), Message::Loaded);

        (
            Self {
                api,
                roster: Roster::new(),
                selected: None,
                draft: Student::draft(),
                modals: Modals::default(),
                pending: Pending {
                    fetch: true,
                    ..Pending::default()
                },
                status: String::from("Loading records..."),
            },
            fetch,
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Loaded(Ok(students)) => {
                self.pending.fetch = false;
                self.roster.replace_all(students);
                self.status = if self.roster.is_empty() {
                    String::from("No records on the server yet.")
                } else {
                    format!("{} records loaded.", self.roster.len())
                };
                Task::none()
            }
            Message::Loaded(Err(err)) => {
                // Roster stays empty; no retry, no error surface beyond
                // the status line.
                self.pending.fetch = false;
                tracing::error!(%err, "failed to fetch records");
                self.status = String::from("Could not load records from the server.");
                Task::none()
            }

            Message::AddPressed => {
                self.modals.add = true;
                Task::none()
            }
            Message::EditPressed(student) => {
                self.selected = Some(student);
                self.modals.edit = true;
                Task::none()
            }
            Message::DeletePressed(student) => {
                self.selected = Some(student);
                self.modals.delete = true;
                Task::none()
            }

            Message::DraftField(field) => {
                form::apply(&mut self.draft, field);
                Task::none()
            }
            Message::SelectedField(field) => {
                if let Some(selected) = self.selected.as_mut() {
                    form::apply(selected, field);
                }
                Task::none()
            }

            Message::SubmitAdd => {
                if self.pending.create || !self.draft.has_required_fields() {
                    return Task::none();
                }
                self.pending.create = true;
                Task::perform(self.api.clone().create(self.draft.clone()), Message::Created)
            }
            Message::SubmitEdit => {
                // Guarded no-op without a selected record
                let Some(selected) = self.selected.clone() else {
                    return Task::none();
                };
                if self.pending.update {
                    return Task::none();
                }
                self.pending.update = true;
                Task::perform(self.api.clone().update(selected), Message::Updated)
            }
            Message::SubmitDelete => {
                let Some(selected) = self.selected.as_ref() else {
                    return Task::none();
                };
                if self.pending.delete {
                    return Task::none();
                }
                self.pending.delete = true;
                Task::perform(self.api.clone().delete(selected.id), Message::Deleted)
            }

            Message::CancelAdd => {
                // The draft is scratch state for the add flow only
                self.modals.add = false;
                self.draft = Student::draft();
                Task::none()
            }
            Message::CancelEdit => {
                self.modals.edit = false;
                Task::none()
            }
            Message::CancelDelete => {
                self.modals.delete = false;
                Task::none()
            }

            Message::Created(Ok(student)) => {
                // Only the server's copy enters the roster; it carries
                // the real id and timestamp.
                debug_assert!(student.is_persisted());
                self.pending.create = false;
                self.status = format!("Added {}.", student.student_name);
                self.roster.append(student);
                self.modals.add = false;
                self.draft = Student::draft();
                Task::none()
            }
            Message::Created(Err(err)) => {
                // Modal stays open with the user's input intact
                self.pending.create = false;
                tracing::error!(%err, "failed to add the record");
                Task::none()
            }

            Message::Updated(Ok(student)) => {
                self.pending.update = false;
                self.status = format!("Saved {}.", student.student_name);
                if !self.roster.replace(student.clone()) {
                    tracing::warn!(id = student.id, "updated record is no longer in the roster");
                }
                self.modals.edit = false;
                Task::none()
            }
            Message::Updated(Err(err)) => {
                self.pending.update = false;
                tracing::error!(%err, "failed to save the record");
                Task::none()
            }

            Message::Deleted(Ok(id)) => {
                self.pending.delete = false;
                if self.roster.remove(id) {
                    self.status = String::from("Record deleted.");
                } else {
                    tracing::warn!(id, "deleted record was not in the roster");
                }
                self.modals.delete = false;
                Task::none()
            }
            Message::Deleted(Err(err)) => {
                self.pending.delete = false;
                tracing::error!(%err, "failed to delete the record");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let title = row![
            text("Manage Employees").size(28),
            horizontal_space(),
            button("Add New Employee")
                .style(button::success)
                .on_press(Message::AddPressed),
        ]
        .align_y(Alignment::Center);

        let base = container(
            column![
                title,
                ui::table::view(self.roster.students()),
                text(&self.status).size(14),
            ]
            .spacing(20),
        )
        .padding(30)
        .width(Length::Fill)
        .height(Length::Fill);

        // The flags are independent; when several are set the add form
        // takes precedence, then edit, then delete.
        if self.modals.add {
            ui::modal::modal(base, self.add_form(), Message::CancelAdd)
        } else if self.modals.edit {
            match &self.selected {
                Some(selected) => ui::modal::modal(base, self.edit_form(selected), Message::CancelEdit),
                None => base.into(),
            }
        } else if self.modals.delete {
            match &self.selected {
                Some(selected) => {
                    ui::modal::modal(base, self.delete_form(selected), Message::CancelDelete)
                }
                None => base.into(),
            }
        } else {
            base.into()
        }
    }

    fn add_form(&self) -> Element<Message> {
        let can_submit = !self.pending.create && self.draft.has_required_fields();

        form_card(
            "Add Employee",
            record_fields(&self.draft, Message::DraftField),
            button("Add")
                .style(button::success)
                .on_press_maybe(can_submit.then_some(Message::SubmitAdd)),
            Message::CancelAdd,
        )
    }

    fn edit_form(&self, selected: &Student) -> Element<Message> {
        let can_submit = !self.pending.update && selected.has_required_fields();

        form_card(
            "Edit Employee",
            record_fields(selected, Message::SelectedField),
            button("Save")
                .style(button::primary)
                .on_press_maybe(can_submit.then_some(Message::SubmitEdit)),
            Message::CancelEdit,
        )
    }

    fn delete_form(&self, selected: &Student) -> Element<Message> {
        form_card(
            "Delete Employee",
            column![
                text(format!(
                    "Are you sure you want to delete {}?",
                    selected.student_name
                )),
                text("This action cannot be undone.").size(14),
            ]
            .spacing(10)
            .into(),
            button("Delete")
                .style(button::danger)
                .on_press_maybe((!self.pending.delete).then_some(Message::SubmitDelete)),
            Message::CancelDelete,
        )
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// The editable inputs shared by the add and edit forms. `on_change`
/// decides whether a field edit lands on the draft or on the selected
/// record.
fn record_fields<'a>(record: &Student, on_change: fn(Field) -> Message) -> Element<'a, Message> {
    column![
        labeled(
            "Name",
            text_input("", &record.student_name).on_input(move |v| on_change(Field::Name(v))),
        ),
        labeled(
            "Email",
            text_input("", &record.email).on_input(move |v| on_change(Field::Email(v))),
        ),
        labeled(
            "Address",
            text_input("", &record.address).on_input(move |v| on_change(Field::Address(v))),
        ),
        labeled(
            "Phone",
            text_input("", &record.phone).on_input(move |v| on_change(Field::Phone(v))),
        ),
        checkbox("Active", record.status).on_toggle(move |v| on_change(Field::Active(v))),
    ]
    .spacing(12)
    .into()
}

fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![text(label).size(14), input.into()].spacing(5).into()
}

fn form_card<'a>(
    title: &'a str,
    body: Element<'a, Message>,
    submit: iced::widget::Button<'a, Message>,
    on_cancel: Message,
) -> Element<'a, Message> {
    container(
        column![
            text(title).size(22),
            body,
            row![
                horizontal_space(),
                button("Cancel")
                    .style(button::secondary)
                    .on_press(on_cancel),
                submit,
            ]
            .spacing(10),
        ]
        .spacing(20),
    )
    .width(420)
    .padding(25)
    .style(container::rounded_box)
    .into()
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    iced::application("Roster Manager", RosterManager::update, RosterManager::view)
        .theme(RosterManager::theme)
        .centered()
        .run_with(RosterManager::new)
}
