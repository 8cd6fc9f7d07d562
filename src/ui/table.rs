use iced::widget::{button, column, horizontal_rule, horizontal_space, row, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::state::data::Student;
use crate::Message;

/// The roster table: header, one row per record, and the pagination
/// footer. The footer is static markup carried over from the page
/// design; the page labels do nothing.
pub fn view(students: &[Student]) -> Element<'_, Message> {
    let header = row![
        text("Name").width(Length::FillPortion(3)),
        text("Email").width(Length::FillPortion(4)),
        text("Address").width(Length::FillPortion(4)),
        text("Phone").width(Length::FillPortion(2)),
        text("Active").width(Length::FillPortion(1)),
        text("Actions").width(Length::FillPortion(2)),
    ]
    .spacing(10);

    let mut body = column![].spacing(8);
    for student in students {
        body = body.push(record_row(student));
    }

    let shown = students.len();
    let footer = row![
        text(format!("Showing {} out of {} entries", shown, shown)).size(14),
        horizontal_space(),
        text("Previous  1  2  3  4  5  Next").size(14),
    ]
    .align_y(Alignment::Center);

    column![
        header,
        horizontal_rule(1),
        scrollable(body).height(Length::Fill),
        horizontal_rule(1),
        footer,
    ]
    .spacing(10)
    .into()
}

fn record_row(student: &Student) -> Element<'_, Message> {
    let actions = row![
        button(text("Edit").size(14)).on_press(Message::EditPressed(student.clone())),
        button(text("Delete").size(14))
            .style(button::danger)
            .on_press(Message::DeletePressed(student.clone())),
    ]
    .spacing(5)
    .width(Length::FillPortion(2));

    row![
        text(&student.student_name).width(Length::FillPortion(3)),
        text(&student.email).width(Length::FillPortion(4)),
        text(&student.address).width(Length::FillPortion(4)),
        text(&student.phone).width(Length::FillPortion(2)),
        text(if student.status { "Yes" } else { "No" }).width(Length::FillPortion(1)),
        actions,
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}
