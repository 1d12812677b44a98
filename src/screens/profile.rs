use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_space, row, text, Column, Container, Scrollable};
use iced::{Alignment, Length};

use crate::app::{App, Message};
use crate::screens::common::ERROR_COLOR;
use crate::screens::schedule::schedule_item;

fn teacher_section(app: &App) -> Column<'_, Message> {
    let header = row![
        text("Расписание").size(26),
        horizontal_space(),
        button("Изменить расписание").on_press(Message::OpenSchedule),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill);

    let mut list = Column::new().spacing(8);
    if app.is_loading() {
        list = list.push(text("Загрузка..."));
    } else if app.schedules.is_empty() {
        list = list.push(text("Занятий пока нет."));
    } else {
        for schedule in &app.schedules {
            list = list.push(schedule_item(app, schedule));
        }
    }

    column![
        header,
        text(format!("Групп: {}", app.groups.len())).size(18),
        Scrollable::new(list).height(Length::Fill),
    ]
    .spacing(15)
}

pub fn profile_screen(app: &App) -> Container<'_, Message> {
    let Some(user) = app.store.user() else {
        return Container::new(text("Вы не вошли в систему."));
    };

    let info = column![
        text(format!("ФИО: {}", user.fio)).size(24),
        text(format!("Почта: {}", user.email)).size(24),
        text(format!("Телефон: {}", user.phone.as_deref().unwrap_or("не указан"))).size(24),
        text(format!("Тип профиля: {}", user.role)).size(24),
    ]
    .spacing(10);

    let mut content = Column::new()
        .spacing(20)
        .push(
            Container::new(info)
                .style(move |_| bordered_box(&app.theme))
                .width(Length::Fill)
                .padding(10),
        );
    if !app.error_message.is_empty() {
        content = content.push(text(&app.error_message).size(16).color(ERROR_COLOR));
    }
    if app.is_teacher() {
        content = content.push(teacher_section(app));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(20)
}
