use iced::widget::{button, column, text, vertical_space, Column, Container, Row};
use iced::{Alignment, Element, Length, Renderer, Theme};
use iced_font_awesome::fa_icon_solid;

use crate::app::state::Route;
use crate::app::{App, Message};

fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

fn menu_button<'a>(app: &'a App, icon: &'a str, label: &'a str, message: Message) -> Element<'a, Message> {
    button(icon_button_content(
        fa_icon_solid(icon).style(move |_| text::base(&app.theme)),
        label,
    ))
    .on_press(message)
    .width(Length::Fill)
    .into()
}

pub fn nav_menu(app: &App) -> Container<'_, Message> {
    let mut top = Column::new()
        .spacing(10)
        .push(menu_button(app, "address-card", "Профиль", Message::Navigate(Route::Profile)));
    if app.is_teacher() {
        // Редактор расписания открывается поверх профиля
        top = top.push(menu_button(app, "calendar-days", "Расписание", Message::OpenSchedule));
    }
    top = top.push(menu_button(app, "house", "Главная", Message::Navigate(Route::Home)));

    let content = column![
        top,
        vertical_space(),
        menu_button(app, "gear", "Настройки", Message::Navigate(Route::Settings)),
        menu_button(app, "arrow-right-from-bracket", "Выход", Message::Logout),
    ]
    .spacing(10);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(10)
}
