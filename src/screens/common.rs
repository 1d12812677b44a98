use iced::widget::container::{background, bordered_box};
use iced::widget::{button, horizontal_space, mouse_area, row, text, text_input, Column, Container, Row, Stack, Text};
use iced::{Alignment, Color, Element, Length, Theme};
use iced_font_awesome::fa_icon_solid;

use crate::app::{App, Message};

pub const ERROR_COLOR: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
pub const ACCENT_COLOR: Color = Color { r: 0.0, g: 0.459, b: 1.0, a: 1.0 };

/// Поле формы: подпись, ввод и сообщение об ошибке под ним.
pub fn form_field<'a>(
    title: &'a str,
    value: &'a str,
    error: Option<&'a str>,
    secure: bool,
    on_input: impl Fn(String) -> Message + 'a,
) -> Column<'a, Message> {
    let invalid = error.is_some();
    let input = text_input(title, value)
        .on_input(on_input)
        .secure(secure)
        .padding(10)
        .size(18)
        .width(Length::Fixed(350.0))
        .style(move |theme: &Theme, status| {
            let mut style = text_input::default(theme, status);
            if invalid {
                style.border.color = ERROR_COLOR;
            }
            style
        });

    let mut column = Column::new().spacing(4).push(text(title).size(14)).push(input);
    if let Some(message) = error {
        column = column.push(text(message).size(14).color(ERROR_COLOR));
    }
    column
}

/// Ошибка, не относящаяся ни к одному полю.
pub fn form_error(app: &App) -> Text<'_> {
    text(app.form_error.as_deref().unwrap_or("")).size(16).color(ERROR_COLOR)
}

pub fn modal_header<'a>(app: &'a App, title: &'a str) -> Row<'a, Message> {
    row![
        text(title).size(26),
        horizontal_space(),
        button(fa_icon_solid("xmark").style(move |_| text::base(&app.theme)))
            .on_press(Message::CloseModal),
    ]
    .align_y(Alignment::Center)
    .width(Length::Fill)
}

/// Модальное окно поверх страницы с затемнением.
pub fn modal_overlay<'a>(
    app: &'a App,
    base: Element<'a, Message>,
    content: Column<'a, Message>,
    width: f32,
) -> Element<'a, Message> {
    let modal_container = Container::new(content)
        .style(move |_| bordered_box(&app.theme))
        .padding(20)
        .width(Length::Fixed(width));

    let overlay = Container::new(
        mouse_area(Container::new(modal_container).center(Length::Fill))
            .on_press(Message::Ignore),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| background(Color { r: 0.0, g: 0.0, b: 0.0, a: 0.7 }));

    Stack::new().push(base).push(overlay).into()
}
