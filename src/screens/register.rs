use iced::widget::{button, column, row, text, Column};
use iced::Alignment;

use crate::app::{App, Message};
use crate::screens::common::{form_error, form_field, modal_header};
use crate::validation::field;

pub fn register_modal(app: &App) -> Column<'_, Message> {
    let form = &app.register_form;
    let fields = form.fields();

    column![
        modal_header(app, "Регистрация"),
        form_field("ФИО", &fields.fio, form.error(field::FIO), false, |v| {
            Message::RegisterFieldChanged(field::FIO, v)
        }),
        form_field("Номер телефона", &fields.phone, form.error(field::PHONE), false, |v| {
            Message::RegisterFieldChanged(field::PHONE, v)
        }),
        form_field("Эл. почта", &fields.email, form.error(field::EMAIL), false, |v| {
            Message::RegisterFieldChanged(field::EMAIL, v)
        }),
        form_field("Пароль", &fields.password, form.error(field::PASSWORD), true, |v| {
            Message::RegisterFieldChanged(field::PASSWORD, v)
        }),
        form_field(
            "Подтвердите пароль",
            &fields.repeat_password,
            form.error(field::REPEAT_PASSWORD),
            true,
            |v| Message::RegisterFieldChanged(field::REPEAT_PASSWORD, v),
        ),
        form_error(app),
        button(if form.is_submitting() { "Отправка..." } else { "Зарегистрироваться" })
            .on_press_maybe((!form.is_submitting()).then_some(Message::RegisterSubmit))
            .padding(10),
        row![
            text("Уже есть аккаунт?"),
            button("Авторизуйтесь").on_press(Message::OpenLogin),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
    ]
    .spacing(12)
}
