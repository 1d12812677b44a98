use iced::widget::{button, column, row, text, Column};
use iced::Alignment;

use crate::app::{App, Message};
use crate::screens::common::{form_error, form_field, modal_header};
use crate::validation::field;

pub fn login_modal(app: &App) -> Column<'_, Message> {
    let form = &app.login_form;
    let fields = form.fields();

    column![
        modal_header(app, "Вход"),
        form_field(
            "Электронная почта",
            &fields.email,
            form.error(field::EMAIL),
            false,
            |v| Message::LoginFieldChanged(field::EMAIL, v),
        ),
        form_field(
            "Пароль",
            &fields.password,
            form.error(field::PASSWORD),
            true,
            |v| Message::LoginFieldChanged(field::PASSWORD, v),
        ),
        form_error(app),
        button(if form.is_submitting() { "Вход..." } else { "Войти" })
            .on_press_maybe((!form.is_submitting()).then_some(Message::LoginSubmit))
            .padding(10),
        row![
            text("Новый пользователь?"),
            button("Зарегистрируйтесь").on_press(Message::OpenRegister),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        text(
            "Ввод данных подтверждает ваше согласие с политикой конфиденциальности \
             и обработкой персональных данных."
        )
        .size(12),
    ]
    .spacing(15)
}
