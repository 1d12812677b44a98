use iced::widget::container::bordered_box;
use iced::widget::{button, column, horizontal_space, row, text, vertical_space, Container, Row, Scrollable};
use iced::{Alignment, Center, Length};

use crate::app::state::Route;
use crate::app::{App, Message};
use crate::screens::common::ACCENT_COLOR;

struct Plan {
    title: &'static str,
    price: &'static str,
    description: &'static str,
}

const PLANS: &[Plan] = &[
    Plan {
        title: "Базовый",
        price: "3 900 ₽ / мес",
        description: "Групповые занятия два раза в неделю",
    },
    Plan {
        title: "Стандарт",
        price: "6 900 ₽ / мес",
        description: "Группы, практикумы и проверка домашних заданий",
    },
    Plan {
        title: "Премиум",
        price: "11 900 ₽ / мес",
        description: "Всё из «Стандарта» и индивидуальные консультации",
    },
];

fn hero(app: &App) -> Container<'_, Message> {
    let actions = if app.store.is_authenticated() {
        row![button("Перейти в профиль").on_press(Message::Navigate(Route::Profile)).padding(12)]
    } else {
        row![
            button("Войти").on_press(Message::OpenLogin).padding(12),
            button("Зарегистрироваться").on_press(Message::OpenRegister).padding(12),
        ]
        .spacing(15)
    };

    Container::new(
        column![
            text("Учитесь с преподавателями, а не с видеозаписями").size(40),
            text("Живые занятия в небольших группах, расписание под ваш ритм").size(20),
            actions,
        ]
        .spacing(20)
        .align_x(Center),
    )
    .width(Length::Fill)
    .padding(40)
}

fn pricing(app: &App) -> Row<'_, Message> {
    PLANS.iter().fold(Row::new().spacing(20), |cards, plan| {
        cards.push(
            Container::new(
                column![
                    text(plan.title).size(26),
                    text(plan.price).size(22).color(ACCENT_COLOR),
                    text(plan.description).size(16),
                ]
                .spacing(10),
            )
            .padding(20)
            .width(Length::FillPortion(1))
            .style(move |_| bordered_box(&app.theme)),
        )
    })
}

fn footer(app: &App) -> Container<'_, Message> {
    Container::new(
        row![
            text("Платформа").size(20).color(ACCENT_COLOR),
            horizontal_space(),
            text("Тарифы и цены"),
            text("Заявка на обучение"),
            text("Контакты"),
        ]
        .spacing(30)
        .align_y(Alignment::Center),
    )
    .padding(20)
    .width(Length::Fill)
    .style(move |_| bordered_box(&app.theme))
}

pub fn landing_screen(app: &App) -> Container<'_, Message> {
    let content = column![
        hero(app),
        text("Тарифы и цены").size(30),
        pricing(app),
        vertical_space().height(40),
        footer(app),
    ]
    .spacing(20)
    .padding(20)
    .align_x(Center);

    Container::new(Scrollable::new(content))
        .width(Length::Fill)
        .height(Length::Fill)
}
