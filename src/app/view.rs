use iced::widget::{Column, Container, Row};
use iced::{Element, Length};

use crate::app::state::{Modal, Route};
use crate::screens::common::modal_overlay;
use crate::screens::{
    landing_screen, login_modal, nav_menu, profile_screen, register_modal, schedule_modal,
    settings_screen,
};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let page = Row::new()
            .spacing(20)
            .push(
                // Левое меню (sidebar)
                if self.store.is_authenticated() {
                    Container::new(nav_menu(self))
                        .width(Length::Fixed(200.0))
                        .height(Length::Fill)
                        .padding(10)
                } else {
                    Container::new(Column::new())
                        .width(Length::Fixed(0.0))
                        .height(Length::Fill)
                },
            )
            .push(
                // Основной контент
                match self.route {
                    Route::Home => landing_screen(self),
                    Route::Profile => profile_screen(self),
                    Route::Settings => settings_screen(self),
                }
                .width(Length::Fill),
            );

        match self.modal {
            None => page.into(),
            Some(Modal::Login(_)) => modal_overlay(self, page.into(), login_modal(self), 480.0),
            Some(Modal::Register(_)) => modal_overlay(self, page.into(), register_modal(self), 480.0),
            Some(Modal::Schedule(_)) => modal_overlay(self, page.into(), schedule_modal(self), 900.0),
        }
    }
}
