use std::sync::Arc;

use iced::{Task, Theme};

use crate::api::{Group, PlatformApi, Schedule};
use crate::config::Config;
use crate::form::{Form, LoginFields, RegisterFields, ScheduleFields};
use crate::store::{AuthStore, SessionStorage};

use super::Message;

/// Экраны приложения и их адреса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Profile,
    Settings,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Profile => "/profile",
            Route::Settings => "/settings",
        }
    }

    pub fn requires_auth(self) -> bool {
        !matches!(self, Route::Home)
    }
}

/// Номер конкретного открытия модального окна. Ответ сервера с чужим
/// номером относится к уже закрытому окну и отбрасывается.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login(ModalTicket),
    Register(ModalTicket),
    Schedule(ModalTicket),
}

impl Modal {
    pub fn ticket(self) -> ModalTicket {
        match self {
            Modal::Login(ticket) | Modal::Register(ticket) | Modal::Schedule(ticket) => ticket,
        }
    }
}

/// Номер загрузки данных профиля. Новая загрузка и выход из аккаунта
/// выдают новый номер, ответы со старым отбрасываются.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Какой из выборов даты/времени в форме занятия сейчас раскрыт.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Picker {
    Date,
    StartTime,
    EndTime,
}

pub struct App {
    pub theme: Theme,
    pub config: Config,
    pub route: Route,
    pub modal: Option<Modal>,
    next_ticket: u64,
    //
    pub store: AuthStore,
    pub api: Arc<dyn PlatformApi>,
    //
    pub login_form: Form<LoginFields>,
    pub register_form: Form<RegisterFields>,
    pub schedule_form: Form<ScheduleFields>,
    pub picker: Option<Picker>,
    // Ошибка без привязки к полю (сеть, некорректный ответ)
    pub form_error: Option<String>,
    //
    pub groups: Vec<Group>,
    pub schedules: Vec<Schedule>,
    pub(super) load: LoadTicket,
    pub(super) groups_pending: bool,
    pub(super) schedules_pending: bool,
    pub error_message: String,
}

impl App {
    pub fn new(
        config: Config,
        api: Arc<dyn PlatformApi>,
        storage: Box<dyn SessionStorage>,
    ) -> (Self, Task<Message>) {
        let mut app = Self {
            theme: config.theme(),
            config,
            route: Route::Home,
            modal: None,
            next_ticket: 0,
            store: AuthStore::hydrate(storage),
            api,
            login_form: Form::default(),
            register_form: Form::default(),
            schedule_form: Form::default(),
            picker: None,
            form_error: None,
            groups: vec![],
            schedules: vec![],
            load: LoadTicket(0),
            groups_pending: false,
            schedules_pending: false,
            error_message: String::new(),
        };
        let task = if app.store.is_authenticated() {
            app.update(Message::Navigate(Route::Profile))
        } else {
            Task::none()
        };
        (app, task)
    }

    pub(super) fn issue_ticket(&mut self) -> ModalTicket {
        self.next_ticket += 1;
        ModalTicket(self.next_ticket)
    }

    /// Делает все ответы прежних загрузок профиля чужими.
    pub(super) fn issue_load(&mut self) -> LoadTicket {
        self.next_ticket += 1;
        self.load = LoadTicket(self.next_ticket);
        self.load
    }

    pub fn is_current_load(&self, ticket: LoadTicket) -> bool {
        self.load == ticket
    }

    /// Данные профиля ещё не пришли целиком.
    pub fn is_loading(&self) -> bool {
        self.groups_pending || self.schedules_pending
    }

    /// Ответ относится к окну, которое всё ещё открыто.
    pub fn is_current(&self, ticket: ModalTicket) -> bool {
        self.modal.is_some_and(|modal| modal.ticket() == ticket)
    }

    pub fn is_teacher(&self) -> bool {
        self.store
            .user()
            .is_some_and(|user| user.role == crate::api::Role::Teacher)
    }

    pub fn group_name(&self, group_id: i32) -> Option<&str> {
        self.groups
            .iter()
            .find(|group| group.id == group_id)
            .map(|group| group.name.as_str())
    }
}
