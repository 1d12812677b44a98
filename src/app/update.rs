use std::sync::Arc;

use iced::Task;
use iced_aw::date_picker::Date;
use iced_aw::time_picker::Time;
use tracing::{debug, error, info, warn};

use crate::api::{
    sort_schedules, ApiError, CreateScheduleRequest, LoginRequest, RegisterRequest, Session,
};
use crate::app::state::{Modal, ModalTicket, Picker, Route};
use crate::config::{save_config, theme_from_str};
use crate::form::{LoginFields, RegisterFields, ScheduleFields, INVISIBLE_ERROR};
use crate::validation::field;
use super::{App, Message};

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                if route.requires_auth() && !self.store.is_authenticated() {
                    debug!(path = route.path(), "нужна авторизация, открываем вход");
                    self.route = Route::Home;
                    return self.update(Message::OpenLogin);
                }
                self.route = route;
                if route == Route::Profile {
                    return self.update(Message::LoadProfileData);
                }
                Task::none()
            }
            Message::Logout => {
                self.store.sign_out();
                self.clear_session_state();
                Task::none()
            }
            Message::ThemeSelected(name) => {
                if let Some(theme) = theme_from_str(name) {
                    self.config.theme_name = name.to_string();
                    if let Err(err) = save_config(&self.config) {
                        warn!(error = %err, "тема не сохранена");
                    }
                    self.theme = theme;
                }
                Task::none()
            }
            Message::OpenLogin => {
                self.open_modal(Modal::Login);
                Task::none()
            }
            Message::OpenRegister => {
                self.open_modal(Modal::Register);
                Task::none()
            }
            Message::OpenSchedule => {
                if !self.is_teacher() {
                    return Task::none();
                }
                self.open_modal(Modal::Schedule);
                Task::none()
            }
            Message::CloseModal => {
                self.close_modal();
                Task::none()
            }
            Message::Ignore => Task::none(),
            Message::LoginFieldChanged(name, value) => {
                self.login_form.change(name, value);
                Task::none()
            }
            Message::LoginSubmit => {
                let Some(Modal::Login(ticket)) = self.modal else {
                    return Task::none();
                };
                let Some(request) = self.login_request() else {
                    return Task::none();
                };
                self.form_error = None;
                self.login_form.begin_request();

                let api = Arc::clone(&self.api);
                Task::perform(
                    async move { api.login(request).await },
                    move |result| Message::LoginFinished(ticket, result),
                )
            }
            Message::LoginFinished(ticket, result) => {
                if !self.is_current(ticket) {
                    debug!("окно входа закрыто, ответ отброшен");
                    return Task::none();
                }
                self.login_form.finish_request();
                match result {
                    Ok(session) => self.authenticate(session),
                    Err(ApiError::Rejected { message, .. }) => {
                        // Текст один, но подсвечиваются оба поля
                        self.login_form.set_error(field::EMAIL, INVISIBLE_ERROR);
                        self.login_form.set_error(field::PASSWORD, message);
                        Task::none()
                    }
                    Err(err) => {
                        error!(error = %err, "ошибка при входе");
                        self.form_error = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::RegisterFieldChanged(name, value) => {
                self.register_form.change(name, value);
                Task::none()
            }
            Message::RegisterSubmit => {
                let Some(Modal::Register(ticket)) = self.modal else {
                    return Task::none();
                };
                let Some(request) = self.register_request() else {
                    return Task::none();
                };
                self.form_error = None;
                self.register_form.begin_request();

                let api = Arc::clone(&self.api);
                Task::perform(
                    async move { api.register(request).await },
                    move |result| Message::RegisterFinished(ticket, result),
                )
            }
            Message::RegisterFinished(ticket, result) => {
                if !self.is_current(ticket) {
                    debug!("окно регистрации закрыто, ответ отброшен");
                    return Task::none();
                }
                self.register_form.finish_request();
                match result {
                    Ok(session) => self.authenticate(session),
                    Err(ApiError::Rejected { message, .. }) => {
                        self.register_form.set_error(field::EMAIL, message);
                        Task::none()
                    }
                    Err(err) => {
                        error!(error = %err, "ошибка при регистрации");
                        self.form_error = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::ScheduleFieldChanged(name, value) => {
                self.schedule_form.change(name, value);
                Task::none()
            }
            Message::ScheduleGroupSelected(group) => {
                self.schedule_form.change(field::GROUP_ID, group.id.to_string());
                Task::none()
            }
            Message::ScheduleTypeSelected(lesson_type) => {
                self.schedule_form.change(field::TYPE, lesson_type.as_str().to_string());
                Task::none()
            }
            Message::OpenPicker(picker) => {
                self.picker = Some(picker);
                Task::none()
            }
            Message::CancelPicker => {
                self.picker = None;
                Task::none()
            }
            Message::SubmitDate(date) => {
                self.picker = None;
                self.schedule_form.change(field::DATE, format_date(date));
                Task::none()
            }
            Message::SubmitTime(time) => {
                let target = match self.picker.take() {
                    Some(Picker::StartTime) => field::START_TIME,
                    Some(Picker::EndTime) => field::END_TIME,
                    _ => return Task::none(),
                };
                self.schedule_form.change(target, format_time(time));
                Task::none()
            }
            Message::ScheduleSubmit => {
                let Some(Modal::Schedule(ticket)) = self.modal else {
                    return Task::none();
                };
                if !self.store.is_authenticated() {
                    return self.expire_session();
                }
                let Some((token, request)) = self.schedule_request() else {
                    return Task::none();
                };
                self.form_error = None;
                self.schedule_form.begin_request();
                info!(group_id = request.group_id, "создание занятия");

                let api = Arc::clone(&self.api);
                Task::perform(
                    async move { api.create_schedule(&token, request).await },
                    move |result| Message::ScheduleCreated(ticket, result),
                )
            }
            Message::ScheduleCreated(ticket, result) => {
                let is_current = self.is_current(ticket);
                if is_current {
                    self.schedule_form.finish_request();
                }
                match result {
                    Ok(schedule) => {
                        info!(schedule_id = schedule.id, "занятие создано");
                        if is_current {
                            self.schedule_form.reset();
                        }
                        // Список принадлежит профилю, а не окну, поэтому обновляется всегда
                        self.reload_schedules()
                    }
                    Err(err) if !is_current => {
                        debug!(error = %err, "окно занятия закрыто, ошибка отброшена");
                        Task::none()
                    }
                    Err(ApiError::Unauthorized) => self.expire_session(),
                    Err(err) => {
                        warn!(error = %err, "занятие не создано");
                        self.form_error = Some(err.to_string());
                        Task::none()
                    }
                }
            }
            Message::LoadProfileData => {
                let Some(token) = self.store.token().map(str::to_string) else {
                    return Task::none();
                };
                let load = self.issue_load();
                self.groups_pending = true;
                self.schedules_pending = true;
                self.error_message.clear();

                let api = Arc::clone(&self.api);
                let groups = Task::perform(
                    {
                        let api = Arc::clone(&api);
                        let token = token.clone();
                        async move { api.list_groups(&token).await }
                    },
                    move |result| Message::GroupsLoaded(load, result),
                );
                let schedules = Task::perform(
                    async move { api.list_schedules(&token).await },
                    move |result| Message::SchedulesLoaded(load, result),
                );
                Task::batch([groups, schedules])
            }
            Message::GroupsLoaded(load, result) => {
                if !self.is_current_load(load) {
                    debug!("группы от прежней загрузки отброшены");
                    return Task::none();
                }
                self.groups_pending = false;
                match result {
                    Ok(groups) => {
                        self.groups = groups;
                        Task::none()
                    }
                    Err(err) => self.list_failed(err),
                }
            }
            Message::SchedulesLoaded(load, result) => {
                if !self.is_current_load(load) {
                    debug!("расписание от прежней загрузки отброшено");
                    return Task::none();
                }
                self.schedules_pending = false;
                match result {
                    Ok(mut schedules) => {
                        sort_schedules(&mut schedules);
                        self.schedules = schedules;
                        Task::none()
                    }
                    Err(err) => self.list_failed(err),
                }
            }
        }
    }

    fn open_modal(&mut self, kind: fn(ModalTicket) -> Modal) {
        self.close_modal();
        let ticket = self.issue_ticket();
        self.modal = Some(kind(ticket));
    }

    /// Черновик закрытого окна не сохраняется.
    fn close_modal(&mut self) {
        match self.modal.take() {
            Some(Modal::Login(_)) => self.login_form.reset(),
            Some(Modal::Register(_)) => self.register_form.reset(),
            Some(Modal::Schedule(_)) => self.schedule_form.reset(),
            None => {}
        }
        self.picker = None;
        self.form_error = None;
    }

    fn authenticate(&mut self, session: Session) -> Task<Message> {
        self.store.sign_in(session);
        self.close_modal();
        self.update(Message::Navigate(Route::Profile))
    }

    fn reload_schedules(&mut self) -> Task<Message> {
        let Some(token) = self.store.token().map(str::to_string) else {
            return Task::none();
        };
        let load = self.load;
        self.schedules_pending = true;
        let api = Arc::clone(&self.api);
        Task::perform(
            async move { api.list_schedules(&token).await },
            move |result| Message::SchedulesLoaded(load, result),
        )
    }

    fn list_failed(&mut self, err: ApiError) -> Task<Message> {
        if err == ApiError::Unauthorized {
            return self.expire_session();
        }
        error!(error = %err, "не удалось загрузить данные профиля");
        self.error_message = err.to_string();
        Task::none()
    }

    /// Токен отвергнут сервером: выходим и просим войти заново.
    fn expire_session(&mut self) -> Task<Message> {
        warn!("сессия отклонена сервером");
        self.store.sign_out();
        self.clear_session_state();
        self.update(Message::OpenLogin)
    }

    fn clear_session_state(&mut self) {
        self.close_modal();
        self.route = Route::Home;
        self.groups.clear();
        self.schedules.clear();
        self.issue_load();
        self.groups_pending = false;
        self.schedules_pending = false;
        self.error_message.clear();
    }

    pub(super) fn login_request(&mut self) -> Option<LoginRequest> {
        self.login_form.submit().map(LoginFields::into_request)
    }

    pub(super) fn register_request(&mut self) -> Option<RegisterRequest> {
        self.register_form.submit().map(RegisterFields::into_request)
    }

    /// Проверяет форму занятия и собирает запрос с токеном текущей сессии.
    pub(super) fn schedule_request(&mut self) -> Option<(String, CreateScheduleRequest)> {
        let token = self.store.token()?.to_string();
        let request = self.schedule_form.submit().and_then(ScheduleFields::into_request)?;
        Some((token, request))
    }
}

pub fn format_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year, date.month, date.day)
}

pub fn format_time(time: Time) -> String {
    match time {
        Time::Hm { hour, minute, .. } | Time::Hms { hour, minute, .. } => {
            format!("{hour:02}:{minute:02}")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rstest::{fixture, rstest};

    use super::*;
    use crate::api::fake::{session, FakeApi};
    use crate::api::{Group, LessonType, PlatformApi, Schedule};
    use crate::config::Config;
    use crate::store::memory::MemoryStorage;

    fn app_with(api: FakeApi, storage: MemoryStorage) -> (App, Arc<FakeApi>) {
        let api = Arc::new(api);
        let (app, _) = App::new(Config::default(), api.clone(), Box::new(storage));
        (app, api)
    }

    #[fixture]
    fn guest() -> App {
        app_with(FakeApi::default(), MemoryStorage::default()).0
    }

    #[fixture]
    fn teacher() -> (App, Arc<FakeApi>) {
        app_with(FakeApi::default(), MemoryStorage::with(session()))
    }

    fn current_ticket(app: &App) -> ModalTicket {
        app.modal.expect("modal should be open").ticket()
    }

    fn fill_login(app: &mut App) {
        let _ = app.update(Message::OpenLogin);
        let _ = app.update(Message::LoginFieldChanged(field::EMAIL, "teacher@school.ru".into()));
        let _ = app.update(Message::LoginFieldChanged(field::PASSWORD, "password1".into()));
    }

    fn fill_schedule(app: &mut App) {
        let _ = app.update(Message::OpenSchedule);
        let _ = app.update(Message::ScheduleGroupSelected(Group { id: 3, name: "П-31".into() }));
        let _ = app.update(Message::ScheduleTypeSelected(LessonType::Lecture));
        let _ = app.update(Message::ScheduleFieldChanged(field::START_TIME, "10:00".into()));
        let _ = app.update(Message::ScheduleFieldChanged(field::END_TIME, "11:30".into()));
        let _ = app.update(Message::ScheduleFieldChanged(field::DATE, "2024-05-01".into()));
    }

    #[rstest]
    fn invalid_login_never_starts_request(mut guest: App) {
        let _ = guest.update(Message::OpenLogin);
        let _ = guest.update(Message::LoginSubmit);

        assert!(!guest.login_form.is_submitting());
        assert_eq!(guest.login_form.error(field::EMAIL), Some("Введите E-mail"));
    }

    #[rstest]
    fn valid_login_disables_submit_until_response(mut guest: App) {
        fill_login(&mut guest);
        let _ = guest.update(Message::LoginSubmit);
        assert!(guest.login_form.is_submitting());
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_login_marks_both_fields(#[values("Неверный логин или пароль", "Пользователь заблокирован")] message: &str) {
        let (mut app, api) = app_with(FakeApi::rejecting(message), MemoryStorage::default());
        fill_login(&mut app);
        let request = app.login_request().expect("filled form is valid");
        let _ = app.update(Message::LoginSubmit);
        let ticket = current_ticket(&app);

        let result = api.login(request).await;
        let _ = app.update(Message::LoginFinished(ticket, result));

        assert_eq!(app.login_form.error(field::EMAIL), Some(INVISIBLE_ERROR));
        assert_eq!(app.login_form.error(field::PASSWORD), Some(message));
        assert!(!app.login_form.is_submitting());
        assert!(!app.store.is_authenticated());
        assert_eq!(app.route, Route::Home);
    }

    #[rstest]
    #[tokio::test]
    async fn successful_login_stores_session_and_opens_profile() {
        let storage = MemoryStorage::default();
        let (mut app, api) = app_with(FakeApi::default(), storage.clone());
        fill_login(&mut app);
        let request = app.login_request().expect("filled form is valid");
        assert_eq!(request.email, "teacher@school.ru");
        let _ = app.update(Message::LoginSubmit);
        let ticket = current_ticket(&app);

        let result = api.login(request).await;
        let _ = app.update(Message::LoginFinished(ticket, result));

        assert_eq!(app.store.session(), Some(&session()));
        assert_eq!(storage.stored(), Some(session()));
        assert_eq!(app.route.path(), "/profile");
        assert_eq!(app.modal, None);
        assert_eq!(app.login_form.fields().email, "");
    }

    #[rstest]
    #[case(ApiError::Transport("ошибка 502".into()), "Сервер недоступен: ошибка 502")]
    #[case(ApiError::Decode("неожиданный ответ 400".into()), "Некорректный ответ сервера: неожиданный ответ 400")]
    fn server_failures_on_login_are_not_field_errors(
        mut guest: App,
        #[case] err: ApiError,
        #[case] shown: &str,
    ) {
        fill_login(&mut guest);
        let _ = guest.update(Message::LoginSubmit);
        let ticket = current_ticket(&guest);

        let _ = guest.update(Message::LoginFinished(ticket, Err(err)));

        assert!(guest.login_form.errors().is_empty());
        assert_eq!(guest.form_error.as_deref(), Some(shown));
    }

    #[rstest]
    fn transport_error_is_not_attached_to_fields(mut guest: App) {
        fill_login(&mut guest);
        let _ = guest.update(Message::LoginSubmit);
        let ticket = current_ticket(&guest);

        let _ = guest.update(Message::LoginFinished(
            ticket,
            Err(ApiError::Transport("connection refused".into())),
        ));

        assert!(guest.login_form.errors().is_empty());
        assert_eq!(
            guest.form_error.as_deref(),
            Some("Сервер недоступен: connection refused")
        );
        assert!(!guest.login_form.is_submitting());
    }

    #[rstest]
    fn response_for_closed_modal_is_ignored(mut guest: App) {
        fill_login(&mut guest);
        let _ = guest.update(Message::LoginSubmit);
        let ticket = current_ticket(&guest);
        let _ = guest.update(Message::CloseModal);

        let _ = guest.update(Message::LoginFinished(ticket, Ok(session())));

        assert!(!guest.store.is_authenticated());
        assert_eq!(guest.route, Route::Home);
    }

    #[rstest]
    fn response_for_reopened_modal_is_ignored(mut guest: App) {
        fill_login(&mut guest);
        let _ = guest.update(Message::LoginSubmit);
        let stale = current_ticket(&guest);
        let _ = guest.update(Message::OpenLogin);

        let _ = guest.update(Message::LoginFinished(
            stale,
            Err(ApiError::Rejected { status: 400, message: "нет".into() }),
        ));

        assert!(guest.login_form.errors().is_empty());
    }

    #[rstest]
    fn register_success_is_equivalent_to_login(mut guest: App) {
        let _ = guest.update(Message::OpenRegister);
        for (name, value) in [
            (field::FIO, "Петров Пётр Петрович"),
            (field::PHONE, "+7 (912) 345-67-89"),
            (field::EMAIL, "teacher@school.ru"),
            (field::PASSWORD, "password1"),
            (field::REPEAT_PASSWORD, "password1"),
        ] {
            let _ = guest.update(Message::RegisterFieldChanged(name, value.into()));
        }
        let _ = guest.update(Message::RegisterSubmit);
        assert!(guest.register_form.is_submitting());
        let ticket = current_ticket(&guest);

        let _ = guest.update(Message::RegisterFinished(ticket, Ok(session())));

        assert!(guest.store.is_authenticated());
        assert_eq!(guest.route, Route::Profile);
    }

    #[rstest]
    fn register_mismatch_stays_local(mut guest: App) {
        let _ = guest.update(Message::OpenRegister);
        let _ = guest.update(Message::RegisterFieldChanged(field::PASSWORD, "password1".into()));
        let _ = guest.update(Message::RegisterFieldChanged(field::REPEAT_PASSWORD, "password2".into()));
        let _ = guest.update(Message::RegisterSubmit);

        assert!(!guest.register_form.is_submitting());
        assert_eq!(guest.register_form.error(field::REPEAT_PASSWORD), Some("Пароли не совпадают"));
    }

    #[rstest]
    fn guard_redirects_guests_to_login(mut guest: App) {
        let _ = guest.update(Message::Navigate(Route::Profile));
        assert_eq!(guest.route, Route::Home);
        assert!(matches!(guest.modal, Some(Modal::Login(_))));
    }

    #[rstest]
    fn stored_session_opens_profile_on_start(teacher: (App, Arc<FakeApi>)) {
        let (app, _) = teacher;
        assert_eq!(app.route, Route::Profile);
        assert!(app.is_loading());
    }

    #[rstest]
    fn guests_cannot_open_schedule_modal(mut guest: App) {
        let _ = guest.update(Message::OpenSchedule);
        assert_eq!(guest.modal, None);
    }

    #[rstest]
    #[tokio::test]
    async fn schedule_request_matches_form(teacher: (App, Arc<FakeApi>)) {
        let (mut app, api) = teacher;
        fill_schedule(&mut app);
        let _ = app.update(Message::ScheduleFieldChanged(field::ADDRESS, String::new()));
        let (token, request) = app.schedule_request().expect("filled form is valid");
        let _ = app.update(Message::ScheduleSubmit);
        assert!(app.schedule_form.is_submitting());

        let result = api.create_schedule(&token, request).await;
        let _ = app.update(Message::ScheduleCreated(current_ticket(&app), result));

        let created = api.created.lock().unwrap();
        let (token, request) = &created[0];
        assert_eq!(token, "token-7");
        assert_eq!(
            serde_json::to_value(request).unwrap(),
            serde_json::json!({
                "groupId": 3,
                "body": {"type": "lecture", "startTime": "10:00", "endTime": "11:30", "date": "2024-05-01"}
            })
        );
        assert_eq!(app.schedule_form.fields(), &ScheduleFields::default());
        assert!(!app.schedule_form.is_submitting());
    }

    #[rstest]
    fn schedule_end_before_start_is_rejected_locally(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        fill_schedule(&mut app);
        let _ = app.update(Message::ScheduleFieldChanged(field::END_TIME, "09:00".into()));
        let _ = app.update(Message::ScheduleSubmit);

        assert!(!app.schedule_form.is_submitting());
        assert_eq!(
            app.schedule_form.error(field::END_TIME),
            Some("Конец занятия должен быть позже начала")
        );
    }

    #[rstest]
    fn failed_create_keeps_draft(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        fill_schedule(&mut app);
        let _ = app.update(Message::ScheduleSubmit);
        let ticket = current_ticket(&app);

        let _ = app.update(Message::ScheduleCreated(
            ticket,
            Err(ApiError::Rejected { status: 409, message: "Время занято".into() }),
        ));

        assert_eq!(app.form_error.as_deref(), Some("Время занято"));
        assert_eq!(app.schedule_form.fields().group_id, Some(3));
    }

    #[rstest]
    fn create_error_for_closed_modal_keeps_session(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        fill_schedule(&mut app);
        let _ = app.update(Message::ScheduleSubmit);
        let ticket = current_ticket(&app);
        let _ = app.update(Message::CloseModal);

        let _ = app.update(Message::ScheduleCreated(ticket, Err(ApiError::Unauthorized)));

        assert!(app.store.is_authenticated());
        assert_eq!(app.modal, None);
        assert_eq!(app.form_error, None);
    }

    #[rstest]
    fn expired_token_signs_out(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let load = app.load;
        let _ = app.update(Message::SchedulesLoaded(load, Err(ApiError::Unauthorized)));

        assert!(!app.store.is_authenticated());
        assert_eq!(app.route.path(), "/");
        assert!(matches!(app.modal, Some(Modal::Login(_))));
    }

    #[rstest]
    fn schedules_are_sorted_on_load(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let lesson = |id: i32, date: &str| Schedule {
            id,
            group_id: 3,
            lesson_type: LessonType::Seminar,
            date: date.to_string(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            address: None,
        };
        let load = app.load;
        let _ = app.update(Message::SchedulesLoaded(
            load,
            Ok(vec![lesson(1, "2024-06-01"), lesson(2, "2024-05-01")]),
        ));

        let ids: Vec<_> = app.schedules.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[rstest]
    fn loading_lasts_until_both_lists_arrive(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let load = app.load;

        let _ = app.update(Message::SchedulesLoaded(load, Ok(vec![])));
        assert!(app.is_loading());

        let _ = app.update(Message::GroupsLoaded(load, Ok(vec![])));
        assert!(!app.is_loading());
    }

    #[rstest]
    fn profile_responses_after_logout_are_dropped(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let stale = app.load;
        let _ = app.update(Message::Logout);

        let _ = app.update(Message::GroupsLoaded(
            stale,
            Ok(vec![Group { id: 3, name: "П-31".into() }]),
        ));
        let _ = app.update(Message::SchedulesLoaded(stale, Err(ApiError::Unauthorized)));

        assert!(app.groups.is_empty());
        assert_eq!(app.modal, None);
        assert!(!app.is_loading());
    }

    #[rstest]
    fn previous_user_schedules_do_not_reach_next_session(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let stale = app.load;
        let _ = app.update(Message::Logout);
        let _ = app.update(Message::OpenLogin);
        let ticket = current_ticket(&app);
        let _ = app.update(Message::LoginFinished(ticket, Ok(session())));
        assert_ne!(app.load, stale);

        let _ = app.update(Message::SchedulesLoaded(
            stale,
            Ok(vec![Schedule {
                id: 99,
                group_id: 1,
                lesson_type: LessonType::Exam,
                date: "2024-05-01".into(),
                start_time: "09:00".into(),
                end_time: "10:00".into(),
                address: None,
            }]),
        ));

        assert!(app.schedules.is_empty());
        assert!(app.is_loading());
    }

    #[rstest]
    fn logout_clears_everything(teacher: (App, Arc<FakeApi>)) {
        let (mut app, _) = teacher;
        let load = app.load;
        let _ = app.update(Message::GroupsLoaded(load, Ok(vec![Group { id: 3, name: "П-31".into() }])));
        let _ = app.update(Message::Logout);

        assert!(!app.store.is_authenticated());
        assert!(app.groups.is_empty());
        assert_eq!(app.route, Route::Home);
    }

    #[test]
    fn picked_date_is_iso_formatted() {
        let date = Date::from_ymd(2024, 5, 1);
        assert_eq!(format_date(date), "2024-05-01");
    }
}
