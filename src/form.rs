//! Состояние форм: значения полей, ошибки и флаг отправки.

use std::borrow::Cow;
use std::str::FromStr;

use crate::api::{CreateScheduleRequest, LessonType, LoginRequest, RegisterRequest, ScheduleBody};
use crate::validation::{
    field, FieldErrors, FieldSource, Schema, LOGIN_SCHEMA, REGISTER_SCHEMA, SCHEDULE_SCHEMA,
};

/// Невидимый символ: помечает поле ошибочным, не показывая текста.
pub const INVISIBLE_ERROR: &str = "\u{3164}";

/// Типизированный набор полей конкретной формы.
pub trait FormFields: Default + Clone + FieldSource {
    fn schema() -> &'static Schema;

    fn set(&mut self, name: &str, value: String);
}

/// Контроллер формы поверх набора полей `F`.
#[derive(Debug, Default)]
pub struct Form<F> {
    fields: F,
    errors: FieldErrors,
    submitting: bool,
}

impl<F: FormFields> Form<F> {
    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Обработчик изменения поля. Уже показанная ошибка пересчитывается
    /// сразу, в том числе у полей, которые сравниваются с изменённым; новые
    /// ошибки появляются только при отправке.
    pub fn change(&mut self, name: &'static str, value: String) {
        self.fields.set(name, value);
        let schema = F::schema();
        for target in std::iter::once(name).chain(schema.dependents(name)) {
            if self.errors.contains_key(target) {
                self.revalidate(schema, target);
            }
        }
    }

    fn revalidate(&mut self, schema: &Schema, name: &'static str) {
        match schema.validate_field(name, &self.fields) {
            Some(message) => {
                self.errors.insert(name, message.to_string());
            }
            None => {
                self.errors.remove(name);
            }
        }
    }

    /// Проверяет всю форму. Возвращает поля только если схема пройдена;
    /// иначе сохраняет ошибки. Пока запрос в полёте, отправка игнорируется.
    pub fn submit(&mut self) -> Option<F> {
        if self.submitting {
            return None;
        }
        match F::schema().validate(&self.fields) {
            Ok(()) => {
                self.errors.clear();
                Some(self.fields.clone())
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    pub fn begin_request(&mut self) {
        self.submitting = true;
    }

    pub fn finish_request(&mut self) {
        self.submitting = false;
    }

    pub fn set_error(&mut self, name: &'static str, message: impl Into<String>) {
        self.errors.insert(name, message.into());
    }

    pub fn reset(&mut self) {
        self.fields = F::default();
        self.errors.clear();
        self.submitting = false;
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FieldSource for LoginFields {
    fn field(&self, name: &str) -> Cow<'_, str> {
        match name {
            field::EMAIL => Cow::Borrowed(&self.email),
            field::PASSWORD => Cow::Borrowed(&self.password),
            _ => Cow::Borrowed(""),
        }
    }
}

impl FormFields for LoginFields {
    fn schema() -> &'static Schema {
        &LOGIN_SCHEMA
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            field::EMAIL => self.email = value,
            field::PASSWORD => self.password = value,
            _ => {}
        }
    }
}

impl LoginFields {
    pub fn into_request(self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFields {
    pub fio: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl FieldSource for RegisterFields {
    fn field(&self, name: &str) -> Cow<'_, str> {
        let value = match name {
            field::FIO => self.fio.as_str(),
            field::PHONE => self.phone.as_str(),
            field::EMAIL => self.email.as_str(),
            field::PASSWORD => self.password.as_str(),
            field::REPEAT_PASSWORD => self.repeat_password.as_str(),
            _ => "",
        };
        Cow::Borrowed(value)
    }
}

impl FormFields for RegisterFields {
    fn schema() -> &'static Schema {
        &REGISTER_SCHEMA
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            field::FIO => self.fio = value,
            field::PHONE => self.phone = value,
            field::EMAIL => self.email = value,
            field::PASSWORD => self.password = value,
            field::REPEAT_PASSWORD => self.repeat_password = value,
            _ => {}
        }
    }
}

impl RegisterFields {
    /// Повтор пароля нужен только для проверки и на сервер не уходит.
    pub fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            fio: self.fio.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password,
        }
    }
}

/// Черновик нового занятия. `None` в группе и типе означает "не выбрано".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleFields {
    pub group_id: Option<i32>,
    pub lesson_type: Option<LessonType>,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    pub address: String,
}

impl FieldSource for ScheduleFields {
    fn field(&self, name: &str) -> Cow<'_, str> {
        match name {
            field::GROUP_ID => self
                .group_id
                .map_or(Cow::Borrowed(""), |id| Cow::Owned(id.to_string())),
            field::TYPE => Cow::Borrowed(self.lesson_type.map_or("", LessonType::as_str)),
            field::START_TIME => Cow::Borrowed(&self.start_time),
            field::END_TIME => Cow::Borrowed(&self.end_time),
            field::DATE => Cow::Borrowed(&self.date),
            field::ADDRESS => Cow::Borrowed(&self.address),
            _ => Cow::Borrowed(""),
        }
    }
}

impl FormFields for ScheduleFields {
    fn schema() -> &'static Schema {
        &SCHEDULE_SCHEMA
    }

    fn set(&mut self, name: &str, value: String) {
        match name {
            field::GROUP_ID => self.group_id = value.trim().parse().ok(),
            field::TYPE => self.lesson_type = LessonType::from_str(&value).ok(),
            field::START_TIME => self.start_time = value,
            field::END_TIME => self.end_time = value,
            field::DATE => self.date = value,
            field::ADDRESS => self.address = value,
            _ => {}
        }
    }
}

impl ScheduleFields {
    /// Пустой адрес в запрос не попадает.
    pub fn into_request(self) -> Option<CreateScheduleRequest> {
        let address = self.address.trim();
        Some(CreateScheduleRequest {
            group_id: self.group_id?,
            body: ScheduleBody {
                lesson_type: self.lesson_type?,
                start_time: self.start_time.trim().to_string(),
                end_time: self.end_time.trim().to_string(),
                date: self.date.trim().to_string(),
                address: (!address.is_empty()).then(|| address.to_string()),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn filled_login() -> Form<LoginFields> {
        let mut form = Form::<LoginFields>::default();
        form.change(field::EMAIL, "teacher@school.ru".to_string());
        form.change(field::PASSWORD, "secret-pass".to_string());
        form
    }

    #[test]
    fn invalid_submit_keeps_errors_and_returns_nothing() {
        let mut form = Form::<LoginFields>::default();
        form.change(field::EMAIL, "not-an-email".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.error(field::EMAIL), Some("Введите валидный E-mail"));
        assert_eq!(form.error(field::PASSWORD), Some("Введите пароль"));
    }

    #[test]
    fn valid_submit_returns_typed_fields() {
        let mut form = filled_login();
        let fields = form.submit().expect("form should be valid");

        assert_eq!(fields.email, "teacher@school.ru");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn change_revalidates_only_fields_with_errors() {
        let mut form = Form::<LoginFields>::default();
        form.change(field::EMAIL, "bad".to_string());
        assert_eq!(form.error(field::EMAIL), None);

        assert!(form.submit().is_none());
        form.change(field::EMAIL, "good@mail.ru".to_string());
        assert_eq!(form.error(field::EMAIL), None);
        form.change(field::PASSWORD, "short".to_string());
        assert_eq!(
            form.error(field::PASSWORD),
            Some("Пароль должен содержать минимум 8 символов")
        );
    }

    #[test]
    fn fixing_password_clears_mismatch_error() {
        let mut form = Form::<RegisterFields>::default();
        form.change(field::PASSWORD, "password1".to_string());
        form.change(field::REPEAT_PASSWORD, "password2".to_string());
        assert!(form.submit().is_none());
        assert_eq!(form.error(field::REPEAT_PASSWORD), Some("Пароли не совпадают"));

        form.change(field::PASSWORD, "password2".to_string());
        assert_eq!(form.error(field::REPEAT_PASSWORD), None);
    }

    #[test]
    fn moving_start_time_rechecks_end_time() {
        let mut form = Form::<ScheduleFields>::default();
        form.change(field::START_TIME, "12:00".to_string());
        form.change(field::END_TIME, "11:00".to_string());
        assert!(form.submit().is_none());
        assert_eq!(
            form.error(field::END_TIME),
            Some("Конец занятия должен быть позже начала")
        );

        form.change(field::START_TIME, "10:00".to_string());
        assert_eq!(form.error(field::END_TIME), None);
        // Ошибок, которых не было, изменение не добавляет
        assert_eq!(form.error(field::START_TIME), None);
    }

    #[test]
    fn submit_is_ignored_while_request_in_flight() {
        let mut form = filled_login();
        form.begin_request();
        assert!(form.submit().is_none());

        form.finish_request();
        assert!(form.submit().is_some());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut form = Form::<ScheduleFields>::default();
        form.change(field::GROUP_ID, "3".to_string());
        form.change(field::START_TIME, "10:00".to_string());
        form.set_error(field::DATE, "ошибка");
        form.begin_request();

        form.reset();

        assert_eq!(form.fields(), &ScheduleFields::default());
        assert!(form.errors().is_empty());
        assert!(!form.is_submitting());
    }

    #[test]
    fn register_request_drops_repeat_password() {
        let fields = RegisterFields {
            fio: " Иванов Иван ".to_string(),
            phone: "89123456789".to_string(),
            email: "ivan@mail.ru".to_string(),
            password: "password1".to_string(),
            repeat_password: "password1".to_string(),
        };
        let body = serde_json::to_value(fields.into_request()).unwrap();
        assert_eq!(
            body,
            json!({
                "fio": "Иванов Иван",
                "phone": "89123456789",
                "email": "ivan@mail.ru",
                "password": "password1"
            })
        );
    }

    #[test]
    fn schedule_payload_omits_empty_address() {
        let mut form = Form::<ScheduleFields>::default();
        form.change(field::GROUP_ID, "3".to_string());
        form.change(field::TYPE, "lecture".to_string());
        form.change(field::START_TIME, "10:00".to_string());
        form.change(field::END_TIME, "11:30".to_string());
        form.change(field::DATE, "2024-05-01".to_string());
        form.change(field::ADDRESS, String::new());

        let request = form.submit().and_then(ScheduleFields::into_request).unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "groupId": 3,
                "body": {
                    "type": "lecture",
                    "startTime": "10:00",
                    "endTime": "11:30",
                    "date": "2024-05-01"
                }
            })
        );
    }

    #[test]
    fn schedule_payload_keeps_address() {
        let fields = ScheduleFields {
            group_id: Some(1),
            lesson_type: Some(LessonType::Practice),
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            date: "2024-05-02".to_string(),
            address: " ул. Ленина, 1 ".to_string(),
        };
        let request = fields.into_request().unwrap();
        assert_eq!(request.body.address.as_deref(), Some("ул. Ленина, 1"));
    }

    #[test]
    fn unparsable_group_clears_selection() {
        let mut fields = ScheduleFields::default();
        fields.set(field::GROUP_ID, "DEFAULT".to_string());
        assert_eq!(fields.group_id, None);
        assert_eq!(fields.field(field::GROUP_ID), "");
    }
}
