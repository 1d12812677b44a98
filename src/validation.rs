//! Декларативные схемы валидации форм.
//!
//! Схема хранит для каждого поля упорядоченный список правил. Проверка поля
//! останавливается на первом нарушенном правиле, и его сообщение попадает в
//! [`FieldErrors`].

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

/// Имена полей, общие для схем и форм.
pub mod field {
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
    pub const FIO: &str = "fio";
    pub const PHONE: &str = "phone";
    pub const REPEAT_PASSWORD: &str = "repeatPassword";
    pub const GROUP_ID: &str = "groupId";
    pub const TYPE: &str = "type";
    pub const START_TIME: &str = "startTime";
    pub const END_TIME: &str = "endTime";
    pub const DATE: &str = "date";
    pub const ADDRESS: &str = "address";
}

pub const TIME_FORMAT: &str = "%H:%M";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ошибки по полям: имя поля -> сообщение первого нарушенного правила.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// Источник значений полей для проверки.
pub trait FieldSource {
    /// Текущее значение поля; неизвестные поля считаются пустыми.
    fn field(&self, name: &str) -> Cow<'_, str>;
}

#[derive(Debug)]
enum Check {
    Required,
    Matches(&'static Regex),
    MinLen(usize),
    Equals(&'static str),
    Time,
    Date,
    TimeAfter(&'static str),
}

/// Одно правило: проверка и сообщение при её провале.
#[derive(Debug)]
pub struct Rule {
    check: Check,
    message: &'static str,
}

impl Rule {
    pub fn required(message: &'static str) -> Self {
        Self { check: Check::Required, message }
    }

    pub fn matches(pattern: &'static Regex, message: &'static str) -> Self {
        Self { check: Check::Matches(pattern), message }
    }

    /// Минимальная длина в символах, а не в байтах.
    pub fn min_len(len: usize, message: &'static str) -> Self {
        Self { check: Check::MinLen(len), message }
    }

    pub fn equals(other: &'static str, message: &'static str) -> Self {
        Self { check: Check::Equals(other), message }
    }

    pub fn time(message: &'static str) -> Self {
        Self { check: Check::Time, message }
    }

    pub fn date(message: &'static str) -> Self {
        Self { check: Check::Date, message }
    }

    /// Время строго позже времени в поле `other`.
    pub fn time_after(other: &'static str, message: &'static str) -> Self {
        Self { check: Check::TimeAfter(other), message }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Поле, с которым правило сравнивает значение.
    fn other_field(&self) -> Option<&'static str> {
        match self.check {
            Check::Equals(other) | Check::TimeAfter(other) => Some(other),
            _ => None,
        }
    }

    // Все правила, кроме required, пропускают пустое значение.
    fn passes(&self, value: &str, source: &dyn FieldSource) -> bool {
        if value.trim().is_empty() {
            return !matches!(self.check, Check::Required);
        }
        match self.check {
            Check::Required => true,
            Check::Matches(pattern) => pattern.is_match(value),
            Check::MinLen(len) => value.chars().count() >= len,
            Check::Equals(other) => source.field(other) == value,
            Check::Time => parse_time(value).is_some(),
            Check::Date => NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).is_ok(),
            Check::TimeAfter(other) => {
                match (parse_time(&source.field(other)), parse_time(value)) {
                    (Some(start), Some(end)) => end > start,
                    _ => true,
                }
            }
        }
    }
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

/// Набор правил формы.
#[derive(Debug, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push((name, rules));
        self
    }

    /// Сообщение первого нарушенного правила поля либо `None`.
    pub fn validate_field(&self, name: &str, source: &dyn FieldSource) -> Option<&'static str> {
        let (_, rules) = self.fields.iter().find(|(field, _)| *field == name)?;
        let value = source.field(name);
        rules
            .iter()
            .find(|rule| !rule.passes(&value, source))
            .map(Rule::message)
    }

    /// Поля, чьи правила ссылаются на `name`.
    pub fn dependents<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.fields
            .iter()
            .filter(move |(_, rules)| rules.iter().any(|rule| rule.other_field() == Some(name)))
            .map(|(field, _)| *field)
    }

    pub fn validate(&self, source: &dyn FieldSource) -> Result<(), FieldErrors> {
        let errors: FieldErrors = self
            .fields
            .iter()
            .filter_map(|(name, _)| {
                self.validate_field(name, source)
                    .map(|message| (*name, message.to_string()))
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn compile(pattern: &str) -> Regex {
    // Шаблоны заданы константами, ошибка здесь означает опечатку в коде.
    Regex::new(pattern).unwrap_or_else(|err| panic!("некорректный шаблон {pattern}: {err}"))
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,4}$"));

// Фамилия Имя[ Отчество], каждое слово с заглавной буквы.
static FIO_RE: LazyLock<Regex> = LazyLock::new(|| {
    let word = "(?:[А-ЯЁ][а-яё]+|[A-Z][a-z]+)";
    compile(&format!("^{word} {word}(?: {word})?$"))
});

// 8 или +7, затем ровно 10 цифр; код города можно взять в скобки.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^(?:8|\+7)?[ -]?(?:\(\d{3}\)|\d{3})[ -]?\d{3}[ -]?\d{2}[ -]?\d{2}$")
});

fn email_rules() -> Vec<Rule> {
    vec![
        Rule::required("Введите E-mail"),
        Rule::matches(&EMAIL_RE, "Введите валидный E-mail"),
    ]
}

fn password_rules() -> Vec<Rule> {
    vec![
        Rule::required("Введите пароль"),
        Rule::min_len(8, "Пароль должен содержать минимум 8 символов"),
    ]
}

pub static LOGIN_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(field::EMAIL, email_rules())
        .field(field::PASSWORD, password_rules())
});

pub static REGISTER_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(
            field::FIO,
            vec![
                Rule::required("Введите ФИО"),
                Rule::matches(&FIO_RE, "Введите корректное ФИО"),
            ],
        )
        .field(
            field::PHONE,
            vec![
                Rule::required("Введите номер телефона"),
                Rule::matches(&PHONE_RE, "Введите корректный номер телефона"),
            ],
        )
        .field(field::EMAIL, email_rules())
        .field(field::PASSWORD, password_rules())
        .field(
            field::REPEAT_PASSWORD,
            vec![
                Rule::required("Повторите пароль"),
                Rule::equals(field::PASSWORD, "Пароли не совпадают"),
            ],
        )
});

pub static SCHEDULE_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new()
        .field(field::GROUP_ID, vec![Rule::required("Выберите номер группы")])
        .field(field::TYPE, vec![Rule::required("Выберите тип занятия")])
        .field(
            field::START_TIME,
            vec![
                Rule::required("Выберите начало занятия"),
                Rule::time("Укажите время в формате ЧЧ:ММ"),
            ],
        )
        .field(
            field::END_TIME,
            vec![
                Rule::required("Выберите конец занятия"),
                Rule::time("Укажите время в формате ЧЧ:ММ"),
                Rule::time_after(field::START_TIME, "Конец занятия должен быть позже начала"),
            ],
        )
        .field(
            field::DATE,
            vec![
                Rule::required("Введите дату занятия"),
                Rule::date("Укажите дату в формате ГГГГ-ММ-ДД"),
            ],
        )
});
