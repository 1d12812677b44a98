use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::validation::{parse_time, DATE_FORMAT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Teacher,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            Role::Student => "Студент",
            Role::Teacher => "Преподаватель",
            Role::Admin => "Администратор",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub fio: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub role: Role,
}

/// Сессия: токен сервера и пользователь, которому он выдан.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

// Для PickList
impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Lecture,
    Practice,
    Seminar,
    Exam,
}

impl LessonType {
    pub const ALL: &'static [LessonType] = &[
        LessonType::Lecture,
        LessonType::Practice,
        LessonType::Seminar,
        LessonType::Exam,
    ];

    /// Значение на проводе.
    pub fn as_str(self) -> &'static str {
        match self {
            LessonType::Lecture => "lecture",
            LessonType::Practice => "practice",
            LessonType::Seminar => "seminar",
            LessonType::Exam => "exam",
        }
    }
}

impl fmt::Display for LessonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", match self {
            LessonType::Lecture => "Лекция",
            LessonType::Practice => "Практика",
            LessonType::Seminar => "Семинар",
            LessonType::Exam => "Экзамен",
        })
    }
}

impl FromStr for LessonType {
    type Err = ();

    fn from_str(input: &str) -> Result<LessonType, Self::Err> {
        LessonType::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == input.trim())
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: i32,
    pub group_id: i32,
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Schedule {
    /// Начало занятия; `None`, если сервер прислал дату или время в другом формате.
    pub fn starts_at(&self) -> Option<NaiveDateTime> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).ok()?;
        Some(date.and_time(parse_time(&self.start_time)?))
    }
}

/// Занятия по возрастанию начала; нераспознанные в конце.
pub fn sort_schedules(schedules: &mut [Schedule]) {
    schedules.sort_by_key(|schedule| (schedule.starts_at().is_none(), schedule.starts_at()));
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub fio: String,
    pub phone: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBody {
    #[serde(rename = "type")]
    pub lesson_type: LessonType,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Запрос на создание занятия в группе `group_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub group_id: i32,
    pub body: ScheduleBody,
}

/// Тело ответа с ошибкой.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}
