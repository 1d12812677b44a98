//! Клиент внешнего API платформы.

pub mod http;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use http::HttpApi;
pub use types::{
    CreateScheduleRequest, Group, LessonType, LoginRequest, RegisterRequest, Role, Schedule,
    ScheduleBody, Session, User, sort_schedules,
};

/// Ошибки обращения к серверу.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Сервер отклонил запрос и объяснил почему.
    #[error("{message}")]
    Rejected { status: u16, message: String },
    /// Токен больше не действителен.
    #[error("Сессия истекла, войдите снова")]
    Unauthorized,
    #[error("Сервер недоступен: {0}")]
    Transport(String),
    #[error("Некорректный ответ сервера: {0}")]
    Decode(String),
}

/// Операции, которые приложение выполняет на сервере.
#[async_trait]
pub trait PlatformApi: Send + Sync {
    async fn login(&self, request: LoginRequest) -> Result<Session, ApiError>;

    async fn register(&self, request: RegisterRequest) -> Result<Session, ApiError>;

    async fn create_schedule(
        &self,
        token: &str,
        request: CreateScheduleRequest,
    ) -> Result<Schedule, ApiError>;

    async fn list_groups(&self, token: &str) -> Result<Vec<Group>, ApiError>;

    async fn list_schedules(&self, token: &str) -> Result<Vec<Schedule>, ApiError>;
}
