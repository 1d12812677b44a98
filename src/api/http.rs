//! Реализация [`PlatformApi`] поверх reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{info, instrument, warn};

use super::types::ErrorBody;
use super::{
    ApiError, CreateScheduleRequest, Group, LoginRequest, PlatformApi, RegisterRequest, Schedule,
    Session,
};

pub struct HttpApi {
    client: Client,
    base_url: Url,
}

impl HttpApi {
    /// # Errors
    ///
    /// `Transport`, если адрес некорректен или клиент не собрался.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        // Без завершающего слэша Url::join отбросит последний сегмент пути.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|err| ApiError::Transport(format!("некорректный адрес API {normalized}: {err}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|err| ApiError::Transport(format!("некорректный путь {path}: {err}")))
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        authenticated: bool,
    ) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode(status, &body, authenticated)
    }
}

/// Разбирает ответ сервера. 401 на запросе с токеном означает конец сессии;
/// на входе или регистрации это обычный отказ. Отказом считается только 4xx
/// с телом `{message}`, остальные ошибки к полям формы не относятся.
fn decode<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
    authenticated: bool,
) -> Result<T, ApiError> {
    if status == StatusCode::UNAUTHORIZED && authenticated {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        return Err(failure(status, body));
    }
    serde_json::from_slice(body).map_err(|err| ApiError::Decode(err.to_string()))
}

fn failure(status: StatusCode, body: &[u8]) -> ApiError {
    if status.is_server_error() {
        return ApiError::Transport(format!("ошибка {}", status.as_u16()));
    }
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(error) if status.is_client_error() => {
            ApiError::Rejected { status: status.as_u16(), message: error.message }
        }
        _ => ApiError::Decode(format!("неожиданный ответ {}", status.as_u16())),
    }
}

#[async_trait]
impl PlatformApi for HttpApi {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn login(&self, request: LoginRequest) -> Result<Session, ApiError> {
        let url = self.endpoint("auth/login")?;
        let result: Result<Session, ApiError> =
            self.send(self.client.post(url).json(&request), false).await;
        match &result {
            Ok(session) => info!(user_id = session.user.id, "вход выполнен"),
            Err(err) => warn!(error = %err, "вход отклонён"),
        }
        result
    }

    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn register(&self, request: RegisterRequest) -> Result<Session, ApiError> {
        let url = self.endpoint("auth/register")?;
        let result: Result<Session, ApiError> =
            self.send(self.client.post(url).json(&request), false).await;
        if let Err(err) = &result {
            warn!(error = %err, "регистрация отклонена");
        }
        result
    }

    #[instrument(skip(self, token, request), fields(group_id = request.group_id))]
    async fn create_schedule(
        &self,
        token: &str,
        request: CreateScheduleRequest,
    ) -> Result<Schedule, ApiError> {
        let url = self.endpoint(&format!("groups/{}/schedules", request.group_id))?;
        let builder = self.client.post(url).bearer_auth(token).json(&request.body);
        self.send(builder, true).await
    }

    #[instrument(skip_all)]
    async fn list_groups(&self, token: &str) -> Result<Vec<Group>, ApiError> {
        let url = self.endpoint("groups")?;
        self.send(self.client.get(url).bearer_auth(token), true).await
    }

    #[instrument(skip_all)]
    async fn list_schedules(&self, token: &str) -> Result<Vec<Schedule>, ApiError> {
        let url = self.endpoint("schedules")?;
        self.send(self.client.get(url).bearer_auth(token), true).await
    }
}
