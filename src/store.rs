//! Хранилище авторизации: текущая сессия и её сохранение между запусками.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tracing::{info, warn};

use crate::api::{Session, User};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("ошибка чтения/записи сессии: {0}")]
    Io(#[from] io::Error),
    #[error("повреждённый файл сессии: {0}")]
    Json(#[from] serde_json::Error),
}

/// Где сессия живёт между запусками.
pub trait SessionStorage {
    fn load(&self) -> Result<Option<Session>, StorageError>;

    fn save(&self, session: &Session) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}

/// Сессия в JSON-файле рядом с config.json.
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Session>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }

    fn save(&self, session: &Session) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

/// Текущая сессия приложения. Меняется только через `sign_in`/`sign_out`.
pub struct AuthStore {
    session: Option<Session>,
    storage: Box<dyn SessionStorage>,
}

impl AuthStore {
    /// Поднимает сессию из хранилища. Испорченный файл не мешает запуску:
    /// пользователь просто войдёт заново.
    pub fn hydrate(storage: Box<dyn SessionStorage>) -> Self {
        let session = match storage.load() {
            Ok(session) => session,
            Err(err) => {
                warn!(error = %err, "не удалось восстановить сессию");
                None
            }
        };
        if let Some(session) = &session {
            info!(user_id = session.user.id, "сессия восстановлена");
        }
        Self { session, storage }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|session| &session.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn sign_in(&mut self, session: Session) {
        if let Err(err) = self.storage.save(&session) {
            warn!(error = %err, "сессия не сохранена на диск");
        }
        info!(user_id = session.user.id, role = ?session.user.role, "пользователь вошёл");
        self.session = Some(session);
    }

    pub fn sign_out(&mut self) {
        if let Err(err) = self.storage.clear() {
            warn!(error = %err, "не удалось удалить сохранённую сессию");
        }
        if let Some(session) = self.session.take() {
            info!(user_id = session.user.id, "пользователь вышел");
        }
    }
}

#[cfg(test)]
pub mod memory {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Хранилище в памяти; клоны видят одну и ту же ячейку.
    #[derive(Clone, Default)]
    pub struct MemoryStorage {
        slot: Rc<RefCell<Option<Session>>>,
    }

    impl MemoryStorage {
        pub fn with(session: Session) -> Self {
            Self { slot: Rc::new(RefCell::new(Some(session))) }
        }

        pub fn stored(&self) -> Option<Session> {
            self.slot.borrow().clone()
        }
    }

    impl SessionStorage for MemoryStorage {
        fn load(&self) -> Result<Option<Session>, StorageError> {
            Ok(self.stored())
        }

        fn save(&self, session: &Session) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = Some(session.clone());
            Ok(())
        }

        fn clear(&self) -> Result<(), StorageError> {
            *self.slot.borrow_mut() = None;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::env;

    use super::memory::MemoryStorage;
    use super::*;
    use crate::api::fake::session;

    fn temp_file(name: &str) -> PathBuf {
        env::temp_dir().join(format!("platform-client-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn starts_empty_without_stored_session() {
        let store = AuthStore::hydrate(Box::new(MemoryStorage::default()));
        assert!(!store.is_authenticated());
        assert_eq!(store.token(), None);
    }

    #[test]
    fn hydrates_from_storage() {
        let store = AuthStore::hydrate(Box::new(MemoryStorage::with(session())));
        assert_eq!(store.session(), Some(&session()));
        assert_eq!(store.token(), Some("token-7"));
    }

    #[test]
    fn sign_in_and_out_go_through_storage() {
        let storage = MemoryStorage::default();
        let mut store = AuthStore::hydrate(Box::new(storage.clone()));

        store.sign_in(session());
        assert_eq!(storage.stored(), Some(session()));
        assert_eq!(store.user().map(|user| user.id), Some(7));

        store.sign_out();
        assert_eq!(storage.stored(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn json_file_round_trip_and_clear() {
        let path = temp_file("round-trip");
        let storage = JsonFileStorage::new(&path);

        assert!(storage.load().unwrap().is_none());
        storage.save(&session()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(session()));

        storage.clear().unwrap();
        assert!(!path.exists());
        storage.clear().unwrap();
    }

    #[test]
    fn corrupt_file_is_ignored_on_hydrate() {
        let path = temp_file("corrupt");
        fs::write(&path, "{ not json").unwrap();
        let storage = JsonFileStorage::new(&path);

        assert!(matches!(storage.load(), Err(StorageError::Json(_))));
        let store = AuthStore::hydrate(Box::new(JsonFileStorage::new(&path)));
        assert!(!store.is_authenticated());

        fs::remove_file(&path).unwrap();
    }
}
