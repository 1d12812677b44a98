use iced_aw::date_picker::Date;
use iced_aw::time_picker::Time;

use crate::api::{ApiError, Group, LessonType, Schedule, Session};
use crate::app::state::{LoadTicket, ModalTicket, Picker, Route};

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Route),
    Logout,
    ThemeSelected(&'static str),
    //
    OpenLogin,
    OpenRegister,
    OpenSchedule,
    CloseModal,
    // Клик по затемнению вокруг окна
    Ignore,
    //
    LoginFieldChanged(&'static str, String),
    LoginSubmit,
    LoginFinished(ModalTicket, Result<Session, ApiError>),
    //
    RegisterFieldChanged(&'static str, String),
    RegisterSubmit,
    RegisterFinished(ModalTicket, Result<Session, ApiError>),
    //
    ScheduleFieldChanged(&'static str, String),
    ScheduleGroupSelected(Group),
    ScheduleTypeSelected(LessonType),
    ScheduleSubmit,
    ScheduleCreated(ModalTicket, Result<Schedule, ApiError>),
    OpenPicker(Picker),
    CancelPicker,
    SubmitDate(Date),
    SubmitTime(Time),
    //
    LoadProfileData,
    GroupsLoaded(LoadTicket, Result<Vec<Group>, ApiError>),
    SchedulesLoaded(LoadTicket, Result<Vec<Schedule>, ApiError>),
}
