use iced::widget::container::bordered_box;
use iced::widget::{button, column, pick_list, row, text, text_input, Column, Container, Row, Scrollable};
use iced::{Alignment, Length};
use iced_aw::date_picker::Date;
use iced_aw::time_picker::Time;
use iced_aw::{date_picker, time_picker};
use iced_font_awesome::fa_icon_solid;

use crate::api::{LessonType, Schedule};
use crate::app::state::Picker;
use crate::app::{App, Message};
use crate::screens::common::{form_error, form_field, modal_header, ERROR_COLOR};
use crate::validation::field;

/// Строка расписания.
pub fn schedule_item<'a>(app: &'a App, schedule: &'a Schedule) -> Container<'a, Message> {
    let group = app
        .group_name(schedule.group_id)
        .map_or_else(|| format!("Группа №{}", schedule.group_id), str::to_string);

    let mut line = Row::new()
        .spacing(20)
        .align_y(Alignment::Center)
        .push(text(&schedule.date).size(18))
        .push(text(format!("{}–{}", schedule.start_time, schedule.end_time)).size(18))
        .push(text(schedule.lesson_type.to_string()).size(18))
        .push(text(group).size(18));
    if let Some(address) = &schedule.address {
        line = line.push(text(address).size(16));
    }

    Container::new(line)
        .padding(10)
        .width(Length::Fill)
        .style(move |_| bordered_box(&app.theme))
}

fn picker_error(message: Option<&str>) -> iced::widget::Text<'_> {
    text(message.unwrap_or("")).size(14).color(ERROR_COLOR)
}

fn time_field<'a>(
    app: &'a App,
    title: &'a str,
    name: &'static str,
    value: &'a str,
    picker: Picker,
) -> Column<'a, Message> {
    let toggle = button(fa_icon_solid("clock").style(move |_| text::base(&app.theme)))
        .on_press(Message::OpenPicker(picker));
    let input = text_input("ЧЧ:ММ", value)
        .on_input(move |v| Message::ScheduleFieldChanged(name, v))
        .padding(10)
        .width(Length::Fixed(120.0));

    column![
        text(title).size(14),
        row![
            input,
            time_picker(
                app.picker == Some(picker),
                Time::now_hm(true),
                toggle,
                Message::CancelPicker,
                Message::SubmitTime,
            )
            .use_24h(),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        picker_error(app.schedule_form.error(name)),
    ]
    .spacing(4)
}

pub fn schedule_modal(app: &App) -> Column<'_, Message> {
    let form = &app.schedule_form;
    let fields = form.fields();

    let selected_group = fields
        .group_id
        .and_then(|id| app.groups.iter().find(|group| group.id == id));

    let selects = row![
        column![
            text("Группа").size(14),
            pick_list(app.groups.as_slice(), selected_group, Message::ScheduleGroupSelected)
                .placeholder("Выберите группу")
                .width(Length::Fixed(220.0)),
            picker_error(form.error(field::GROUP_ID)),
        ]
        .spacing(4),
        column![
            text("Тип урока").size(14),
            pick_list(LessonType::ALL, fields.lesson_type, Message::ScheduleTypeSelected)
                .placeholder("Выберите тип")
                .width(Length::Fixed(220.0)),
            picker_error(form.error(field::TYPE)),
        ]
        .spacing(4),
    ]
    .spacing(20);

    let date_toggle = button(fa_icon_solid("calendar").style(move |_| text::base(&app.theme)))
        .on_press(Message::OpenPicker(Picker::Date));
    let date_field = column![
        text("Дата").size(14),
        row![
            text_input("ГГГГ-ММ-ДД", &fields.date)
                .on_input(|v| Message::ScheduleFieldChanged(field::DATE, v))
                .padding(10)
                .width(Length::Fixed(160.0)),
            date_picker(
                app.picker == Some(Picker::Date),
                Date::today(),
                date_toggle,
                Message::CancelPicker,
                Message::SubmitDate,
            ),
        ]
        .spacing(10)
        .align_y(Alignment::Center),
        picker_error(form.error(field::DATE)),
    ]
    .spacing(4);

    let inputs = row![
        time_field(app, "Начало урока", field::START_TIME, &fields.start_time, Picker::StartTime),
        time_field(app, "Конец урока", field::END_TIME, &fields.end_time, Picker::EndTime),
        date_field,
    ]
    .spacing(20);

    let address = form_field(
        "Адрес (опционально)",
        &fields.address,
        form.error(field::ADDRESS),
        false,
        |v| Message::ScheduleFieldChanged(field::ADDRESS, v),
    );

    let mut list = Column::new().spacing(8);
    if app.schedules.is_empty() {
        list = list.push(text("Занятий пока нет."));
    } else {
        for schedule in &app.schedules {
            list = list.push(schedule_item(app, schedule));
        }
    }

    column![
        modal_header(app, "Изменить расписание"),
        selects,
        inputs,
        address,
        form_error(app),
        button(if form.is_submitting() { "Сохранение..." } else { "Добавить занятие" })
            .on_press_maybe((!form.is_submitting()).then_some(Message::ScheduleSubmit))
            .padding(10),
        text("Расписание").size(22),
        Scrollable::new(list).height(Length::Fixed(260.0)),
    ]
    .spacing(15)
}
