use crate::{
    model::vacation::VacationStatus,
    server::{
        data::vacation::VacationRepository,
        model::{
            page::PageRequest,
            vacation::{CreateVacationParams, UpdateVacationParams},
        },
    },
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod find_all_paged;
mod find_by_id;
mod update;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
