use crate::data::booking::{BookingRepository, BookingScope};
use chrono::{Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_parts;
mod update_status;
