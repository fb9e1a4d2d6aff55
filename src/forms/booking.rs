//! Appointment booking.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use super::INVALID_PHONE;
use crate::error::FieldErrors;
use crate::rule;
use crate::schema::{FieldDef, FormSchema};
use crate::submit::FormRecord;
use crate::value::{FormData, Phone};

const TIME_SLOTS: &[&str] = &["10:00 AM", "10:30 AM", "11:00 AM"];

static BOOKING_REQUEST: Lazy<FormSchema> = Lazy::new(|| {
    FormSchema::builder("booking_request")
        .field(FieldDef::date("date", "Invalid date"))
        .field(FieldDef::choice("time", TIME_SLOTS))
        .field(FieldDef::text("name").rule(rule::min_len(3, "Name must be at least 3 characters")))
        .field(FieldDef::phone("phone", INVALID_PHONE))
        .field(
            FieldDef::text("reason")
                .rule(rule::min_len(5, "Reason must be at least 5 characters")),
        )
        .build()
        .expect("booking request schema is consistent")
});

/// Booking request: date, time slot, patient name, phone and reason.
pub fn booking_request() -> &'static FormSchema {
    &BOOKING_REQUEST
}

/// Appointment slots offered by the booking form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeSlot {
    /// 10:00 AM
    TenAm,
    /// 10:30 AM
    TenThirtyAm,
    /// 11:00 AM
    ElevenAm,
}

impl TimeSlot {
    /// Every slot, earliest first.
    pub const ALL: [TimeSlot; 3] = [TimeSlot::TenAm, TimeSlot::TenThirtyAm, TimeSlot::ElevenAm];

    /// Label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::TenThirtyAm => "10:30 AM",
            TimeSlot::ElevenAm => "11:00 AM",
        }
    }
}

impl FromStr for TimeSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeSlot::ALL
            .into_iter()
            .find(|slot| slot.label() == s)
            .ok_or_else(|| format!("Expected one of: {}", TIME_SLOTS.join(", ")))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TimeSlot {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A validated booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BookingRequest {
    /// Appointment day.
    pub date: NaiveDate,
    /// Appointment slot.
    pub time: TimeSlot,
    /// Patient name.
    pub name: String,
    /// Contact phone.
    pub phone: Phone,
    /// Reason for the visit.
    pub reason: String,
}

impl FormRecord for BookingRequest {
    fn schema() -> &'static FormSchema {
        booking_request()
    }

    fn from_data(data: &FormData) -> Result<Self, FieldErrors> {
        let time = data
            .choice("time")?
            .parse()
            .map_err(|message: String| FieldErrors::single("time", message))?;
        Ok(Self {
            date: data.date("date")?,
            time,
            name: data.text("name")?.to_string(),
            phone: data.phone("phone")?.clone(),
            reason: data.text("reason")?.to_string(),
        })
    }
}
