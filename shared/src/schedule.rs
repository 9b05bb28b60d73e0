#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use chrono::NaiveTime;

/// `(value, label)` pairs offered by the delivery date select.
pub const DELIVERY_DATES: [(&str, &str); 4] = [
    ("2025-10-14", "Today (Oct 14)"),
    ("2025-10-15", "Tomorrow (Oct 15)"),
    ("2025-10-16", "Oct 16"),
    ("2025-10-17", "Oct 17"),
];

pub const DELIVERY_SLOTS: [&str; 10] = [
    "08:00", "08:30", "09:00", "12:00", "12:30", "13:00", "13:30", "19:00", "19:30", "20:00",
];

pub const DEFAULT_DATE: &str = "2025-10-15";
pub const DEFAULT_SLOT: &str = "13:00";

/// `"13:00"` becomes `"1:00 PM"`.
pub fn slot_label(slot: &str) -> Option<String> {
    NaiveTime::parse_from_str(slot, "%H:%M")
        .ok()
        .map(|time| time.format("%-I:%M %p").to_string())
}
