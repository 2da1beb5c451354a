//! Service Kit - Assistant Tools
//!
//! Scheduling tools that implement `assistant_core::Tool`.

mod book_meeting;
mod check_availability;
mod next_weekday;

pub use book_meeting::BookMeetingTool;
pub use check_availability::CheckAvailabilityTool;
pub use next_weekday::NextWeekdayDateTool;
