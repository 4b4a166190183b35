//! Punch inference: mapping a day's punches onto the four canonical slots.
//!
//! Assignment is positional only. The first punch is the morning entry, the
//! second the morning exit and so on; nothing checks that an "exit" really
//! follows an "entry", and punches past the fourth are ignored.

use chrono::NaiveTime;

use crate::models::PunchSlots;

/// Number of canonical punch slots per day.
pub const SLOT_COUNT: usize = 4;

/// Infers the four daily slots from a day's ordered punch times.
///
/// # Example
///
/// ```
/// use attendance_report::processing::infer_slots;
/// use chrono::NaiveTime;
///
/// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
///
/// let slots = infer_slots(&[eight, noon]);
/// assert_eq!(slots.morning_in, Some(eight));
/// assert_eq!(slots.morning_out, Some(noon));
/// assert_eq!(slots.afternoon_in, None);
/// assert_eq!(slots.afternoon_out, None);
/// ```
pub fn infer_slots(times: &[NaiveTime]) -> PunchSlots {
    PunchSlots {
        morning_in: times.first().copied(),
        morning_out: times.get(1).copied(),
        afternoon_in: times.get(2).copied(),
        afternoon_out: times.get(3).copied(),
    }
}
