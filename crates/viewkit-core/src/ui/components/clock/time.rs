//! Wall-clock time and the hand angles derived from it

const MS_PER_SECOND: u64 = 1_000;
const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR as i64;

/// Time of day with millisecond precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    /// 0..24
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub millisecond: u16,
}

impl ClockTime {
    pub fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> Self {
        Self {
            hour,
            minute,
            second,
            millisecond,
        }
    }

    /// Local time of day for a Unix timestamp in milliseconds.
    ///
    /// `utc_offset_minutes` shifts UTC to the local zone; negative offsets and
    /// offsets that cross midnight wrap into the previous or next day.
    pub fn from_unix_millis(unix_ms: u64, utc_offset_minutes: i32) -> Self {
        let local = unix_ms as i64 + utc_offset_minutes as i64 * MS_PER_MINUTE as i64;
        let day_ms = local.rem_euclid(MS_PER_DAY) as u64;

        Self {
            hour: (day_ms / MS_PER_HOUR) as u8,
            minute: ((day_ms % MS_PER_HOUR) / MS_PER_MINUTE) as u8,
            second: ((day_ms % MS_PER_MINUTE) / MS_PER_SECOND) as u8,
            millisecond: (day_ms % MS_PER_SECOND) as u16,
        }
    }
}

/// Hand angles in degrees, clockwise from 12 o'clock.
///
/// Each hand carries the fraction of the smaller units, so the hour hand
/// creeps between hours instead of jumping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    pub fn from_time(time: ClockTime) -> Self {
        let second = time.second as f32 + time.millisecond as f32 / 1000.0;
        let minute = time.minute as f32 + second / 60.0;
        let hour = (time.hour % 12) as f32 + minute / 60.0;

        Self {
            hour: hour / 12.0 * 360.0,
            minute: minute / 60.0 * 360.0,
            second: second / 60.0 * 360.0,
        }
    }
}
