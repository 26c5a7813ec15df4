//! Formats remaining times the way a clock face shows them: unpadded minutes
//! and two-digit seconds, such as `4:07`. Partial seconds are cut off rather
//! than rounded, so a clock never shows a second that has already started
//! running out.

use alloc::string::{String, ToString};
use core::fmt;

/// A [`Display`](fmt::Display) adaptor that shows milliseconds as
/// `minutes:seconds`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FormattedTime(pub u64);

impl fmt::Display for FormattedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minutes = self.0 / 60_000;
        let seconds = (self.0 % 60_000) / 1000;
        write!(f, "{}:{:02}", minutes, seconds)
    }
}

/// Formats milliseconds as `minutes:seconds`.
pub fn format_time(milliseconds: u64) -> String {
    FormattedTime(milliseconds).to_string()
}
