//! # Opening Hours
//!
//! The "is the kitchen open?" rule, as a pure function of the hour of day.
//! Reading the clock is the caller's job.
//!
//! ## Window Semantics
//! ```text
//!   open_hour = 18, close_hour = 23  (default)
//!
//!   hour:  0 ... 17 │ 18  19  20  21  22  23 │
//!          closed   │ ◄────── open ────────► │   (both ends inclusive)
//!
//!   open_hour = 18, close_hour = 2   (crosses midnight)
//!
//!   hour:  0  1  2 │ 3 ... 17 │ 18 ... 23
//!          open    │ closed   │ open
//! ```

use chrono::Timelike;
use serde::Serialize;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_hour;

/// Default first open hour.
pub const DEFAULT_OPEN_HOUR: u32 = 18;

/// Default last open hour (inclusive).
pub const DEFAULT_CLOSE_HOUR: u32 = 23;

/// Daily opening window, in whole hours, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OpeningHours {
    open_hour: u32,
    close_hour: u32,
}

impl OpeningHours {
    /// Creates an opening window.
    ///
    /// ```rust
    /// use pedido_core::OpeningHours;
    ///
    /// assert!(OpeningHours::new(11, 15).is_ok());
    /// assert!(OpeningHours::new(18, 24).is_err());
    /// ```
    pub fn new(open_hour: u32, close_hour: u32) -> CoreResult<Self> {
        if validate_hour("open_hour", open_hour).is_err()
            || validate_hour("close_hour", close_hour).is_err()
        {
            return Err(CoreError::InvalidHours {
                open: open_hour,
                close: close_hour,
            });
        }

        Ok(OpeningHours {
            open_hour,
            close_hour,
        })
    }

    pub fn open_hour(&self) -> u32 {
        self.open_hour
    }

    pub fn close_hour(&self) -> u32 {
        self.close_hour
    }

    /// Returns true if the restaurant takes orders during `hour`.
    ///
    /// ```rust
    /// use pedido_core::OpeningHours;
    ///
    /// let hours = OpeningHours::default();
    /// assert!(!hours.is_open_at_hour(17));
    /// assert!(hours.is_open_at_hour(18));
    /// assert!(hours.is_open_at_hour(23));
    /// ```
    pub fn is_open_at_hour(&self, hour: u32) -> bool {
        if self.open_hour <= self.close_hour {
            (self.open_hour..=self.close_hour).contains(&hour)
        } else {
            hour >= self.open_hour || hour <= self.close_hour
        }
    }

    /// Same as [`is_open_at_hour`](Self::is_open_at_hour) for any chrono
    /// time value.
    pub fn is_open_at<T: Timelike>(&self, time: &T) -> bool {
        self.is_open_at_hour(time.hour())
    }
}

impl Default for OpeningHours {
    /// 18h to 23h.
    fn default() -> Self {
        OpeningHours {
            open_hour: DEFAULT_OPEN_HOUR,
            close_hour: DEFAULT_CLOSE_HOUR,
        }
    }
}
