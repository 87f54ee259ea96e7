//! Leptos Countdown Utilities
//!
//! Calendar decomposition of the time remaining until a fixed instant,
//! plus a hook that refreshes it once per second while its owner is alive.

mod clock;

pub use clock::{BrowserClock, Clock};

use gloo_timers::callback::Interval;
use leptos::prelude::*;

pub const MS_PER_SECOND: i64 = 1_000;
pub const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
pub const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Refresh cadence of [`use_countdown`] in milliseconds
pub const TICK_MS: u32 = 1_000;

/// One component of a [`TimeLeft`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Unit {
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// Largest unit first
    pub const ALL: [Unit; 4] = [Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds];
}

/// Remaining time split into calendar fields.
///
/// Never negative: a target that has already passed decomposes to all zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    /// Decompose a remaining duration given in milliseconds
    pub fn from_remaining_ms(ms: i64) -> Self {
        if ms <= 0 {
            return Self::default();
        }
        // ms > 0 here, so every quotient and remainder is non-negative
        Self {
            days: (ms / MS_PER_DAY) as u64,
            hours: ((ms % MS_PER_DAY) / MS_PER_HOUR) as u64,
            minutes: ((ms % MS_PER_HOUR) / MS_PER_MINUTE) as u64,
            seconds: ((ms % MS_PER_MINUTE) / MS_PER_SECOND) as u64,
        }
    }

    /// Time left from `now_ms` until `target_ms` (both epoch milliseconds)
    pub fn between(target_ms: i64, now_ms: i64) -> Self {
        Self::from_remaining_ms(target_ms.saturating_sub(now_ms))
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Whole seconds represented by all four fields
    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn value(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    /// Fields in display order, largest unit first
    pub fn fields(&self) -> [(Unit, u64); 4] {
        Unit::ALL.map(|unit| (unit, self.value(unit)))
    }
}

/// Zero-pad a field to at least two digits
pub fn pad2(value: u64) -> String {
    format!("{:02}", value)
}

/// Whether a countdown starting at `initial` needs a ticker at all
pub fn should_arm(initial: TimeLeft, target_ms: Option<i64>) -> bool {
    target_ms.is_some() && !initial.is_zero()
}

/// State after one tick, or `None` when the tick changes nothing
pub fn next_tick(current: TimeLeft, target_ms: i64, now_ms: i64) -> Option<TimeLeft> {
    let next = TimeLeft::between(target_ms, now_ms);
    (next != current).then_some(next)
}

/// Park `value` under the current owner and drop it when the owner is cleaned up.
///
/// `on_release` runs once, right after the value is dropped.
fn release_on_cleanup<T: 'static>(value: T, on_release: fn()) -> StoredValue<Option<T>, LocalStorage> {
    let slot = StoredValue::new_local(Some(value));
    on_cleanup(move || {
        if let Some(value) = slot.try_update_value(Option::take).flatten() {
            drop(value);
            on_release();
        }
    });
    slot
}

/// Reactive countdown towards `target_ms`.
///
/// The value is computed once immediately and then every [`TICK_MS`]. The
/// ticker belongs to the current reactive owner and is cancelled when that
/// owner is cleaned up. No ticker is started for a missing target or one
/// that has already passed.
pub fn use_countdown<C>(target_ms: Option<i64>, clock: C) -> ReadSignal<TimeLeft>
where
    C: Clock + 'static,
{
    let initial = target_ms
        .map(|target| TimeLeft::between(target, clock.now_ms()))
        .unwrap_or_default();
    let (time_left, set_time_left) = signal(initial);

    let Some(target) = target_ms.filter(|_| should_arm(initial, target_ms)) else {
        return time_left;
    };

    let interval = Interval::new(TICK_MS, move || {
        let Some(next) = next_tick(time_left.get_untracked(), target, clock.now_ms()) else {
            return;
        };
        set_time_left.set(next);
        if next.is_zero() {
            web_sys::console::log_1(&"[COUNTDOWN] Target reached".into());
        }
    });
    web_sys::console::log_1(&format!("[COUNTDOWN] Ticker started, every {}ms", TICK_MS).into());

    // Interval is !Send, so it lives in local arena storage; dropping it clears the JS timer
    release_on_cleanup(interval, || {
        web_sys::console::log_1(&"[COUNTDOWN] Ticker released".into());
    });

    time_left
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_one_of_each_unit() {
        // 1 day + 1 hour + 1 minute + 1 second + 1 ms
        let left = TimeLeft::from_remaining_ms(90_061_001);
        assert_eq!(left, TimeLeft { days: 1, hours: 1, minutes: 1, seconds: 1 });
    }

    #[test]
    fn test_zero_and_past_clamp() {
        assert!(TimeLeft::from_remaining_ms(0).is_zero());
        assert!(TimeLeft::from_remaining_ms(-5_000).is_zero());
        assert!(TimeLeft::between(1_000, 6_000).is_zero());
        assert!(TimeLeft::between(i64::MIN, i64::MAX).is_zero());
    }

    #[test]
    fn test_sub_second_remainder_truncates() {
        assert!(TimeLeft::from_remaining_ms(999).is_zero());
        assert_eq!(TimeLeft::from_remaining_ms(1_000).seconds, 1);
    }

    #[test]
    fn test_fields_within_bounds_and_sum_matches() {
        let target = 1_742_000_000_000_i64;
        for offset in [1_i64, 59_999, 3_599_999, 86_399_999, 86_400_000, 1_234_567_890, 40 * MS_PER_DAY + 7] {
            let now = target - offset;
            let left = TimeLeft::between(target, now);
            assert!(left.hours < 24);
            assert!(left.minutes < 60);
            assert!(left.seconds < 60);
            assert_eq!(left.total_seconds() as i64, offset / MS_PER_SECOND);
        }
    }

    #[test]
    fn test_between_is_pure() {
        let a = TimeLeft::between(10 * MS_PER_DAY, 3 * MS_PER_HOUR + 17);
        let b = TimeLeft::between(10 * MS_PER_DAY, 3 * MS_PER_HOUR + 17);
        assert_eq!(a, b);
    }

    #[test]
    fn test_fields_order() {
        let left = TimeLeft { days: 4, hours: 3, minutes: 2, seconds: 1 };
        let units: Vec<Unit> = left.fields().iter().map(|(unit, _)| *unit).collect();
        assert_eq!(units, vec![Unit::Days, Unit::Hours, Unit::Minutes, Unit::Seconds]);
        assert_eq!(left.fields()[0].1, 4);
        assert_eq!(left.fields()[3].1, 1);
        assert_eq!(left.value(Unit::Minutes), 2);
    }

    #[test]
    fn test_pad2() {
        assert_eq!(pad2(0), "00");
        assert_eq!(pad2(7), "07");
        assert_eq!(pad2(42), "42");
        assert_eq!(pad2(120), "120");
    }

    #[test]
    fn test_arms_only_for_future_target() {
        let target = 10 * MS_PER_MINUTE;
        assert!(should_arm(TimeLeft::between(target, 0), Some(target)));
        assert!(!should_arm(TimeLeft::between(target, target + 1), Some(target)));
        assert!(!should_arm(TimeLeft::between(target, target), Some(target)));
        assert!(!should_arm(TimeLeft::default(), None));
    }

    #[test]
    fn test_unchanged_tick_is_skipped() {
        let target = MS_PER_HOUR;
        let current = TimeLeft::between(target, 400);
        // still inside the same whole second
        assert_eq!(next_tick(current, target, 900), None);
        let parked = TimeLeft::default();
        assert_eq!(next_tick(parked, target, target + 5_000), None);
    }

    #[test]
    fn test_changed_tick_yields_next_state() {
        let target = MS_PER_HOUR;
        let current = TimeLeft::between(target, 0);
        let next = next_tick(current, target, MS_PER_SECOND).unwrap();
        assert_eq!(next, TimeLeft { days: 0, hours: 0, minutes: 59, seconds: 59 });
        let reached = next_tick(TimeLeft { seconds: 1, ..TimeLeft::default() }, target, target).unwrap();
        assert!(reached.is_zero());
    }

    struct DropFlag(Rc<Cell<bool>>);

    impl Drop for DropFlag {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    static RELEASES: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn test_owner_cleanup_releases_value() {
        let dropped = Rc::new(Cell::new(false));
        let owner = Owner::new();
        let slot = owner.with(|| {
            release_on_cleanup(DropFlag(dropped.clone()), || {
                RELEASES.fetch_add(1, Ordering::SeqCst);
            })
        });
        assert!(!dropped.get());
        assert_eq!(slot.try_with_value(|held| held.is_some()), Some(true));

        owner.cleanup();
        assert!(dropped.get());
        assert_eq!(RELEASES.load(Ordering::SeqCst), 1);
        assert!(slot.try_with_value(|held| held.is_none()).unwrap_or(true));
    }
}
