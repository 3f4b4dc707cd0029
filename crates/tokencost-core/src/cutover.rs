//! Date-based alias resolution primitives
//!
//! Providers repoint generic model aliases (for example `gpt-3.5-turbo`) at
//! newer dated snapshots over time. A [`Cutover`] records the day an alias
//! moved; an [`AliasChain`] lists every move of one alias, newest first.
//!
//! Comparisons are strict: a call made exactly at midnight UTC of the
//! cutover day still resolves to the older snapshot.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use tokencost_core::cutover::{AliasChain, Cutover};
//!
//! const CHAIN: AliasChain<&str> = AliasChain::new(
//!     &[(Cutover::new(2024, 10, 1), "v2")],
//!     "v1",
//! );
//!
//! let at_cutover = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 0).unwrap();
//! let just_after = Utc.with_ymd_and_hms(2024, 10, 1, 0, 0, 1).unwrap();
//! assert_eq!(CHAIN.resolve(at_cutover), "v1");
//! assert_eq!(CHAIN.resolve(just_after), "v2");
//! ```

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// Calendar day on which an alias switched snapshots, at midnight UTC
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cutover {
    year: i32,
    month: u32,
    day: u32,
}

impl Cutover {
    pub const fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Midnight UTC of the cutover day, `None` if the date does not exist
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, self.month, self.day, 0, 0, 0)
            .single()
    }

    /// Whether `at` is strictly after the cutover instant
    pub fn is_passed_at(&self, at: DateTime<Utc>) -> bool {
        self.instant().is_some_and(|threshold| at > threshold)
    }
}

impl fmt::Display for Cutover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// History of one alias
///
/// `steps` must be ordered newest cutover first; the first passed cutover
/// wins and `oldest` is used when none has passed.
#[derive(Debug, Clone, Copy)]
pub struct AliasChain<M: 'static> {
    steps: &'static [(Cutover, M)],
    oldest: M,
}

impl<M: 'static> AliasChain<M> {
    pub const fn new(steps: &'static [(Cutover, M)], oldest: M) -> Self {
        Self { steps, oldest }
    }
}

impl<M: Copy + 'static> AliasChain<M> {
    /// Snapshot the alias pointed at on `at`
    pub fn resolve(&self, at: DateTime<Utc>) -> M {
        self.steps
            .iter()
            .find(|(cutover, _)| cutover.is_passed_at(at))
            .map(|(_, model)| *model)
            .unwrap_or(self.oldest)
    }

    /// Cutover days, newest first
    pub fn cutovers(&self) -> impl Iterator<Item = Cutover> + '_ {
        self.steps.iter().map(|(cutover, _)| *cutover)
    }

    /// Every snapshot the alias can resolve to, newest first
    pub fn targets(&self) -> impl Iterator<Item = M> + '_ {
        self.steps
            .iter()
            .map(|(_, model)| *model)
            .chain(std::iter::once(self.oldest))
    }
}
