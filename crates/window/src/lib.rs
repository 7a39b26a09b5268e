//! Operability weather-window detection and waiting-time statistics.
//!
//! Given one to three environmental series (e.g. significant wave height,
//! wind speed), their thresholds and an operation duration, this crate
//! finds every sample at which an uninterrupted operable window starts and
//! summarises how long an operator starting at any sample has to wait.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────┐   ┌──────────┐   ┌───────────┐   ┌────────────┐   ┌───────────┐
//!  │  series  │──▶│   mask   │──▶│   hits    │──▶│  waiting   │──▶│  summary  │
//!  │ + thresh │   │ (AND <)  │   │ (run len) │   │ (countdown)│   │ (months)  │
//!  └──────────┘   └──────────┘   └───────────┘   └────────────┘   └───────────┘
//! ```
//!
//! Every stage is a pure function of its inputs.
//!
//! # Quick start
//!
//! ```rust
//! use nereus_window::{WindowConfig, weather_window_length};
//!
//! let hs = [1.0, 1.0, 1.0, 1.0, 1.0, 3.0, 3.0, 1.0, 1.0, 1.0];
//! let months = [1u8; 10];
//! let config = WindowConfig::new(3.0, 1.0);
//!
//! let stats = weather_window_length(&hs, &months, 2.0, &config).unwrap();
//! assert!(stats.p10 <= stats.p50 && stats.p50 <= stats.p90);
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod hours;
pub mod mask;
pub mod runs;
pub mod summary;
pub mod waiting;

pub use analysis::{
    MonthlyRow, WindowAnalysis, weather_window_length, weather_window_length_multi,
};
pub use config::{MonthFilter, WindowConfig};
pub use error::WindowError;
pub use hours::{OperableHours, operable_hours_per_year};
pub use mask::{MAX_CONDITIONS, condition_mask};
pub use runs::{detect_hits, window_length};
pub use summary::{
    MULTI_VARIABLE_STATS, SINGLE_VARIABLE_STATS, Statistic, Summary, WaitingStats,
    WaitingStatsExtended, summarize,
};
pub use waiting::{HOURS_PER_DAY, cycle_times, waiting_times};
