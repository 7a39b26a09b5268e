//! # nereus-calendar
//!
//! Gregorian calendar helpers for evenly spaced metocean series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["timestamps"] -->|"month_labels()"| B["months (1..=12)"]
//!     A -->|"year_labels()"| C["years"]
//!     A -->|"infer_timestep_hours()"| D["timestep (h)"]
//!     E["start, n, step"] -->|"regular_sequence()"| A
//!     F["u8"] -->|"Month::new()"| G["Month"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use nereus_calendar::{Month, infer_timestep_hours, month_labels, regular_sequence};
//!
//! let ts = regular_sequence(start, 24 * 365, 1.0)?;
//! assert_eq!(infer_timestep_hours(&ts)?, 1.0);
//! let months = month_labels(&ts);
//! let june = Month::new(6)?;
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month newtype with validation |
//! | `labels` | Per-sample month and year labels |
//! | `spacing` | Timestep inference and monotonicity checks |
//! | `sequence` | Regular timestamp sequence generation |
//! | `error` | Error types |

mod error;
mod labels;
mod month;
mod sequence;
mod spacing;

pub use error::CalendarError;
pub use labels::{month_labels, year_labels};
pub use month::Month;
pub use sequence::regular_sequence;
pub use spacing::{check_strictly_increasing, infer_timestep_hours};
