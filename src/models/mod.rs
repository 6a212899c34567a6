//! Dock-scheduling domain models.
//!
//! Provides the data types the timeline core reads. None of them carry
//! derived layout state; layout results are returned as side tables.
//!
//! # Domain Mappings
//!
//! | dock-timeline | Warehouse | Clinic | Meeting rooms |
//! |---------------|-----------|--------|---------------|
//! | Appointment | Truck slot | Visit | Booking |
//! | Dock | Loading dock | Exam room | Room |
//! | AvailabilityWindow | Receiving hours | Clinic hours | Bookable hours |
//! | OperatingHours | Site hours | Building hours | Office hours |

mod appointment;
mod calendar;
mod dock;
mod span;

pub use appointment::{Appointment, AppointmentDetails, AppointmentStatus};
pub use calendar::{
    day_name, format_clock_time, parse_clock_time, parse_day_name, AvailabilityWindow,
    MinuteRange, OperatingHours, WeeklyAvailability, MINUTES_PER_DAY,
};
pub use dock::{Dock, Maintenance, MaintenanceOrigin};
pub use span::Scheduled;
