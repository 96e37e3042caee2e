//! Sky area (solid angle) of longitude/latitude rectangles on the celestial sphere.
//!
//! ```
//! use skyarea::{SkyAreaRequest, sky_area};
//!
//! let request = SkyAreaRequest::new(["08:36:00", "09:24:00"], ["-02:00:00", "03:00:00"])
//!     .with_units("sex", "sr")
//!     .unwrap();
//! let result = sky_area(&request).unwrap();
//! assert!(result.area > 0.018 && result.area < 0.0183);
//! ```

pub mod angle;
pub mod area;
pub mod error;
pub mod units;

pub use angle::{
    DEFAULT_SEPARATOR, sexagesimal_degrees_to_degrees, sexagesimal_hours_to_degrees,
};
pub use area::{
    Axis, Bound, DegreeBounds, FULL_SKY_DEG2, SkyArea, SkyAreaRequest, area_fraction, sky_area,
};
pub use error::{ErrorKind, SkyAreaError};
pub use units::{InputUnit, OutputUnit};
