//! Names of the sub-records and their fields.

/// TIFF sub-record.
pub const TIFF: &str = "tiff";
/// Exif sub-record.
pub const EXIF: &str = "exif";
/// GPS sub-record.
pub const GPS: &str = "gps";

/// `tiff.DateTime`, local date/time string.
pub const DATE_TIME: &str = "DateTime";
/// `exif.DateTimeOriginal`, local date/time string.
pub const DATE_TIME_ORIGINAL: &str = "DateTimeOriginal";
/// `exif.DateTimeDigitized`, local date/time string.
pub const DATE_TIME_DIGITIZED: &str = "DateTimeDigitized";

/// `gps.Latitude`, degree/minute/second triple.
pub const LATITUDE: &str = "Latitude";
/// `gps.LatitudeRef`, `N` or `S`.
pub const LATITUDE_REF: &str = "LatitudeRef";
/// `gps.Longitude`, degree/minute/second triple.
pub const LONGITUDE: &str = "Longitude";
/// `gps.LongitudeRef`, `E` or `W`.
pub const LONGITUDE_REF: &str = "LongitudeRef";

/// `gps.DateStamp`, UTC date string.
pub const DATE_STAMP: &str = "DateStamp";
/// `gps.TimeStamp`, UTC hour/minute/second triple.
pub const TIME_STAMP: &str = "TimeStamp";

/// `gps.Altitude`, meters, magnitude only.
pub const ALTITUDE: &str = "Altitude";
/// `gps.AltitudeRef`, 0 above sea level, 1 below.
pub const ALTITUDE_REF: &str = "AltitudeRef";
/// `gps.Speed`, ground speed in the unit named by [`SPEED_REF`].
pub const SPEED: &str = "Speed";
/// `gps.SpeedRef`, `K` for km/h.
pub const SPEED_REF: &str = "SpeedRef";
/// `gps.ImgDirection`, degrees.
pub const IMG_DIRECTION: &str = "ImgDirection";
/// `gps.ImgDirectionRef`, `M` for magnetic north, `T` for true north.
pub const IMG_DIRECTION_REF: &str = "ImgDirectionRef";
