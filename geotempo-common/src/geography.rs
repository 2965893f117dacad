//! Coordinates in decimal degrees and in the degree/minute/second form used
//! by GPS metadata.

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub lat: Coord,
    pub lon: Coord,
}

impl Location {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat: Coord(lat),
            lon: Coord(lon),
        }
    }

    /// Build a location from hemisphere references and degree/minute/second
    /// triples, as stored in GPS metadata.
    ///
    /// Returns `None` if any component falls outside its conventional range
    /// (see [`Coord::from_deg_min_sec`]).
    ///
    /// ```
    /// # use geotempo_common::geography::*;
    /// let loc = Location::from_ref_deg_min_sec(
    ///     LatRef::North,
    ///     (37., 46., 29.64),
    ///     LonRef::West,
    ///     (122., 25., 9.84),
    /// )
    /// .unwrap();
    /// assert!((loc.lat.0 - 37.7749).abs() < 1e-4);
    /// assert!((loc.lon.0 + 122.4194).abs() < 1e-4);
    /// ```
    pub fn from_ref_deg_min_sec(
        lat_ref: LatRef,
        lat: (f64, f64, f64),
        lon_ref: LonRef,
        lon: (f64, f64, f64),
    ) -> Option<Self> {
        let lat = Coord::from_sign_deg_min_sec(lat_ref.as_sign(), lat)?;
        let lon = Coord::from_sign_deg_min_sec(lon_ref.as_sign(), lon)?;

        Some(Self { lat, lon })
    }

    pub fn lat_ref_deg_min_sec(&self) -> (LatRef, (f64, f64, f64)) {
        (LatRef::from_sign(self.lat.0), self.lat.as_deg_min_sec())
    }

    pub fn lon_ref_deg_min_sec(&self) -> (LonRef, (f64, f64, f64)) {
        (LonRef::from_sign(self.lon.0), self.lon.as_deg_min_sec())
    }

    /// Location as `geo:` URI
    ///
    /// The precision of the coordinates is limited to six decimal places,
    /// which is more than a meter of accuracy.
    pub fn geo_uri(&self) -> String {
        format!("geo:{:.6},{:.6}", self.lat.0, self.lon.0)
    }
}

/// A single coordinate axis in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord(pub f64);

impl Coord {
    /// Decompose the absolute value into degrees, minutes, and seconds.
    ///
    /// Degrees and minutes are whole numbers; the fractional remainder ends
    /// up in the seconds, unrounded.
    ///
    /// ```
    /// # use geotempo_common::geography::*;
    /// let (deg, min, sec) = Coord(-46.235).as_deg_min_sec();
    /// assert_eq!((deg, min), (46., 14.));
    /// assert!((sec - 6.).abs() < 1e-6);
    /// ```
    pub fn as_deg_min_sec(&self) -> (f64, f64, f64) {
        let abs = self.0.abs();
        let deg = abs.trunc();
        let min = ((abs - deg) * 60.).trunc();
        let sec = (abs - deg - min / 60.) * 3600.;

        (deg, min, sec)
    }

    /// Compose a non-negative coordinate from a degree/minute/second triple.
    ///
    /// Returns `None` when a component is outside its conventional range
    /// (degrees 0–360, minutes and seconds 0–60) or not finite. Malformed
    /// metadata is surfaced as absence, never as an error.
    pub fn from_deg_min_sec((deg, min, sec): (f64, f64, f64)) -> Option<Self> {
        if !(0. ..360.).contains(&deg) || !(0. ..60.).contains(&min) || !(0. ..60.).contains(&sec) {
            return None;
        }

        Some(Self(deg + min / 60. + sec / 3600.))
    }

    /// ```
    /// # use geotempo_common::geography::*;
    /// let coord = Coord::from_sign_deg_min_sec(LatRef::South.as_sign(), (89., 24., 2.2)).unwrap();
    /// assert!((coord.0 + 89.40061).abs() < 1e-5);
    /// ```
    pub fn from_sign_deg_min_sec(sign: f64, deg_min_sec: (f64, f64, f64)) -> Option<Self> {
        Self::from_deg_min_sec(deg_min_sec).map(|coord| Self(sign * coord.0))
    }
}

/// Latitude hemisphere reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatRef {
    North,
    South,
}

impl LatRef {
    /// Zero maps to [`Self::North`].
    pub fn from_sign(sign: f64) -> Self {
        if sign >= 0. {
            Self::North
        } else {
            Self::South
        }
    }

    pub fn as_sign(&self) -> f64 {
        match self {
            Self::North => 1.,
            Self::South => -1.,
        }
    }
}

impl TryFrom<&str> for LatRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "N" | "n" => Ok(Self::North),
            "S" | "s" => Ok(Self::South),
            v => Err(InvalidRef::Latitude(v.to_string())),
        }
    }
}

impl std::fmt::Display for LatRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::North => f.write_str("N"),
            Self::South => f.write_str("S"),
        }
    }
}

/// Longitude hemisphere reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LonRef {
    East,
    West,
}

impl LonRef {
    /// Zero maps to [`Self::East`].
    pub fn from_sign(sign: f64) -> Self {
        if sign >= 0. {
            Self::East
        } else {
            Self::West
        }
    }

    pub fn as_sign(&self) -> f64 {
        match self {
            Self::East => 1.,
            Self::West => -1.,
        }
    }
}

impl TryFrom<&str> for LonRef {
    type Error = InvalidRef;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "E" | "e" => Ok(Self::East),
            "W" | "w" => Ok(Self::West),
            v => Err(InvalidRef::Longitude(v.to_string())),
        }
    }
}

impl std::fmt::Display for LonRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::East => f.write_str("E"),
            Self::West => f.write_str("W"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidRef {
    #[error("Invalid latitude reference '{0}'. Must be 'N' or 'S'.")]
    Latitude(String),
    #[error("Invalid longitude reference '{0}'. Must be 'E' or 'W'.")]
    Longitude(String),
}

/// A geographic fix as delivered by a positioning service.
///
/// The bearing is in degrees of movement direction. Whether it is measured
/// against true or magnetic north is not encoded here; consumers that need
/// to know must get that guarantee from whoever produced the fix.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPosition {
    pub location: Location,
    /// Meters relative to sea level, negative below.
    pub altitude: Option<f64>,
    /// Ground speed in meters per second.
    pub speed: Option<f64>,
    /// Movement direction in degrees, 0–360.
    pub bearing: Option<f64>,
}

impl GeoPosition {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            altitude: None,
            speed: None,
            bearing: None,
        }
    }
}

impl From<Location> for GeoPosition {
    fn from(location: Location) -> Self {
        Self::new(location)
    }
}
