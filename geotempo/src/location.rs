//! Location accessors over the GPS sub-record.

use chrono::FixedOffset;
use geotempo_common::geography::{GeoPosition, LatRef, Location, LonRef};

use crate::{keys, Metadata, Value};

const MPS_TO_KMH: f64 = 3.6;

impl Metadata {
    /// The GPS coordinate, decoded from the degree/minute/second triples and
    /// hemisphere references into signed decimal degrees.
    ///
    /// `None` if the GPS sub-record or any required field is missing, or a
    /// component is out of range.
    pub fn coordinate(&self) -> Option<Location> {
        let gps = self.subrecord(keys::GPS)?;

        let lat_ref = LatRef::try_from(gps.get(keys::LATITUDE_REF)?.as_text()?).ok()?;
        let lon_ref = LonRef::try_from(gps.get(keys::LONGITUDE_REF)?.as_text()?).ok()?;
        let lat = gps.get(keys::LATITUDE)?.as_triple()?;
        let lon = gps.get(keys::LONGITUDE)?.as_triple()?;

        let location = Location::from_ref_deg_min_sec(lat_ref, lat, lon_ref, lon);
        if location.is_none() {
            tracing::debug!("GPS coordinate components out of range: {lat:?} {lon:?}");
        }
        location
    }

    /// Write the GPS coordinate, creating the GPS sub-record if missing.
    ///
    /// Hemisphere references are derived from the signs; zero maps to `N`
    /// and `E`.
    pub fn set_coordinate(&mut self, location: Location) {
        let (lat_ref, lat) = location.lat_ref_deg_min_sec();
        let (lon_ref, lon) = location.lon_ref_deg_min_sec();

        let gps = self.subrecord_mut_or_create(keys::GPS);
        gps.insert(keys::LATITUDE.to_string(), Value::triple(lat));
        gps.insert(keys::LATITUDE_REF.to_string(), Value::Text(lat_ref.to_string()));
        gps.insert(keys::LONGITUDE.to_string(), Value::triple(lon));
        gps.insert(keys::LONGITUDE_REF.to_string(), Value::Text(lon_ref.to_string()));
    }

    /// [`Self::coordinate`] lifted into a [`GeoPosition`]. Altitude, speed,
    /// and bearing are never decoded.
    pub fn location(&self) -> Option<GeoPosition> {
        self.coordinate().map(GeoPosition::new)
    }

    /// Write a position without its motion fields.
    pub fn set_location(&mut self, position: Option<GeoPosition>) {
        self.set_location_with_assumptions(position, false);
    }

    /// Write a position into the GPS sub-record.
    ///
    /// The coordinate is always written. With `assumptions`, altitude,
    /// ground speed, and bearing are written as well, and the bearing is
    /// recorded as relative to magnetic north. [`GeoPosition`] does not say
    /// which north its bearing uses, so the caller must guarantee that by
    /// opting in; nothing here verifies it.
    ///
    /// `None` removes the coordinate and motion fields; the sub-record
    /// itself stays.
    pub fn set_location_with_assumptions(
        &mut self,
        position: Option<GeoPosition>,
        assumptions: bool,
    ) {
        let Some(position) = position else {
            if let Some(gps) = self.subrecord_mut(keys::GPS) {
                for key in [
                    keys::LATITUDE,
                    keys::LATITUDE_REF,
                    keys::LONGITUDE,
                    keys::LONGITUDE_REF,
                    keys::ALTITUDE,
                    keys::ALTITUDE_REF,
                    keys::SPEED,
                    keys::SPEED_REF,
                    keys::IMG_DIRECTION,
                    keys::IMG_DIRECTION_REF,
                ] {
                    gps.remove(key);
                }
            }
            return;
        };

        self.set_coordinate(position.location);

        if !assumptions {
            return;
        }

        let gps = self.subrecord_mut_or_create(keys::GPS);
        if let Some(altitude) = position.altitude {
            gps.insert(keys::ALTITUDE.to_string(), Value::Number(altitude.abs()));
            let below_sea_level = if altitude < 0. { 1. } else { 0. };
            gps.insert(keys::ALTITUDE_REF.to_string(), Value::Number(below_sea_level));
        }
        if let Some(speed) = position.speed {
            gps.insert(keys::SPEED.to_string(), Value::Number(speed * MPS_TO_KMH));
            gps.insert(keys::SPEED_REF.to_string(), Value::Text("K".to_string()));
        }
        if let Some(bearing) = position.bearing {
            gps.insert(keys::IMG_DIRECTION.to_string(), Value::Number(bearing));
            gps.insert(keys::IMG_DIRECTION_REF.to_string(), Value::Text("M".to_string()));
        }
    }

    /// The timezone at the record's coordinate, via the attached resolver.
    ///
    /// `None` if there is no coordinate, no resolver, or the lookup fails.
    pub fn coordinate_timezone(&self) -> Option<FixedOffset> {
        let resolver = self.timezone_resolver()?;
        let location = self.coordinate()?;

        let timezone = resolver.timezone(location.lat.0, location.lon.0);
        if timezone.is_none() {
            tracing::debug!("Timezone lookup failed for {}", location.geo_uri());
        }
        timezone
    }
}
