//! Date accessors over the TIFF, Exif, and GPS sub-records.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use geotempo_common::datetime;

use crate::{keys, Metadata, Value};

/// Fan-out targets of [`Metadata::set_date`], in date list source order.
const DATE_FIELDS: [(&str, &str); 3] = [
    (keys::TIFF, keys::DATE_TIME),
    (keys::EXIF, keys::DATE_TIME_ORIGINAL),
    (keys::EXIF, keys::DATE_TIME_DIGITIZED),
];

impl Metadata {
    /// All dates discoverable in the record, in fixed source order:
    /// `tiff.DateTime`, `exif.DateTimeOriginal`, `exif.DateTimeDigitized`,
    /// then the GPS date. Absent and unparsable sources are skipped. The
    /// sequence is recomputed on every call, nothing is cached.
    ///
    /// The GPS date is a UTC instant; it contributes its UTC wall-clock
    /// value so it compares on the same scale as the timezone-naive fields.
    pub fn dates(&self) -> impl Iterator<Item = NaiveDateTime> + '_ {
        DATE_FIELDS
            .into_iter()
            .map(|(subrecord, key)| self.parsed_date(subrecord, key))
            .chain(std::iter::once_with(|| {
                self.gps_date().map(|date| date.naive_utc())
            }))
            .flatten()
    }

    /// The chronologically most recent entry of [`Self::dates`].
    ///
    /// When two sources parse to the identical instant, the one earlier in
    /// source order wins.
    pub fn best_date(&self) -> Option<NaiveDateTime> {
        self.dates()
            .reduce(|best, date| if date > best { date } else { best })
    }

    /// Write `date` to `tiff.DateTime`, `exif.DateTimeOriginal`, and
    /// `exif.DateTimeDigitized`, creating those sub-records as needed. GPS
    /// fields are never touched.
    ///
    /// If the record has a coordinate and a timezone resolver is attached,
    /// the instant is written as wall-clock time in the coordinate's
    /// timezone. Otherwise, including when the lookup fails, the system
    /// timezone is used. `None` removes all three fields.
    pub fn set_date(&mut self, date: Option<DateTime<Utc>>) {
        let Some(date) = date else {
            for (subrecord, key) in DATE_FIELDS {
                self.remove_field(subrecord, key);
            }
            return;
        };

        let local = match self.coordinate_timezone() {
            Some(offset) => date.with_timezone(&offset).naive_local(),
            None => date.with_timezone(&Local).naive_local(),
        };

        let text = datetime::format_date_time(local);
        for (subrecord, key) in DATE_FIELDS {
            self.set_field(subrecord, key, Value::Text(text.clone()));
        }
    }

    /// The GPS date and time, a UTC instant assembled from `gps.DateStamp`
    /// and `gps.TimeStamp`.
    pub fn gps_date(&self) -> Option<DateTime<Utc>> {
        let date = datetime::parse_date_stamp(self.field(keys::GPS, keys::DATE_STAMP)?.as_text()?)?;
        let time = datetime::time_from_triple(self.field(keys::GPS, keys::TIME_STAMP)?.as_triple()?)?;

        Some(Utc.from_utc_datetime(&date.and_time(time)))
    }

    /// Write the GPS date and time stamp pair.
    ///
    /// Requires an existing GPS sub-record; without one the call is a no-op.
    /// Both halves are always written, or removed, together.
    pub fn set_gps_date(&mut self, date: Option<DateTime<Utc>>) {
        let Some(gps) = self.subrecord_mut(keys::GPS) else {
            tracing::debug!("No GPS sub-record, not writing GPS date");
            return;
        };

        match date {
            Some(date) => {
                gps.insert(
                    keys::DATE_STAMP.to_string(),
                    Value::Text(datetime::format_date_stamp(date.date_naive())),
                );
                gps.insert(
                    keys::TIME_STAMP.to_string(),
                    Value::triple(datetime::time_to_triple(date.time())),
                );
            }
            None => {
                gps.remove(keys::DATE_STAMP);
                gps.remove(keys::TIME_STAMP);
            }
        }
    }

    fn parsed_date(&self, subrecord: &str, key: &str) -> Option<NaiveDateTime> {
        let text = self.field(subrecord, key)?.as_text()?;

        let parsed = datetime::parse_date_time(text);
        if parsed.is_none() {
            tracing::debug!("Unparsable date in '{subrecord}.{key}': {text:?}");
        }
        parsed
    }
}
