use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use geotempo_common::datetime;
use geotempo_common::geography::Location;

use crate::Metadata;

/// Reduced view of a metadata record: the best date and the coordinate.
///
/// Derived, never persisted; [`Metadata::summary`] recomputes it on every
/// call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub date: Option<NaiveDateTime>,
    pub location: Option<Location>,
}

impl Summary {
    /// Flat string mapping with at most a `date` and a `location` entry;
    /// absent parts are omitted.
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        let mut map = BTreeMap::new();
        if let Some(date) = self.date {
            map.insert("date", datetime::format_date_time(date));
        }
        if let Some(location) = self.location {
            map.insert("location", location.geo_uri());
        }
        map
    }
}

/// Stable rendering for logs and diffs, e.g.
/// `{date: 2021:06:15 08:00:00, location: geo:37.774900,-122.419400}`.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.to_map().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl Metadata {
    /// Compute the compact summary. Use [`Summary::to_map`] for the mapping
    /// form and the [`fmt::Display`] impl for the string form.
    pub fn summary(&self) -> Summary {
        Summary {
            date: self.best_date(),
            location: self.coordinate(),
        }
    }
}
