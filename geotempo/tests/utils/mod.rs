#![allow(dead_code)]

use geotempo::{Record, Value};

pub fn root_with(subrecords: &[(&str, Record)]) -> Record {
    let mut root = Record::new();
    for (name, subrecord) in subrecords {
        root.insert((*name).to_string(), Value::Record(subrecord.clone()));
    }
    root
}

pub fn fields(entries: &[(&str, Value)]) -> Record {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

/// GPS sub-record pointing at San Francisco (37.7749, -122.4194).
pub fn san_francisco_gps() -> Record {
    fields(&[
        ("Latitude", Value::triple((37., 46., 29.64))),
        ("LatitudeRef", Value::from("N")),
        ("Longitude", Value::triple((122., 25., 9.84))),
        ("LongitudeRef", Value::from("W")),
    ])
}

pub fn text_field<'a>(record: &'a Record, subrecord: &str, key: &str) -> Option<&'a str> {
    record.get(subrecord)?.as_record()?.get(key)?.as_text()
}
