#![doc = include_str!("../README.md")]

pub mod error;
pub mod keys;
mod value;

mod dates;
mod location;
mod summary;
mod timezone;

pub use error::Error;
pub use geotempo_common as common;
pub use summary::Summary;
pub use timezone::TimezoneResolver;
pub use value::{Record, Value};

/// Typed view over the date and location fields of an image metadata record.
///
/// Owns the record for its lifetime and mutates it in place. Reads return
/// `None` for anything missing or malformed. Not safe for concurrent
/// mutation without external synchronization.
pub struct Metadata {
    root: Record,
    timezone_resolver: Option<Box<dyn TimezoneResolver>>,
}

impl std::fmt::Debug for Metadata {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metadata")
            .field("root", &self.root)
            .field("timezone_resolver", &self.timezone_resolver.is_some())
            .finish()
    }
}

impl Metadata {
    /// Create a view over a loosely typed metadata value.
    ///
    /// Fails if `root` is not a record. Use this for metadata coming from an
    /// untrusted deserialization path.
    pub fn new(
        root: Value,
        timezone_resolver: Option<Box<dyn TimezoneResolver>>,
    ) -> error::Result<Self> {
        match root {
            Value::Record(root) => Ok(Self::from_record(root, timezone_resolver)),
            _ => Err(Error::RootNotRecord),
        }
    }

    /// Create a view over a metadata record.
    pub fn from_record(root: Record, timezone_resolver: Option<Box<dyn TimezoneResolver>>) -> Self {
        Self {
            root,
            timezone_resolver,
        }
    }

    /// The raw record, for fields outside this model's coverage.
    pub fn raw(&self) -> &Record {
        &self.root
    }

    /// Mutable access to the raw record.
    pub fn raw_mut(&mut self) -> &mut Record {
        &mut self.root
    }

    /// Consume the view and return the record.
    pub fn into_raw(self) -> Record {
        self.root
    }

    /// A named sub-record (`tiff`, `exif`, `gps`), if present.
    ///
    /// A slot holding something other than a record counts as absent.
    pub fn subrecord(&self, name: &str) -> Option<&Record> {
        self.root.get(name)?.as_record()
    }

    pub fn subrecord_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.root.get_mut(name)?.as_record_mut()
    }

    /// A named sub-record, created empty and attached to the root if
    /// missing. A present value that is not a record is replaced.
    pub fn subrecord_mut_or_create(&mut self, name: &str) -> &mut Record {
        let slot = self
            .root
            .entry(name.to_string())
            .or_insert_with(|| Value::Record(Record::new()));

        if slot.as_record().is_none() {
            tracing::debug!("Replacing non-record value under '{name}' with an empty record");
            *slot = Value::Record(Record::new());
        }

        match slot {
            Value::Record(record) => record,
            // just ensured above
            _ => unreachable!(),
        }
    }

    pub(crate) fn field(&self, subrecord: &str, key: &str) -> Option<&Value> {
        self.subrecord(subrecord)?.get(key)
    }

    pub(crate) fn set_field(&mut self, subrecord: &str, key: &str, value: Value) {
        self.subrecord_mut_or_create(subrecord)
            .insert(key.to_string(), value);
    }

    pub(crate) fn remove_field(&mut self, subrecord: &str, key: &str) {
        if let Some(record) = self.subrecord_mut(subrecord) {
            record.remove(key);
        }
    }

    pub(crate) fn timezone_resolver(&self) -> Option<&dyn TimezoneResolver> {
        self.timezone_resolver.as_deref()
    }
}
