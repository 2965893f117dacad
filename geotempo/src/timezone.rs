use chrono::FixedOffset;

/// Capability to map a geographic coordinate to its timezone.
///
/// Supplied by the caller at construction; [`crate::Metadata`] never builds
/// one itself. The lookup is treated as a synchronous external call that may
/// be slow or fail — retrying, caching, and timeouts are the resolver's
/// business. A failed lookup is signalled by returning `None` and degrades
/// the caller to timezone-naive behavior.
pub trait TimezoneResolver {
    /// The UTC offset in effect at the given coordinate, or `None` if the
    /// lookup fails.
    fn timezone(&self, latitude: f64, longitude: f64) -> Option<FixedOffset>;
}

impl<F> TimezoneResolver for F
where
    F: Fn(f64, f64) -> Option<FixedOffset>,
{
    fn timezone(&self, latitude: f64, longitude: f64) -> Option<FixedOffset> {
        self(latitude, longitude)
    }
}
