mod arithmetic;

/// A type alias we use for tests.
///
/// Most of these tests chain several fallible operations, and the `?` mark
/// keeps them readable.
type Result = std::result::Result<(), dura::Error>;
