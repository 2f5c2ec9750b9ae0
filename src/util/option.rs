pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but documents at the call site that None has already
    /// been ruled out by a length or emptiness check. Reaching the None branch is a bug in this
    /// crate rather than a caller error, so no panics annotation is used.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("collection invariant violated"),
        }
    }
}
