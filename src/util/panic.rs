/// Asserts that the provided block panics. The block is run inside [`catch_unwind`], so anything it
/// captures must be unwind safe; build the collection inside the block when in doubt.
///
/// [`catch_unwind`]: std::panic::catch_unwind
#[allow(unused_macros)]
macro_rules! assert_panics {
    ($run:block) => {
        assert_panics!($run, "block was expected to panic")
    };
    ($run:block, $msg:literal) => {
        let outcome = std::panic::catch_unwind(|| $run);
        assert!(outcome.is_err(), $msg);
    };
}

#[allow(unused_imports)]
pub(crate) use assert_panics;
