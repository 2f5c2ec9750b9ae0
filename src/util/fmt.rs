use std::fmt::{self, Debug, Formatter};

/// Writes a preformatted string as-is when used with `{:?}`, avoiding the quotes that the
/// [`Debug`] implementation for [`String`] would add.
#[cfg(feature = "hash")]
pub struct DebugRaw(pub String);

#[cfg(feature = "hash")]
impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats a borrowed iterator as a [`Debug`] list without consuming it, so that it can be
/// embedded as a field with [`Formatter::debug_struct`].
pub struct DebugEntries<I>(pub I);

impl<I> Debug for DebugEntries<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.clone()).finish()
    }
}
