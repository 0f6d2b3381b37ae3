/*!
Provides convenience routines for showing input characters in error messages.
*/

/// Provides a `Display` and `Debug` implementation for a single `char` found
/// in parser input.
///
/// Printable characters are emitted as is. Whitespace other than a plain
/// space, and control characters, are escaped so that error messages stay on
/// one line and make the offending character visible.
#[derive(Clone, Copy)]
pub(crate) struct Char(pub(crate) char);

impl core::fmt::Display for Char {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let ch = self.0;
        if ch == ' ' || !(ch.is_whitespace() || ch.is_control()) {
            return write!(f, "{ch}");
        }
        write!(f, "{}", ch.escape_default())
    }
}

impl core::fmt::Debug for Char {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"")?;
        core::fmt::Display::fmt(self, f)?;
        write!(f, "\"")?;
        Ok(())
    }
}
