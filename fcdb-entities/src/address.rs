use std::{borrow::Borrow, fmt};

/// Free-text postal address.
///
/// Addresses are the exact-match key for coordinate caching. No
/// normalization is applied: two strings that denote the same physical
/// place are still distinct addresses.
#[derive(Debug, Default, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(String);

impl Address {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// An address that is empty or consists only of whitespace
    /// cannot be geocoded.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<String> for Address {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Address {
    fn from(from: &str) -> Self {
        from.to_owned().into()
    }
}

impl From<Address> for String {
    fn from(from: Address) -> Self {
        from.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl Borrow<str> for Address {
    fn borrow(&self) -> &str {
        self.as_ref()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_ref())
    }
}
