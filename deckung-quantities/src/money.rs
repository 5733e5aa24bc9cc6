use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

/// Swiss francs.
pub type Francs = Quantity<1, 0, 0, 0>;

impl Display for Francs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} CHF", self.0)
    }
}

impl Debug for Francs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}CHF", self.0)
    }
}
