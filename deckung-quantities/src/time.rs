use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

pub type Hours = Quantity<0, 1, 0, 0>;

impl Display for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} h", self.0)
    }
}

impl Debug for Hours {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}h", self.0)
    }
}

/// Calendar days of a project, kept apart from working hours.
pub type Days = Quantity<0, 0, 1, 0>;

impl Display for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} d", self.0)
    }
}

impl Debug for Days {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}d", self.0)
    }
}
