use std::fmt::{Debug, Display, Formatter};

use crate::Quantity;

pub type Kilometres = Quantity<0, 0, 0, 1>;

impl Display for Kilometres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

impl Debug for Kilometres {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}km", self.0)
    }
}
