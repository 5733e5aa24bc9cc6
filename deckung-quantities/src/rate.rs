use std::fmt::{Debug, Display, Formatter};

use crate::{
    Quantity,
    distance::Kilometres,
    implement_mul,
    money::Francs,
    time::{Days, Hours},
};

/// Francs per working hour.
pub type HourlyRate = Quantity<1, -1, 0, 0>;

/// Francs per project day.
pub type DailyRate = Quantity<1, 0, -1, 0>;

/// Francs per driven kilometre.
pub type KilometreRate = Quantity<1, 0, 0, -1>;

implement_mul!(Hours, HourlyRate, Francs);
implement_mul!(Days, DailyRate, Francs);
implement_mul!(Kilometres, KilometreRate, Francs);

impl Display for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} CHF/h", self.0)
    }
}

impl Debug for HourlyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}CHF/h", self.0)
    }
}

impl Display for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} CHF/d", self.0)
    }
}

impl Debug for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}CHF/d", self.0)
    }
}

impl Display for KilometreRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} CHF/km", self.0)
    }
}

impl Debug for KilometreRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}CHF/km", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labor_cost() {
        assert_eq!(Hours::from(160) * HourlyRate::from(45), Francs::from(7200));
        assert_eq!(HourlyRate::from(45) * Hours::from(160), Francs::from(7200));
    }

    #[test]
    fn test_opportunity_cost() {
        assert_eq!(Days::from(20) * DailyRate::from(200), Francs::from(4000));
    }

    #[test]
    fn test_fuel_cost() {
        assert_eq!(Kilometres::from(50) * KilometreRate::from(0.35), Francs::from(17.5));
    }
}
