use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Sub},
};

/// Length in meters. NaN is kept so that bogus geometry surfaces as a
/// computation error instead of a silently rounded distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Meters(f64);

impl Meters {
    pub const ZERO: Meters = Meters(0.0);

    pub fn new(value: f64) -> Self {
        Meters(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl From<f64> for Meters {
    fn from(value: f64) -> Self {
        Meters::new(value)
    }
}

impl From<Meters> for f64 {
    fn from(value: Meters) -> Self {
        value.0
    }
}

impl fmt::Display for Meters {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} m", self.0)
    }
}

impl Add for Meters {
    type Output = Meters;

    fn add(self, other: Meters) -> Meters {
        Meters(self.0 + other.0)
    }
}

impl AddAssign for Meters {
    fn add_assign(&mut self, other: Meters) {
        self.0 += other.0;
    }
}

impl Sub for Meters {
    type Output = Meters;

    fn sub(self, other: Meters) -> Meters {
        Meters(self.0 - other.0)
    }
}

impl Sum for Meters {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Meters::ZERO, Add::add)
    }
}
