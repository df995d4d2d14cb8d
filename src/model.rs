use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Dense index of a city inside a [`CityGraph`](crate::CityGraph).
/// Indices are assigned in the order cities are first seen in the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CityId(pub(crate) u32);

impl CityId {
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Travel distance between cities, in map units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u64);

impl Distance {
    pub const ZERO: Self = Self(0);
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u64 {
        self.0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, d| total + d)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn distance_sum_saturates() {
        let total: Distance = [Distance::MAX, Distance::from_units(1)].into_iter().sum();
        assert_eq!(total, Distance::MAX);

        let total: Distance = (1..=4).map(Distance::from_units).sum();
        assert_eq!(total.units(), 10);
    }
}
