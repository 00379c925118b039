//! Unit-aware quantities for budget declarations and contributions.
//!
//! The closed unit table below covers the physical-quantity families that
//! budget declarations in practice use (mass, time, power, length, data
//! size, plain counts). Conversion is only defined within a dimension;
//! adding across dimensions is a `None`, never a silent coercion.

/// The physical dimension of a [`Unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Mass,
    Time,
    Power,
    Length,
    Information,
    Dimensionless,
}

/// A unit of measure: a symbol, its dimension, and the factor to the
/// dimension's base unit.
#[derive(Clone, Copy, Debug)]
pub struct Unit {
    symbol: &'static str,
    dimension: Dimension,
    factor: f64,
}

impl Unit {
    pub const MILLIGRAM: Unit = Unit::new("mg", Dimension::Mass, 0.001);
    pub const GRAM: Unit = Unit::new("g", Dimension::Mass, 1.0);
    pub const KILOGRAM: Unit = Unit::new("kg", Dimension::Mass, 1000.0);

    pub const NANOSECOND: Unit = Unit::new("ns", Dimension::Time, 1e-9);
    pub const MICROSECOND: Unit = Unit::new("us", Dimension::Time, 1e-6);
    pub const MILLISECOND: Unit = Unit::new("ms", Dimension::Time, 0.001);
    pub const SECOND: Unit = Unit::new("s", Dimension::Time, 1.0);

    pub const MILLIWATT: Unit = Unit::new("mW", Dimension::Power, 0.001);
    pub const WATT: Unit = Unit::new("W", Dimension::Power, 1.0);
    pub const KILOWATT: Unit = Unit::new("kW", Dimension::Power, 1000.0);

    pub const MILLIMETER: Unit = Unit::new("mm", Dimension::Length, 0.001);
    pub const METER: Unit = Unit::new("m", Dimension::Length, 1.0);

    pub const BYTE: Unit = Unit::new("B", Dimension::Information, 1.0);
    pub const KILOBYTE: Unit = Unit::new("kB", Dimension::Information, 1000.0);
    pub const MEGABYTE: Unit = Unit::new("MB", Dimension::Information, 1e6);

    pub const COUNT: Unit = Unit::new("count", Dimension::Dimensionless, 1.0);

    const ALL: [Unit; 16] = [
        Unit::MILLIGRAM,
        Unit::GRAM,
        Unit::KILOGRAM,
        Unit::NANOSECOND,
        Unit::MICROSECOND,
        Unit::MILLISECOND,
        Unit::SECOND,
        Unit::MILLIWATT,
        Unit::WATT,
        Unit::KILOWATT,
        Unit::MILLIMETER,
        Unit::METER,
        Unit::BYTE,
        Unit::KILOBYTE,
        Unit::MEGABYTE,
        Unit::COUNT,
    ];

    const fn new(symbol: &'static str, dimension: Dimension, factor: f64) -> Self {
        Self {
            symbol,
            dimension,
            factor,
        }
    }

    /// Look up a unit by its symbol (`"kg"`, `"ms"`, ...).
    pub fn parse(symbol: &str) -> Option<Unit> {
        Unit::ALL.iter().copied().find(|u| u.symbol == symbol)
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol && self.dimension == other.dimension
    }
}

impl Eq for Unit {}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// A magnitude together with its unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity {
    magnitude: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn zero(unit: Unit) -> Self {
        Self::new(0.0, unit)
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Convert into another unit of the same dimension.
    ///
    /// Returns `None` when the dimensions differ.
    pub fn convert_to(&self, unit: Unit) -> Option<Quantity> {
        if self.unit.dimension != unit.dimension {
            return None;
        }
        if self.unit == unit {
            return Some(*self);
        }
        let base = self.magnitude * self.unit.factor;
        Some(Quantity::new(base / unit.factor, unit))
    }

    /// Unit-aware addition: the right-hand side is converted into the
    /// left-hand side's unit. `None` when the dimensions differ.
    pub fn checked_add(&self, rhs: &Quantity) -> Option<Quantity> {
        let rhs = rhs.convert_to(self.unit)?;
        Some(Quantity::new(self.magnitude + rhs.magnitude, self.unit))
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.unit)
    }
}
