use std::{
    f64::consts::PI,
    fmt,
    ops::{Add, Deref, Mul, Neg, Sub},
};

use bigdecimal::{BigDecimal, One, ToPrimitive, Zero};

use crate::{
    config::VectorConfig,
    decimal::{check_scale, ToDecimal}, DomainError, Result, VectorError, ZeroVector,
};

/// An immutable, non-empty tuple of decimal coordinates.
///
/// Equality compares coordinate values only; the configuration a vector was built with does
/// not take part.
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Vec<BigDecimal>,
    config: VectorConfig,
}

/// Unit in which [`Vector::angle_with`] reports its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Sum of pairwise products, pairing components up to the shorter vector.
///
/// The result is rounded to the precision of `a`.
pub fn dot_product(a: &Vector, b: &Vector) -> BigDecimal {
    log_mismatch("dot", a, b);
    let sum = a
        .iter()
        .zip(b.iter())
        .fold(BigDecimal::zero(), |acc, (x, y)| acc + x * y);
    a.config.round(sum)
}

/// Cross product of two 2- or 3-dimensional vectors.
///
/// 2-dimensional operands are treated as lying in the `z = 0` plane.
pub fn cross_product(a: &Vector, b: &Vector) -> Result<Vector> {
    let [a1, a2, a3] = embed_3d(a)?;
    let [b1, b2, b3] = embed_3d(b)?;
    let round = |x: BigDecimal| a.config.round(x);
    let coordinates = vec![
        round(&a2 * &b3 - &a3 * &b2),
        round(-(&a1 * &b3 - &a3 * &b1)),
        round(&a1 * &b2 - &a2 * &b1),
    ];
    Ok(Vector::from_parts(coordinates, a.config))
}

fn embed_3d(v: &Vector) -> Result<[BigDecimal; 3]> {
    match v.coordinates.as_slice() {
        [x, y] => Ok([x.clone(), y.clone(), BigDecimal::zero()]),
        [x, y, z] => Ok([x.clone(), y.clone(), z.clone()]),
        _ => {
            log::debug!("cross product rejected for dimension {}", v.dimension());
            Err(VectorError::UnsupportedDimension {
                dimension: v.dimension(),
            })
        }
    }
}

fn log_mismatch(op: &str, a: &Vector, b: &Vector) {
    if a.dimension() != b.dimension() {
        log::debug!(
            "{op}: dimensions {} and {} differ, pairing the first {} components",
            a.dimension(),
            b.dimension(),
            a.dimension().min(b.dimension())
        );
    }
}

fn to_f64(value: &BigDecimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

impl Vector {
    /// Builds a vector with the default [`VectorConfig`].
    ///
    /// # Examples
    /// ```
    /// use decimal_vector::{Vector, VectorError};
    /// assert_eq!(Vector::new([1, 2, 3]).unwrap().dimension(), 3);
    /// assert!(matches!(Vector::new(Vec::<i32>::new()), Err(VectorError::InvalidArgument(_))));
    /// assert!(matches!(Vector::new(["a"]), Err(VectorError::TypeConversion { .. })));
    /// ```
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToDecimal,
    {
        Self::with_config(coordinates, VectorConfig::default())
    }

    pub fn with_config<I>(coordinates: I, config: VectorConfig) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToDecimal,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.to_decimal())
            .collect::<Result<Vec<_>>>()?;
        Self::from_decimals_with_config(coordinates, config)
    }

    pub fn from_decimals(coordinates: Vec<BigDecimal>) -> Result<Self> {
        Self::from_decimals_with_config(coordinates, VectorConfig::default())
    }

    pub fn from_decimals_with_config(
        coordinates: Vec<BigDecimal>,
        config: VectorConfig,
    ) -> Result<Self> {
        if coordinates.is_empty() {
            log::debug!("rejected vector with no coordinates");
            return Err(VectorError::InvalidArgument("coordinates must be nonempty"));
        }
        let coordinates = coordinates
            .into_iter()
            .map(check_scale)
            .collect::<Result<Vec<_>>>()?;
        log::trace!("new vector of dimension {}", coordinates.len());
        Ok(Self::from_parts(coordinates, config))
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> Result<Self> {
        Self::from_decimals(vec![BigDecimal::zero(); dimension])
    }

    // Callers guarantee `coordinates` is non-empty.
    fn from_parts(coordinates: Vec<BigDecimal>, config: VectorConfig) -> Self {
        Self {
            coordinates,
            config,
        }
    }

    fn map(&self, f: impl FnMut(&BigDecimal) -> BigDecimal) -> Self {
        let coordinates = self.iter().map(f).map(|x| self.config.round(x)).collect();
        Self::from_parts(coordinates, self.config)
    }

    fn zip_with(
        &self,
        other: &Self,
        op: &str,
        f: impl Fn(&BigDecimal, &BigDecimal) -> BigDecimal,
    ) -> Self {
        log_mismatch(op, self, other);
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(x, y)| self.config.round(f(x, y)))
            .collect();
        Self::from_parts(coordinates, self.config)
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[BigDecimal] {
        &self.coordinates
    }

    pub fn config(&self) -> VectorConfig {
        self.config
    }

    pub fn into_coordinates(self) -> Vec<BigDecimal> {
        self.coordinates
    }

    /// Lossy conversion of the coordinates to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.iter().map(to_f64).collect()
    }

    /// Component-wise sum. Components are paired up to the shorter vector.
    pub fn plus(&self, other: &Self) -> Self {
        self.zip_with(other, "plus", |x, y| x + y)
    }

    /// Component-wise difference. Components are paired up to the shorter vector.
    pub fn minus(&self, other: &Self) -> Self {
        self.zip_with(other, "minus", |x, y| x - y)
    }

    pub fn times_scalar<C: ToDecimal>(&self, c: C) -> Result<Self> {
        let c = c.to_decimal()?;
        Ok(self.map(|x| x * &c))
    }

    fn sum_of_squares(&self) -> BigDecimal {
        let sum = self
            .iter()
            .fold(BigDecimal::zero(), |acc, x| acc + x * x);
        self.config.round(sum)
    }

    /// Euclidean length, reported as an `f64`.
    ///
    /// Lengths below `f64` range come back as `0.0` even though the vector is not exactly zero;
    /// [`Vector::normalized`] still succeeds for such vectors.
    pub fn magnitude(&self) -> f64 {
        to_f64(&self.sum_of_squares()).sqrt()
    }

    /// Unit vector in the same direction, with the scale factor computed in decimal.
    fn unit(&self) -> std::result::Result<Self, ZeroVector> {
        let squares = self.sum_of_squares();
        if squares.is_zero() {
            return Err(ZeroVector);
        }
        let ctx = self.config.context();
        let norm = squares.sqrt_with_context(&ctx).ok_or(ZeroVector)?;
        let scale = norm.inverse_with_context(&ctx);
        Ok(self.map(|x| x * &scale))
    }

    /// Scales to unit length at the configured precision.
    ///
    /// Only an exactly-zero vector fails; a vector whose [`magnitude`](Vector::magnitude)
    /// underflows to `0.0` in `f64` still has a direction and is normalized.
    ///
    /// # Errors
    /// [`DomainError::ZeroVector`] if every coordinate is zero.
    pub fn normalized(&self) -> Result<Self> {
        self.unit().map_err(|e| {
            log::debug!("{e}");
            VectorError::from(DomainError::from(e))
        })
    }

    pub fn dot(&self, other: &Self) -> BigDecimal {
        dot_product(self, other)
    }

    /// Angle between `self` and `other`, in `[0, π]` radians or `[0, 180]` degrees.
    ///
    /// # Errors
    /// [`DomainError::ZeroAngle`] if either operand is the zero vector.
    pub fn angle_with(&self, other: &Self, unit: AngleUnit) -> Result<f64> {
        let (u1, u2) = self
            .unit()
            .and_then(|u1| Ok((u1, other.unit()?)))
            .map_err(|e| {
                log::debug!("angle with the zero vector requested");
                DomainError::ZeroAngle(e)
            })?;

        // Rounding can push the cosine just outside [-1, 1], where acos is undefined.
        let one = BigDecimal::one();
        let cos = u1.dot(&u2);
        let cos = if cos > one {
            one
        } else if cos < -one.clone() {
            -one
        } else {
            cos
        };

        let radians = to_f64(&cos).acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * 180.0 / PI,
        })
    }

    /// `true` if the magnitude is below the configured tolerance.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.config.tolerance)
    }

    pub fn is_zero_within(&self, tolerance: f64) -> bool {
        self.magnitude() < tolerance
    }

    /// `true` if the dot product is within the configured tolerance of zero.
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.is_orthogonal_to_within(other, self.config.tolerance)
    }

    pub fn is_orthogonal_to_within(&self, other: &Self, tolerance: f64) -> bool {
        to_f64(&self.dot(other).abs()) < tolerance
    }

    /// `true` if either vector is zero or the angle between them is exactly `0` or `π`.
    ///
    /// Unlike the other predicates this applies no tolerance.
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        if self.is_zero() || other.is_zero() {
            return true;
        }
        // both operands are nonzero here, so the angle is always defined
        self.angle_with(other, AngleUnit::Radians)
            .map_or(true, |angle| angle == 0.0 || angle == PI)
    }

    fn parallel_component(&self, basis: &Self) -> std::result::Result<Self, DomainError> {
        let unit = basis.unit().map_err(|e| {
            log::debug!("projection onto the zero vector requested");
            DomainError::NoUniqueParallelComponent(e)
        })?;
        let weight = self.dot(&unit);
        Ok(unit.map(|x| x * &weight))
    }

    /// Projection of `self` onto `basis`.
    ///
    /// # Errors
    /// [`DomainError::NoUniqueParallelComponent`] if `basis` is the zero vector.
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self> {
        Ok(self.parallel_component(basis)?)
    }

    /// The part of `self` perpendicular to `basis`.
    ///
    /// # Errors
    /// [`DomainError::NoUniqueOrthogonalComponent`] if `basis` is the zero vector.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        let parallel = self
            .parallel_component(basis)
            .map_err(|e| DomainError::NoUniqueOrthogonalComponent(Box::new(e)))?;
        Ok(self.minus(&parallel))
    }

    pub fn cross(&self, other: &Self) -> Result<Self> {
        cross_product(self, other)
    }

    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<f64> {
        Ok(self.cross(other)?.magnitude())
    }

    pub fn area_of_triangle_with(&self, other: &Self) -> Result<f64> {
        Ok(self.area_of_parallelogram_with(other)? / 2.0)
    }
}

impl Deref for Vector {
    type Target = [BigDecimal];

    fn deref(&self) -> &Self::Target {
        &self.coordinates
    }
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, x) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        self.map(|x| -x.clone())
    }
}

impl Mul<&BigDecimal> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: &BigDecimal) -> Self::Output {
        self.map(|x| x * rhs)
    }
}
