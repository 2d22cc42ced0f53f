use std::ops::{
    Add, AddAssign, Deref, DerefMut, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::SVector;

/// A small `f32` vector. All arithmetic is component-wise, and scalar operands are broadcast to
/// every component.
///
/// No operation here checks for degenerate input: dividing by zero or normalizing a zero vector
/// produces infinities and NaNs, exactly as the underlying float operations do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>(pub SVector<f32, N>);

pub type Vec2 = Vector<2>;
pub type Vec3 = Vector<3>;
pub type Vec4 = Vector<4>;

impl<const N: usize> Vector<N> {
    /// A vector with every component set to `value`.
    #[inline]
    pub fn splat(value: f32) -> Self {
        Self(SVector::from_element(value))
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::splat(0.)
    }

    /// The euclidean norm.
    #[inline]
    pub fn length(&self) -> f32 {
        self.0.norm()
    }

    /// Scale the vector to unit length. A zero vector yields NaN components.
    #[inline]
    pub fn normalized(&self) -> Self {
        *self / self.length()
    }

    #[inline]
    pub fn abs(&self) -> Self {
        Self(self.0.map(f32::abs))
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f32 {
        self.0.dot(&other.0)
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, f32::max))
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &Self) -> Self {
        Self(self.0.zip_map(&other.0, f32::min))
    }

    /// Component-wise maximum against a scalar broadcast to every component.
    #[inline]
    pub fn max_scalar(&self, value: f32) -> Self {
        Self(self.0.map(|a| a.max(value)))
    }

    /// Component-wise minimum against a scalar broadcast to every component.
    #[inline]
    pub fn min_scalar(&self, value: f32) -> Self {
        Self(self.0.map(|a| a.min(value)))
    }

    /// The largest component.
    #[inline]
    pub fn max_component(&self) -> f32 {
        self.0.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self(SVector::from([x, y]))
    }
}

impl Vec3 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(SVector::from([x, y, z]))
    }
}

impl Vec4 {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(SVector::from([x, y, z, w]))
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    #[inline]
    fn from(values: [f32; N]) -> Self {
        Self(SVector::from(values))
    }
}

impl<const N: usize> From<SVector<f32, N>> for Vector<N> {
    #[inline]
    fn from(inner: SVector<f32, N>) -> Self {
        Self(inner)
    }
}

// Component access (`v.x`, `v.y`, ...) goes through nalgebra's storage.
impl<const N: usize> Deref for Vector<N> {
    type Target = SVector<f32, N>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Vector<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

macro_rules! binary_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $f:expr;)*) => {
        $(
            impl<const N: usize> $op for Vector<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self(self.0.zip_map(&rhs.0, $f))
                }
            }

            impl<const N: usize> $op<f32> for Vector<N> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: f32) -> Self {
                    Self(self.0.map(|a| $f(a, rhs)))
                }
            }

            impl<const N: usize> $assign for Vector<N> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    *self = $op::$method(*self, rhs);
                }
            }

            impl<const N: usize> $assign<f32> for Vector<N> {
                #[inline]
                fn $assign_method(&mut self, rhs: f32) {
                    *self = $op::$method(*self, rhs);
                }
            }
        )*
    };
}

binary_ops! {
    Add::add, AddAssign::add_assign, |a: f32, b: f32| a + b;
    Sub::sub, SubAssign::sub_assign, |a: f32, b: f32| a - b;
    Mul::mul, MulAssign::mul_assign, |a: f32, b: f32| a * b;
    Div::div, DivAssign::div_assign, |a: f32, b: f32| a / b;
}

impl<const N: usize> Mul<Vector<N>> for f32 {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs * self
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<const N: usize> AbsDiffEq for Vector<N> {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<const N: usize> RelativeEq for Vector<N> {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_scalar_broadcast() {
        let v = Vec3::new(1., 2., 3.);
        assert_eq!(Vec3::new(2., 3., 4.), v + 1.);
        assert_eq!(Vec3::new(0., 1., 2.), v - 1.);
        assert_eq!(Vec3::new(2., 4., 6.), v * 2.);
        assert_eq!(Vec3::new(2., 4., 6.), 2. * v);
        assert_eq!(Vec3::new(0.5, 1., 1.5), v / 2.);
    }

    #[test]
    fn test_componentwise() {
        let a = Vec4::new(1., 2., 3., 4.);
        let b = Vec4::new(2., 2., 2., 2.);
        assert_eq!(Vec4::new(3., 4., 5., 6.), a + b);
        assert_eq!(Vec4::new(-1., 0., 1., 2.), a - b);
        assert_eq!(Vec4::new(2., 4., 6., 8.), a * b);
        assert_eq!(Vec4::new(0.5, 1., 1.5, 2.), a / b);
        assert_eq!(30., a.dot(&a));
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vec2::new(1., 2.);
        v += Vec2::new(1., 1.);
        assert_eq!(Vec2::new(2., 3.), v);
        v *= 2.;
        assert_eq!(Vec2::new(4., 6.), v);
        v -= 1.;
        assert_eq!(Vec2::new(3., 5.), v);
        v /= Vec2::new(3., 5.);
        assert_eq!(Vec2::new(1., 1.), v);
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vec3::new(3., 0., 4.);
        assert_eq!(5., v.length());
        assert_abs_diff_eq!(Vec3::new(0.6, 0., 0.8), v.normalized(), epsilon = 1e-6);
        assert_abs_diff_eq!(1., v.normalized().length(), epsilon = 1e-6);
    }

    #[test]
    fn test_zero_normalize_is_nan() {
        let n = Vec3::zeros().normalized();
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn test_abs_min_max() {
        let v = Vec3::new(-1., 2., -3.);
        assert_eq!(Vec3::new(1., 2., 3.), v.abs());
        assert_eq!(Vec3::new(0., 2., 0.), v.max_scalar(0.));
        assert_eq!(Vec3::new(-1., 0., -3.), v.min_scalar(0.));
        assert_eq!(Vec3::new(1., 2., -3.), v.max(&Vec3::new(1., 1., -5.)));
        assert_eq!(Vec3::new(-1., 1., -5.), v.min(&Vec3::new(1., 1., -5.)));
        assert_eq!(2., v.max_component());
    }

    #[test]
    fn test_component_access() {
        let mut v = Vec3::new(1., 2., 3.);
        v.y = 5.;
        assert_eq!(1., v.x);
        assert_eq!(5., v.y);
        assert_eq!(3., v.z);
        assert_eq!(-v, Vec3::new(-1., -5., -3.));
    }
}
