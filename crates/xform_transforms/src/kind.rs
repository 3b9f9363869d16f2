//! The closed set of transform kinds.

use std::fmt;

/// Every transform this crate knows about. A closed enum rather than an
/// open class hierarchy: capabilities are total functions over the variants,
/// so a new kind cannot forget to declare what it supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    Fourier,
    Laplace,
    Hankel,
    Z,
    Radon,
    Wavelet,
}

impl TransformKind {
    /// Can discrete sample data be transformed forward?
    pub fn supports_samples(self) -> bool {
        match self {
            TransformKind::Fourier
            | TransformKind::Laplace
            | TransformKind::Hankel
            | TransformKind::Z => true,
            TransformKind::Radon | TransformKind::Wavelet => false,
        }
    }

    /// Can the discrete forward result be inverted back into samples?
    ///
    /// Only Fourier (exact DFT pair) and Laplace (weighted sum built to be
    /// invertible term by term) qualify. The Hankel and Z discretizations
    /// are lossy with no general closed-form inverse and are refused with
    /// [`crate::TransformError::NotInvertible`].
    pub fn supports_inverse_samples(self) -> bool {
        matches!(self, TransformKind::Fourier | TransformKind::Laplace)
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransformKind::Fourier => "Fourier",
            TransformKind::Laplace => "Laplace",
            TransformKind::Hankel => "Hankel",
            TransformKind::Z => "Z",
            TransformKind::Radon => "Radon",
            TransformKind::Wavelet => "Wavelet",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capability_table() {
        assert!(TransformKind::Laplace.supports_samples());
        assert!(TransformKind::Laplace.supports_inverse_samples());
        assert!(TransformKind::Z.supports_samples());
        assert!(!TransformKind::Z.supports_inverse_samples());
        assert!(TransformKind::Hankel.supports_samples());
        assert!(!TransformKind::Hankel.supports_inverse_samples());
        assert!(!TransformKind::Radon.supports_samples());
        assert!(!TransformKind::Wavelet.supports_samples());
    }
}
