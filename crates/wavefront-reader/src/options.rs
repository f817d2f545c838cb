//! Reader and writer configuration

/// Default relative tolerance for vertex deduplication
const DEFAULT_RTOL: f64 = 1e-5;

/// Default absolute tolerance for vertex deduplication
const DEFAULT_ATOL: f64 = 1e-8;

/// Options for OBJ reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ReadOptions {
    /// Reject input that breaks the well-formedness preconditions
    ///
    /// When enabled, every face line must be channel-uniform and every
    /// resolved object must have `texcoords`/`normals` either empty or the
    /// same length as `positions`. Off by default; the lenient reader trusts
    /// the file.
    pub strict: bool,
}

impl ReadOptions {
    /// Create options with strict validation toggled
    #[inline]
    #[must_use = "returns options with strict setting configured"]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Numeric closeness test used when deduplicating vertex positions
///
/// Two values `a` and `b` are close when `|a - b| <= atol + rtol * |b|`.
/// The test is asymmetric: `b` is the reference value already in the pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    /// Relative tolerance
    pub rtol: f64,
    /// Absolute tolerance
    pub atol: f64,
}

impl Default for Tolerance {
    #[inline]
    fn default() -> Self {
        Self {
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

impl Tolerance {
    /// Create a tolerance with explicit relative and absolute bounds
    #[inline]
    #[must_use = "creates a tolerance"]
    pub const fn new(rtol: f64, atol: f64) -> Self {
        Self { rtol, atol }
    }

    /// Whether `a` is close to the reference value `b`
    #[inline]
    #[must_use = "returns the closeness test result"]
    pub fn is_close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.atol + self.rtol * b.abs()
    }

    /// Whether every component of `a` is close to the matching component of `b`
    #[must_use = "returns the closeness test result"]
    pub fn rows_close(&self, a: &[f64; 3], b: &[f64; 3]) -> bool {
        a.iter().zip(b).all(|(&x, &y)| self.is_close(x, y))
    }
}
