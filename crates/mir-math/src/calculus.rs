// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Numeric differentiation and integration over a caller-supplied scalar
//! function.
//!
//! Implement [`ScalarFn`] for a type, or pass any `Fn(f64) -> f64` closure;
//! the derivative and integral come from the trait's provided methods.
//! Everything runs in `f64`: the default forward-difference step of `1e-8`
//! is below `f32` resolution for arguments near 1 and above.
//!
//! ```
//! use mir_math::ScalarFn;
//! let square = |x: f64| x * x;
//! assert!((square.differentiate_default(3.0) - 6.0).abs() < 1e-4);
//! assert!((square.integrate(0.0, 3.0, 300) - 9.0).abs() < 1e-3);
//! ```

use tracing::debug;

use crate::MathError;

/// Default forward-difference step for [`ScalarFn::differentiate_default`].
pub const DEFAULT_STEP: f64 = 1.0e-8;

/// A deterministic, side-effect-free scalar function `f: f64 -> f64`.
pub trait ScalarFn {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;

    /// Forward-difference derivative `(f(x + h) - f(x)) / h`.
    ///
    /// No adaptive step: very small `h` loses digits to cancellation, large
    /// `h` to truncation.
    fn differentiate(&self, x: f64, h: f64) -> f64 {
        (self.eval(x + h) - self.eval(x)) / h
    }

    /// [`ScalarFn::differentiate`] with [`DEFAULT_STEP`].
    fn differentiate_default(&self, x: f64) -> f64 {
        self.differentiate(x, DEFAULT_STEP)
    }

    /// Trapezoidal integral over `[start, end]` with `intervals` equal steps.
    ///
    /// Returns `0.0` without evaluating the function when `intervals` is
    /// zero.
    fn integrate(&self, start: f64, end: f64, intervals: u32) -> f64 {
        if intervals == 0 {
            return 0.0;
        }
        let h = (end - start) / f64::from(intervals);
        (0..intervals)
            .map(|i| {
                let x = start + f64::from(i) * h;
                (self.eval(x) + self.eval(x + h)) * h / 2.0
            })
            .sum()
    }

    /// [`ScalarFn::integrate`], rejecting an empty partition with
    /// [`MathError::EmptyPartition`].
    fn try_integrate(&self, start: f64, end: f64, intervals: u32) -> Result<f64, MathError> {
        if intervals == 0 {
            debug!(start, end, "rejecting integration over zero sub-intervals");
            return Err(MathError::EmptyPartition);
        }
        Ok(self.integrate(start, end, intervals))
    }
}

impl<F> ScalarFn for F
where
    F: Fn(f64) -> f64,
{
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}
