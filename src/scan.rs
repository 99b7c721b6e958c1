//! Scan collaborator seam
//!
//! The driver only needs something that can be pointed at an input string.
//! What scanning means, what it produces and how it fails belong to the
//! implementor.

use std::convert::Infallible;

/// Something the driver can scan an input with.
pub trait Scanner {
    /// Whatever a successful scan produces
    type Output;
    type Error: std::error::Error;

    fn scan(&mut self, input: &str) -> Result<Self::Output, Self::Error>;
}

impl<S: Scanner + ?Sized> Scanner for &mut S {
    type Output = S::Output;
    type Error = S::Error;

    fn scan(&mut self, input: &str) -> Result<Self::Output, Self::Error> {
        (**self).scan(input)
    }
}

/// Placeholder scanner that accepts any input and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopScanner;

impl Scanner for NoopScanner {
    type Output = ();
    type Error = Infallible;

    fn scan(&mut self, _input: &str) -> Result<(), Infallible> {
        Ok(())
    }
}
