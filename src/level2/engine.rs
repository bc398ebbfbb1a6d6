#![allow(non_snake_case)]

use super::{gemv, ger, her, symv, syr, trmv, trsv};
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use crate::settings::Level2Settings;
use std::fs::File;
use std::io::Write;

/// Kernel engine carrying [`Level2Settings`] and a print target.
///
/// Each method has the same calling sequence and semantics as the
/// function of the same name in [`level2`](crate::level2), except that
/// the engine's settings are applied.  When `verbose` is set, argument
/// errors are also reported to the print target in the style of the
/// reference BLAS error handler.  A diagnostic that cannot be delivered
/// does not change the kernel's result; it is kept for
/// [`take_print_error`](Level2::take_print_error) instead.
///
/// ```
/// use refblas2::*;
///
/// let settings = Level2SettingsBuilder::default()
///     .verbose(true)
///     .build()
///     .unwrap();
/// let mut engine = Level2::new(settings);
/// engine.print_to_buffer();
///
/// let a = [1., 2., 3., 4.];
/// let x = [1., 1.];
/// let mut y = [0., 0.];
/// let err = engine
///     .gemv(MatrixOrder::RowMajor, MatrixShape::N, 2, 2, 1.0, &a, 1, &x, 1, 0.0, &mut y, 1)
///     .unwrap_err();
/// assert_eq!(err.position(), Some(7));
/// assert!(engine.get_print_buffer().unwrap().contains("DGEMV parameter number 7"));
/// ```
#[derive(Debug)]
pub struct Level2 {
    pub settings: Level2Settings,
    stream: PrintTarget,
    print_error: Option<std::io::Error>,
}

impl Default for Level2 {
    fn default() -> Self {
        Self::new(Level2Settings::default())
    }
}

impl Level2 {
    pub fn new(settings: Level2Settings) -> Self {
        Self {
            settings,
            stream: PrintTarget::default(),
            print_error: None,
        }
    }

    /// The most recent failure to deliver a diagnostic, if any, clearing it.
    pub fn take_print_error(&mut self) -> Option<std::io::Error> {
        self.print_error.take()
    }

    // report a failed call when verbose
    fn report(&mut self, result: Result<(), BlasError>) -> Result<(), BlasError> {
        if let Err(ref e) = result {
            if self.settings.verbose {
                if let Err(io_err) = self.stream.emit_line(&e.xerbla_message()) {
                    self.print_error = Some(io_err);
                }
            }
        }
        result
    }

    /// See [`level2::gemv`](crate::level2::gemv)
    pub fn gemv<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        trans: MatrixShape,
        m: usize,
        n: usize,
        α: T,
        a: &[T],
        lda: usize,
        x: &[T],
        incx: isize,
        β: T,
        y: &mut [T],
        incy: isize,
    ) -> Result<(), BlasError> {
        let result = gemv::_gemv(
            &self.settings,
            order,
            trans,
            m,
            n,
            α,
            a,
            lda,
            x,
            incx,
            β,
            y,
            incy,
        );
        self.report(result)
    }

    /// See [`level2::ger`](crate::level2::ger)
    pub fn ger<T: BlasReal>(
        &mut self,
        order: MatrixOrder,
        m: usize,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        y: &[T],
        incy: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = ger::_ger(
            &self.settings,
            "ger",
            false,
            order,
            m,
            n,
            α,
            x,
            incx,
            y,
            incy,
            a,
            lda,
        );
        self.report(result)
    }

    /// See [`level2::geru`](crate::level2::geru)
    pub fn geru<T: BlasComplex>(
        &mut self,
        order: MatrixOrder,
        m: usize,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        y: &[T],
        incy: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = ger::_ger(
            &self.settings,
            "geru",
            false,
            order,
            m,
            n,
            α,
            x,
            incx,
            y,
            incy,
            a,
            lda,
        );
        self.report(result)
    }

    /// See [`level2::gerc`](crate::level2::gerc)
    pub fn gerc<T: BlasComplex>(
        &mut self,
        order: MatrixOrder,
        m: usize,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        y: &[T],
        incy: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = ger::_ger(
            &self.settings,
            "gerc",
            true,
            order,
            m,
            n,
            α,
            x,
            incx,
            y,
            incy,
            a,
            lda,
        );
        self.report(result)
    }

    /// See [`level2::symv`](crate::level2::symv)
    pub fn symv<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T,
        a: &[T],
        lda: usize,
        x: &[T],
        incx: isize,
        β: T,
        y: &mut [T],
        incy: isize,
    ) -> Result<(), BlasError> {
        let result = symv::_symv(
            &self.settings,
            order,
            uplo,
            n,
            α,
            a,
            lda,
            x,
            incx,
            β,
            y,
            incy,
        );
        self.report(result)
    }

    /// See [`level2::hemv`](crate::level2::hemv)
    pub fn hemv<T: BlasComplex>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T,
        a: &[T],
        lda: usize,
        x: &[T],
        incx: isize,
        β: T,
        y: &mut [T],
        incy: isize,
    ) -> Result<(), BlasError> {
        let result = symv::_hemv(
            &self.settings,
            order,
            uplo,
            n,
            α,
            a,
            lda,
            x,
            incx,
            β,
            y,
            incy,
        );
        self.report(result)
    }

    /// See [`level2::syr`](crate::level2::syr)
    pub fn syr<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = syr::_syr(&self.settings, order, uplo, n, α, x, incx, a, lda);
        self.report(result)
    }

    /// See [`level2::syr2`](crate::level2::syr2)
    pub fn syr2<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        y: &[T],
        incy: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = syr::_syr2(
            &self.settings,
            order,
            uplo,
            n,
            α,
            x,
            incx,
            y,
            incy,
            a,
            lda,
        );
        self.report(result)
    }

    /// See [`level2::her`](crate::level2::her)
    pub fn her<T: BlasComplex>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T::Real,
        x: &[T],
        incx: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = her::_her(&self.settings, order, uplo, n, α, x, incx, a, lda);
        self.report(result)
    }

    /// See [`level2::her2`](crate::level2::her2)
    pub fn her2<T: BlasComplex>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        n: usize,
        α: T,
        x: &[T],
        incx: isize,
        y: &[T],
        incy: isize,
        a: &mut [T],
        lda: usize,
    ) -> Result<(), BlasError> {
        let result = her::_her2(
            &self.settings,
            order,
            uplo,
            n,
            α,
            x,
            incx,
            y,
            incy,
            a,
            lda,
        );
        self.report(result)
    }

    /// See [`level2::trmv`](crate::level2::trmv)
    pub fn trmv<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        trans: MatrixShape,
        diag: MatrixDiagonal,
        n: usize,
        a: &[T],
        lda: usize,
        x: &mut [T],
        incx: isize,
    ) -> Result<(), BlasError> {
        let result = trmv::_trmv(
            &self.settings,
            order,
            uplo,
            trans,
            diag,
            n,
            a,
            lda,
            x,
            incx,
        );
        self.report(result)
    }

    /// See [`level2::trsv`](crate::level2::trsv)
    pub fn trsv<T: BlasScalar>(
        &mut self,
        order: MatrixOrder,
        uplo: MatrixTriangle,
        trans: MatrixShape,
        diag: MatrixDiagonal,
        n: usize,
        a: &[T],
        lda: usize,
        x: &mut [T],
        incx: isize,
    ) -> Result<(), BlasError> {
        let result = trsv::_trsv(
            &self.settings,
            order,
            uplo,
            trans,
            diag,
            n,
            a,
            lda,
            x,
            incx,
        );
        self.report(result)
    }
}

impl ConfigurablePrintTarget for Level2 {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }

    fn print_to_file(&mut self, file: File) {
        self.stream.print_to_file(file)
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }

    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }

    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }

    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
