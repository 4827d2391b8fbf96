//! Accelerator backend operation implementations
//!
//! Each trait method validates shapes on the issuing thread, captures
//! plain-data descriptors of the operands, and enqueues a kernel
//! closure that resolves them against the worker's buffer arena. The
//! closure calls the same shared kernel the host backend calls, so the
//! backends agree on rounding.

mod broadcast;
mod factor;
mod level1;
mod level2;
mod level3;
mod matrix;
mod reduce;

use crate::dense::{Matrix, Vector};
use crate::dtype::Element;
use crate::runtime::accel::{AccelRuntime, Arena};

/// Descriptor of a vector operand, safe to move into a queued kernel.
#[derive(Clone, Copy)]
pub(crate) struct VecArgs {
    handle: u64,
    byte_offset: usize,
    len: usize,
    inc: usize,
}

impl VecArgs {
    pub(crate) fn of<T: Element>(v: &Vector<T, AccelRuntime>) -> Self {
        Self {
            handle: v.handle(),
            byte_offset: v.byte_offset(),
            len: v.len(),
            inc: v.inc(),
        }
    }

    fn span(&self) -> usize {
        if self.len == 0 {
            0
        } else {
            (self.len - 1) * self.inc + 1
        }
    }

    /// Resolves the descriptor inside a queued kernel.
    pub(crate) fn slice<'a, T: Element>(&self, arena: &Arena) -> &'a [T] {
        let span = self.span();
        if span == 0 {
            return &[];
        }
        unsafe { arena.raw(self.handle, self.byte_offset, span) }
    }

    /// Mutable counterpart of [`VecArgs::slice`]. The operand must not
    /// alias the kernel's other operands, which is the caller's
    /// published contract.
    pub(crate) fn slice_mut<'a, T: Element>(&self, arena: &mut Arena) -> &'a mut [T] {
        let span = self.span();
        if span == 0 {
            return &mut [];
        }
        unsafe { arena.raw_mut(self.handle, self.byte_offset, span) }
    }
}

/// Descriptor of a matrix operand, safe to move into a queued kernel.
#[derive(Clone, Copy)]
pub(crate) struct MatArgs {
    handle: u64,
    byte_offset: usize,
    rows: usize,
    cols: usize,
    lead: usize,
}

impl MatArgs {
    pub(crate) fn of<T: Element>(m: &Matrix<T, AccelRuntime>) -> Self {
        Self {
            handle: m.handle(),
            byte_offset: m.byte_offset(),
            rows: m.rows(),
            cols: m.cols(),
            lead: m.lead(),
        }
    }

    fn span(&self) -> usize {
        if self.rows == 0 || self.cols == 0 {
            0
        } else {
            (self.cols - 1) * self.lead + self.rows
        }
    }

    pub(crate) fn slice<'a, T: Element>(&self, arena: &Arena) -> &'a [T] {
        let span = self.span();
        if span == 0 {
            return &[];
        }
        unsafe { arena.raw(self.handle, self.byte_offset, span) }
    }

    pub(crate) fn slice_mut<'a, T: Element>(&self, arena: &mut Arena) -> &'a mut [T] {
        let span = self.span();
        if span == 0 {
            return &mut [];
        }
        unsafe { arena.raw_mut(self.handle, self.byte_offset, span) }
    }
}
