//! Strided gather shared by the backends

/// Walks a strided source region and packs it contiguously into `dst`.
///
/// `shape` and `strides` describe the source in elements, last dimension
/// fastest. The destination is written sequentially, so a column-major
/// matrix gathered with `shape = [cols, rows]`, `strides = [lead, 1]`
/// lands column-contiguous.
///
/// # Safety
///
/// `src` must be valid for reads at every index the shape/strides reach
/// and `dst` must be valid for `shape.iter().product() * elem_size`
/// bytes of writes.
pub(crate) unsafe fn gather_strided(
    src: *const u8,
    dst: *mut u8,
    shape: &[usize],
    strides: &[isize],
    elem_size: usize,
) {
    debug_assert_eq!(shape.len(), strides.len());

    let total: usize = shape.iter().product();
    if total == 0 {
        return;
    }

    let mut index = vec![0usize; shape.len()];
    let mut dst_off = 0usize;
    loop {
        let mut src_elem: isize = 0;
        for (i, &stride) in index.iter().zip(strides) {
            src_elem += *i as isize * stride;
        }
        std::ptr::copy_nonoverlapping(
            src.offset(src_elem * elem_size as isize),
            dst.add(dst_off),
            elem_size,
        );
        dst_off += elem_size;

        // Odometer increment, last dimension fastest
        let mut dim = shape.len();
        loop {
            if dim == 0 {
                return;
            }
            dim -= 1;
            index[dim] += 1;
            if index[dim] < shape[dim] {
                break;
            }
            index[dim] = 0;
        }
    }
}
