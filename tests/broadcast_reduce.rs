//! Row/column broadcasts and segmented reductions

mod common;

use common::host_client;
use lacore::prelude::*;

type M = Matrix<f64, HostRuntime>;
type V = Vector<f64, HostRuntime>;

#[test]
fn set_rows_fills_from_row_vector() {
    let c = host_client();
    let mut a = M::zeros(2, 3, &c);
    let x = V::from_slice(&[1.0, 2.0, 3.0], &c);
    c.set_rows(&mut a, &x);
    assert_eq!(a.to_vec(), vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]);
}

#[test]
fn set_columns_then_dot_columns_gives_dot_xx() {
    let c = host_client();
    let x = V::from_slice(&[1.0, 2.0, 3.0], &c);
    let mut a = M::zeros(3, 4, &c);
    c.set_columns(&mut a, &x);
    let mut y = V::zeros(4, &c);
    c.dot_columns(&a, &mut y);
    let dxx = c.dot(&x, &x);
    assert_eq!(y.to_vec(), vec![dxx; 4]);
}

#[test]
fn set_columns_then_dot_columns_padded_layout_agrees() {
    let c = host_client();
    let x = V::from_slice(&[1.0, 2.0, 3.0], &c);
    let mut packed = M::zeros(3, 2, &c);
    let mut padded = M::zeros_padded(3, 2, 7, &c);
    c.set_columns(&mut packed, &x);
    c.set_columns(&mut padded, &x);
    let mut y1 = V::zeros(2, &c);
    let mut y2 = V::zeros(2, &c);
    c.dot_columns(&packed, &mut y1);
    c.dot_columns(&padded, &mut y2);
    assert_eq!(y1.to_vec(), y2.to_vec());
}

#[test]
fn add_then_sub_rows_restores() {
    let c = host_client();
    let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let mut a = M::from_slice(&data, 2, 3, &c);
    let x = V::from_slice(&[0.5, -1.5, 2.5], &c);
    c.add_rows(&mut a, &x);
    c.sub_rows(&mut a, &x);
    assert_eq!(a.to_vec(), data.to_vec());
}

#[test]
fn add_columns_shifts_every_column() {
    let c = host_client();
    let mut a = M::zeros(2, 3, &c);
    let x = V::from_slice(&[1.0, -1.0], &c);
    c.add_columns(&mut a, &x);
    assert_eq!(a.to_vec(), vec![1.0, -1.0, 1.0, -1.0, 1.0, -1.0]);
}

#[test]
fn reduction_conventions() {
    let c = host_client();
    // [[1, 3, 5], [2, 4, 6]]
    let a = M::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3, &c);

    let mut per_col_sq = V::zeros(3, &c);
    c.dot_columns(&a, &mut per_col_sq);
    assert_eq!(per_col_sq.to_vec(), vec![5.0, 25.0, 61.0]);

    let mut per_row_sq = V::zeros(2, &c);
    c.dot_rows(&a, &mut per_row_sq);
    assert_eq!(per_row_sq.to_vec(), vec![35.0, 56.0]);

    // sum_columns reduces across columns, one entry per row.
    let mut per_row = V::zeros(2, &c);
    c.sum_columns(&a, &mut per_row);
    assert_eq!(per_row.to_vec(), vec![9.0, 12.0]);

    // sum_rows reduces across rows, one entry per column.
    let mut per_col = V::zeros(3, &c);
    c.sum_rows(&a, &mut per_col);
    assert_eq!(per_col.to_vec(), vec![3.0, 7.0, 11.0]);
}

#[test]
fn reduce_into_strided_output() {
    let c = host_client();
    let a = M::from_slice(&[1.0, 2.0, 3.0, 4.0], 2, 2, &c);
    let out = M::zeros(2, 2, &c);
    let mut row = out.row(0);
    c.sum_rows(&a, &mut row);
    assert_eq!(out.to_vec(), vec![3.0, 0.0, 7.0, 0.0]);
}
