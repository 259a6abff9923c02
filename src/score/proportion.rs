use ndarray::{Array2, Axis, Zip};
use tracing::warn;

use crate::matrix::{ProportionMatrix, WideMatrix};

/// Divide each row of `counts` by its row total.
///
/// A row that sums to zero becomes all NaN (0/0); it is not coerced to zero.
/// Rows are independent and normalized in parallel.
pub fn normalize_rows(counts: &Array2<f64>) -> Array2<f64> {
    let totals = counts.sum_axis(Axis(1));
    let mut out = counts.to_owned();
    Zip::from(out.rows_mut())
        .and(&totals)
        .par_for_each(|mut row, &total| row.mapv_inplace(|c| c / total));
    out
}

/// Per-area relative frequencies of a wide count matrix. Shape and labels are preserved.
pub fn proportions(matrix: &WideMatrix) -> ProportionMatrix {
    let empty = matrix.counts().rows().into_iter()
        .filter(|row| row.sum() == 0.0)
        .count();
    if empty > 0 {
        warn!(areas = empty, "[score::proportions] {empty} area(s) have no observations; their proportions are NaN");
    }
    ProportionMatrix::from_wide(matrix, normalize_rows(matrix.counts()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::GeoId;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn rows_sum_to_one() {
        let counts = array![[3.0, 1.0, 0.0], [2.0, 2.0, 4.0], [0.0, 0.0, 7.0]];
        let props = normalize_rows(&counts);
        for row in props.rows() {
            assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-12);
        }
        assert_relative_eq!(props[[0, 0]], 0.75);
        assert_relative_eq!(props[[1, 2]], 0.5);
    }

    #[test]
    fn zero_row_is_nan() {
        let props = normalize_rows(&array![[0.0, 0.0], [1.0, 3.0]]);
        assert!(props.row(0).iter().all(|p| p.is_nan()));
        assert_eq!(props.row(1).to_vec(), vec![0.25, 0.75]);
    }

    #[test]
    fn second_pass_is_a_no_op_only_on_normalized_rows() {
        let counts = array![[5.0, 5.0], [1.0, 3.0]];
        let once = normalize_rows(&counts);
        let twice = normalize_rows(&once);
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12);
        }
        assert_ne!(once, counts);
    }

    #[test]
    fn shape_and_labels_are_preserved() {
        let matrix = WideMatrix::new(
            "geo",
            vec![GeoId::new("A"), GeoId::new("B")],
            vec!["x".into(), "y".into(), "z".into()],
            array![[1.0, 1.0, 2.0], [0.0, 0.0, 0.0]],
        ).unwrap();
        let props = proportions(&matrix);
        assert_eq!(props.values().dim(), (2, 3));
        assert_eq!(props.geo_ids(), matrix.geo_ids());
        assert_eq!(props.categories(), matrix.categories());
        assert_eq!(props.get(&GeoId::new("A"), "z"), Some(0.5));
        assert!(props.get(&GeoId::new("B"), "x").unwrap().is_nan());
    }
}
