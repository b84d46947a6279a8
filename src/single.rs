use crate::matrix::Matrix;

/// Reference single-threaded multiplication, `C = A * B`.
///
/// Each cell is accumulated in ascending `k`; the parallel path in
/// [`crate::multi`] uses the same per-cell order so the two results are
/// bit-for-bit identical.
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let (n, m) = a.shape();
    let (m_check, p) = b.shape();
    assert_eq!(m, m_check);

    let mut c = Matrix::zeros(n, p);
    for i in 0..n {
        for j in 0..p {
            let mut sum = 0.0;
            for k in 0..m {
                sum += a[(i, k)] * b[(k, j)];
            }
            c[(i, j)] = sum;
        }
    }
    c
}
