//! Row-major dense matrix storage and the whitespace-delimited text format.

use std::{
    fs,
    io::{self, BufRead, Write},
    ops::{Index, IndexMut},
    path::Path,
};

use num_traits::Zero;

use crate::{common::Float, error::Error};

/// A dense `nrows x ncols` grid of `Float` values.
///
/// Values are stored row-major in one contiguous allocation, so a range of
/// consecutive rows is a contiguous slice of the backing storage. The shape
/// is fixed at construction; both dimensions are at least one for any
/// matrix produced by [`Matrix::load`].
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    nrows: usize,
    ncols: usize,
    data: Vec<Float>,
}

impl Matrix {
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            data: vec![Float::zero(); nrows * ncols],
        }
    }

    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> Float) -> Self {
        let mut mat = Self::zeros(nrows, ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                mat[(i, j)] = f(i, j);
            }
        }
        mat
    }

    /// Builds a matrix from explicit rows. All rows must have equal length.
    pub fn from_rows(rows: &[Vec<Float>]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|r| r.len() == ncols));

        Self {
            nrows,
            ncols,
            data: rows.concat(),
        }
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// The backing row-major storage; row `i` occupies
    /// `[i * ncols, (i + 1) * ncols)`.
    pub fn as_mut_slice(&mut self) -> &mut [Float] {
        &mut self.data
    }

    /// Reads a matrix from a text file: a `rows cols` header line followed
    /// by `rows` lines of whitespace-separated values.
    ///
    /// The loader is lenient about missing data: a line with fewer than
    /// `cols` values leaves the remaining cells at zero, and missing lines
    /// leave whole rows at zero. A token that is present but does not parse
    /// as a number is an error.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let file = fs::File::open(path).map_err(|source| Error::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::read_from(io::BufReader::new(file), path)
    }

    fn read_from<R: BufRead>(reader: R, path: &Path) -> Result<Self, Error> {
        let io_err = |source| Error::Io {
            path: path.to_owned(),
            source,
        };
        let malformed = || Error::MalformedHeader(path.to_owned());

        let mut lines = reader.lines();

        let header = lines.next().ok_or_else(malformed)?.map_err(io_err)?;
        let mut fields = header.split_whitespace();
        let nrows: usize = fields
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(malformed)?;
        let ncols: usize = fields
            .next()
            .and_then(|t| t.parse().ok())
            .ok_or_else(malformed)?;
        if nrows == 0 || ncols == 0 || fields.next().is_some() {
            return Err(malformed());
        }

        let mut mat = Self::zeros(nrows, ncols);
        for i in 0..nrows {
            let Some(line) = lines.next() else { break };
            let line = line.map_err(io_err)?;

            for (j, token) in line.split_whitespace().take(ncols).enumerate() {
                mat[(i, j)] = token.parse().map_err(|_| Error::InvalidValue {
                    path: path.to_owned(),
                    value: token.to_owned(),
                })?;
            }
        }

        Ok(mat)
    }

    /// Writes the matrix in the same text format read by [`Matrix::load`],
    /// each value fixed-point with six decimal digits and a trailing space.
    pub fn store(&self, path: &Path) -> Result<(), Error> {
        let io_err = |source| Error::Io {
            path: path.to_owned(),
            source,
        };

        let file = fs::File::create(path).map_err(io_err)?;
        let mut writer = io::BufWriter::new(file);
        self.write_to(&mut writer).map_err(io_err)?;
        writer.flush().map_err(io_err)
    }

    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{} {}", self.nrows, self.ncols)?;
        for i in 0..self.nrows {
            for j in 0..self.ncols {
                write!(writer, "{:.6} ", self[(i, j)])?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Float;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Float {
        &self.data[i * self.ncols + j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Float {
        &mut self.data[i * self.ncols + j]
    }
}
