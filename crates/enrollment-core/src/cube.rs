//! The (year, school, grade) enrollment cube and strided views over it.
//!
//! Cells live in one flat row-major vector. A [`CubeView`] is an index-range
//! descriptor (base offset plus the remaining axes with their lengths and
//! strides) borrowing the cube, so slicing never copies cell data.

use std::fmt;

use crate::config::DatasetConfig;
use crate::error::{EnrollmentError, Result};
use crate::stats::{self, ThresholdMedian};

// ── Axis ──────────────────────────────────────────────────────────────────────

/// One of the three cube axes, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Year,
    School,
    Grade,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Year => "year",
            Axis::School => "school",
            Axis::Grade => "grade",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── EnrollmentCube ────────────────────────────────────────────────────────────

/// Dense `num_years × num_schools × num_grades` array of optional counts.
///
/// `None` marks a cell with no enrollment data recorded. The cube is built once
/// and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentCube {
    config: DatasetConfig,
    cells: Vec<Option<u32>>,
    shape: [usize; 3],
    strides: [usize; 3],
}

impl EnrollmentCube {
    /// Wrap already-concatenated cells, laid out as
    /// `((year * num_schools) + school) * num_grades + grade`.
    pub fn from_cells(config: DatasetConfig, cells: Vec<Option<u32>>) -> Result<Self> {
        let shape = [config.num_years(), config.num_schools(), config.num_grades()];
        let expected: usize = shape.iter().product();
        if cells.len() != expected {
            return Err(EnrollmentError::Config(format!(
                "cube needs {} cells, got {}",
                expected,
                cells.len()
            )));
        }
        let strides = [shape[1] * shape[2], shape[2], 1];
        Ok(Self {
            config,
            cells,
            shape,
            strides,
        })
    }

    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// `[num_years, num_schools, num_grades]`.
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of cells, present or absent.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at a `(year, school position, grade)` coordinate.
    pub fn cell(&self, year: i32, school_idx: usize, grade: i32) -> Result<Option<u32>> {
        self.view()
            .fix_year(year)?
            .fix_school(school_idx)?
            .fix_grade(grade)?
            .scalar()
            .ok_or(EnrollmentError::MissingAxis(Axis::Grade))
    }

    /// A view over the whole cube, axes `(year, school, grade)`.
    pub fn view(&self) -> CubeView<'_> {
        let axes = [Axis::Year, Axis::School, Axis::Grade];
        let dims = axes
            .iter()
            .zip(self.shape.iter().zip(self.strides.iter()))
            .map(|(&axis, (&len, &stride))| Dim { axis, len, stride })
            .collect();
        CubeView {
            cube: self,
            offset: 0,
            dims,
        }
    }

    /// One school across every year and grade: `(year × grade)`.
    pub fn slice_by_school(&self, school_idx: usize) -> Result<CubeView<'_>> {
        self.view().fix_school(school_idx)
    }

    /// One school and grade across every year.
    pub fn slice_by_school_grade(&self, school_idx: usize, grade: i32) -> Result<CubeView<'_>> {
        self.slice_by_school(school_idx)?.fix_grade(grade)
    }

    /// One school and year across every grade.
    pub fn slice_by_school_year(&self, school_idx: usize, year: i32) -> Result<CubeView<'_>> {
        self.slice_by_school(school_idx)?.fix_year(year)
    }

    /// One year across every school and grade: `(school × grade)`.
    pub fn slice_by_year(&self, year: i32) -> Result<CubeView<'_>> {
        self.view().fix_year(year)
    }

    /// One year and grade across every school, in roster order.
    pub fn slice_by_year_grade(&self, year: i32, grade: i32) -> Result<CubeView<'_>> {
        self.slice_by_year(year)?.fix_grade(grade)
    }

    /// One grade across every year and school: `(year × school)`.
    pub fn slice_by_grade(&self, grade: i32) -> Result<CubeView<'_>> {
        self.view().fix_grade(grade)
    }
}

// ── CubeView ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dim {
    axis: Axis,
    len: usize,
    stride: usize,
}

/// Read-only strided window onto an [`EnrollmentCube`].
///
/// Remaining axes keep the cube's `(year, school, grade)` order. A view with no
/// axes left addresses a single cell.
#[derive(Debug, Clone)]
pub struct CubeView<'a> {
    cube: &'a EnrollmentCube,
    offset: usize,
    dims: Vec<Dim>,
}

impl<'a> CubeView<'a> {
    /// Remaining axes, outermost first.
    pub fn axes(&self) -> Vec<Axis> {
        self.dims.iter().map(|d| d.axis).collect()
    }

    pub fn shape(&self) -> Vec<usize> {
        self.dims.iter().map(|d| d.len).collect()
    }

    pub fn ndim(&self) -> usize {
        self.dims.len()
    }

    /// Number of cells addressed by the view.
    pub fn len(&self) -> usize {
        self.dims.iter().map(|d| d.len).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at a multi-dimensional index into the view, `None` when the index
    /// has the wrong rank or falls outside the view.
    pub fn get(&self, index: &[usize]) -> Option<Option<u32>> {
        if index.len() != self.dims.len() {
            return None;
        }
        let mut flat = self.offset;
        for (&i, dim) in index.iter().zip(&self.dims) {
            if i >= dim.len {
                return None;
            }
            flat += i * dim.stride;
        }
        self.cube.cells.get(flat).copied()
    }

    /// The single cell of a zero-dimensional view.
    pub fn scalar(&self) -> Option<Option<u32>> {
        self.get(&[])
    }

    /// Every cell in row-major order, absent cells included.
    pub fn iter(&self) -> impl Iterator<Item = Option<u32>> + '_ {
        (0..self.len()).map(move |linear| self.cube.cells[self.flat_index(linear)])
    }

    /// Present cell values in row-major order.
    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter().flatten()
    }

    /// Copy the addressed cells out in row-major order.
    pub fn to_vec(&self) -> Vec<Option<u32>> {
        self.iter().collect()
    }

    /// Sub-views along the outermost remaining axis.
    ///
    /// For a school view `(year × grade)` this yields one `(grade)` view per
    /// year. A zero-dimensional view yields nothing.
    pub fn outer(&self) -> impl Iterator<Item = CubeView<'a>> + '_ {
        let (len, stride) = self
            .dims
            .first()
            .map(|d| (d.len, d.stride))
            .unwrap_or((0, 0));
        (0..len).map(move |i| CubeView {
            cube: self.cube,
            offset: self.offset + i * stride,
            dims: self.dims[1..].to_vec(),
        })
    }

    /// Fix the year axis at `year`.
    pub fn fix_year(&self, year: i32) -> Result<CubeView<'a>> {
        let offset = self.cube.config.year_offset(year)?;
        self.fix(Axis::Year, offset)
    }

    /// Fix the school axis at roster position `school_idx`.
    pub fn fix_school(&self, school_idx: usize) -> Result<CubeView<'a>> {
        if school_idx >= self.cube.config.num_schools() {
            return Err(EnrollmentError::OutOfRange {
                axis: Axis::School,
                value: school_idx as i64,
            });
        }
        self.fix(Axis::School, school_idx)
    }

    /// Fix the grade axis at `grade`.
    pub fn fix_grade(&self, grade: i32) -> Result<CubeView<'a>> {
        let offset = self.cube.config.grade_offset(grade)?;
        self.fix(Axis::Grade, offset)
    }

    fn fix(&self, axis: Axis, index: usize) -> Result<CubeView<'a>> {
        let pos = self
            .dims
            .iter()
            .position(|d| d.axis == axis)
            .ok_or(EnrollmentError::MissingAxis(axis))?;
        let mut dims = self.dims.clone();
        let dim = dims.remove(pos);
        Ok(CubeView {
            cube: self.cube,
            offset: self.offset + index * dim.stride,
            dims,
        })
    }

    fn flat_index(&self, mut linear: usize) -> usize {
        let mut flat = self.offset;
        for dim in self.dims.iter().rev() {
            flat += (linear % dim.len) * dim.stride;
            linear /= dim.len;
        }
        flat
    }

    // ── Reductions ────────────────────────────────────────────────────────────

    pub fn sum(&self) -> u64 {
        stats::sum(self.iter())
    }

    pub fn mean(&self) -> Option<f64> {
        stats::mean(self.iter())
    }

    pub fn max(&self) -> Option<u32> {
        stats::max(self.iter())
    }

    pub fn min(&self) -> Option<u32> {
        stats::min(self.iter())
    }

    pub fn median(&self) -> Option<f64> {
        stats::median(self.iter())
    }

    pub fn median_above(&self, threshold: u32) -> ThresholdMedian {
        stats::median_above(self.iter(), threshold)
    }
}

impl PartialEq for CubeView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.axes() == other.axes() && self.shape() == other.shape() && self.to_vec() == other.to_vec()
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
