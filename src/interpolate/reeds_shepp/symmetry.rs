//! Symmetry expansion of the Reeds-Shepp base words.
//!
//! Every base formula is evaluated on four transformed goals: as is, time
//! flipped (drive the word backward), reflected (swap left and right), and
//! both. A family's parameter matrix maps the formula output `[t, u, v, 1]` to
//! the signed segment values of its word, which lets one formula serve several
//! words, e.g. the CCC family read in reverse.

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector4;

use super::formulas::{self, WordFormula};
use crate::interpolate::path::{words, Steering, WordClass};

/// Goal transformation applied before a base formula is evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    TimeFlip,
    Reflect,
    TimeFlipReflect,
}

impl Symmetry {
    /// Evaluation order, which is also the tie-break order within a family
    pub const ALL: [Symmetry; 4] = [
        Symmetry::Identity,
        Symmetry::TimeFlip,
        Symmetry::Reflect,
        Symmetry::TimeFlipReflect,
    ];

    pub fn is_time_flipped(self) -> bool {
        matches!(self, Symmetry::TimeFlip | Symmetry::TimeFlipReflect)
    }

    pub fn is_reflected(self) -> bool {
        matches!(self, Symmetry::Reflect | Symmetry::TimeFlipReflect)
    }

    pub fn apply(self, x: f64, y: f64, phi: f64) -> (f64, f64, f64) {
        match self {
            Symmetry::Identity => (x, y, phi),
            Symmetry::TimeFlip => (-x, y, -phi),
            Symmetry::Reflect => (x, -y, -phi),
            Symmetry::TimeFlipReflect => (-x, -y, phi),
        }
    }
}

/// Whether a family reads its formula from the start or from the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    Forward,
    /// Goal seen from the end pose, so the word is solved in reverse order
    Backward,
}

impl Frame {
    pub fn apply(self, x: f64, y: f64, phi: f64) -> (f64, f64, f64) {
        match self {
            Frame::Forward => (x, y, phi),
            Frame::Backward => {
                let (s, c) = phi.sin_cos();
                (x * c + y * s, x * s - y * c, phi)
            }
        }
    }
}

/// Row-major 4 x `cols` matrix with rows for t, u, v and a constant offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterMatrix {
    cols: usize,
    data: &'static [f64],
}

impl ParameterMatrix {
    const fn new(cols: usize, data: &'static [f64]) -> Self {
        Self { cols, data }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn column(&self, j: usize) -> Vector4<f64> {
        Vector4::from_fn(|i, _| self.data[i * self.cols + j])
    }

    /// Signed segment values for formula output `params`
    pub fn apply(&self, params: [f64; 3], time_flip: bool) -> Vec<f64> {
        let [t, u, v] = params;
        let row = Vector4::new(t, u, v, 1.0);
        let sign = if time_flip { -1.0 } else { 1.0 };
        (0..self.cols).map(|j| sign * row.dot(&self.column(j))).collect()
    }
}

const H: f64 = FRAC_PI_2;

#[rustfmt::skip]
const IDENTITY3: ParameterMatrix = ParameterMatrix::new(3, &[
    1.0, 0.0, 0.0,
    0.0, 1.0, 0.0,
    0.0, 0.0, 1.0,
    0.0, 0.0, 0.0,
]);

#[rustfmt::skip]
const REVERSE3: ParameterMatrix = ParameterMatrix::new(3, &[
    0.0, 0.0, 1.0,
    0.0, 1.0, 0.0,
    1.0, 0.0, 0.0,
    0.0, 0.0, 0.0,
]);

/// (t, u, -u, v)
#[rustfmt::skip]
const CUSP_MIDDLE4: ParameterMatrix = ParameterMatrix::new(4, &[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, -1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 0.0,
]);

/// (t, u, u, v)
#[rustfmt::skip]
const EQUAL_MIDDLE4: ParameterMatrix = ParameterMatrix::new(4, &[
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
    0.0, 0.0, 0.0, 0.0,
]);

/// (t, -pi/2, u, v)
#[rustfmt::skip]
const QUARTER_TURN_FIRST: ParameterMatrix = ParameterMatrix::new(4, &[
    1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
    0.0, -H, 0.0, 0.0,
]);

/// (v, u, -pi/2, t)
#[rustfmt::skip]
const QUARTER_TURN_LAST: ParameterMatrix = ParameterMatrix::new(4, &[
    0.0, 0.0, 0.0, 1.0,
    0.0, 1.0, 0.0, 0.0,
    1.0, 0.0, 0.0, 0.0,
    0.0, 0.0, -H, 0.0,
]);

/// (t, -pi/2, u, -pi/2, v)
#[rustfmt::skip]
const QUARTER_TURNS_BOTH: ParameterMatrix = ParameterMatrix::new(5, &[
    1.0, 0.0, 0.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.0, 0.0, 1.0,
    0.0, -H, 0.0, -H, 0.0,
]);

/// One base formula together with how its output becomes a word
#[derive(Debug, Clone, Copy)]
pub struct WordFamily {
    pub class: WordClass,
    pub formula: WordFormula,
    pub frame: Frame,
    pub matrix: ParameterMatrix,
    /// Word without and with reflection
    pub words: [&'static [Steering]; 2],
}

impl WordFamily {
    pub fn word(&self, symmetry: Symmetry) -> &'static [Steering] {
        if symmetry.is_reflected() {
            self.words[1]
        } else {
            self.words[0]
        }
    }

    /// Signed segment values of this family's word under `symmetry`, or
    /// `None` when the base formula has no solution.
    pub fn solve(&self, x: f64, y: f64, phi: f64, symmetry: Symmetry, tol: f64) -> Option<Vec<f64>> {
        let (x, y, phi) = self.frame.apply(x, y, phi);
        let (x, y, phi) = symmetry.apply(x, y, phi);
        let params = (self.formula)(x, y, phi, tol)?;
        Some(self.matrix.apply(params, symmetry.is_time_flipped()))
    }
}

const fn family(
    class: WordClass,
    formula: WordFormula,
    frame: Frame,
    matrix: ParameterMatrix,
    words: [&'static [Steering]; 2],
) -> WordFamily {
    WordFamily {
        class,
        formula,
        frame,
        matrix,
        words,
    }
}

/// Evaluation order, which is also the tie-break order across families
#[rustfmt::skip]
pub const FAMILIES: [WordFamily; 11] = [
    family(WordClass::CSC, formulas::left_straight_left, Frame::Forward, IDENTITY3, [words::LSL, words::RSR]),
    family(WordClass::CSC, formulas::left_straight_right, Frame::Forward, IDENTITY3, [words::LSR, words::RSL]),
    family(WordClass::CCC, formulas::left_x_right_left, Frame::Forward, IDENTITY3, [words::LRL, words::RLR]),
    family(WordClass::CCC, formulas::left_x_right_left, Frame::Backward, REVERSE3, [words::LRL, words::RLR]),
    family(WordClass::CCCC, formulas::left_right_x_left_right, Frame::Forward, CUSP_MIDDLE4, [words::LRLR, words::RLRL]),
    family(WordClass::CCCC, formulas::left_x_right_left_x_right, Frame::Forward, EQUAL_MIDDLE4, [words::LRLR, words::RLRL]),
    family(WordClass::CCSC, formulas::left_x_right90_straight_left, Frame::Forward, QUARTER_TURN_FIRST, [words::LRSL, words::RLSR]),
    family(WordClass::CCSC, formulas::left_x_right90_straight_right, Frame::Forward, QUARTER_TURN_FIRST, [words::LRSR, words::RLSL]),
    family(WordClass::CCSC, formulas::left_x_right90_straight_left, Frame::Backward, QUARTER_TURN_LAST, [words::LSRL, words::RSLR]),
    family(WordClass::CCSC, formulas::left_x_right90_straight_right, Frame::Backward, QUARTER_TURN_LAST, [words::RSRL, words::LSLR]),
    family(WordClass::CCSCC, formulas::left_x_right90_straight_left90_x_right, Frame::Forward, QUARTER_TURNS_BOTH, [words::LRSLR, words::RLSRL]),
];
