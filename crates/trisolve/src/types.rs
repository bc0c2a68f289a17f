//! Basic value types shared by the solver stages.
//!
//! - `Vertex`, `FieldKey`: closed vocabularies for the three vertices and the
//!   nine reported fields (`A,B,C,Aext,Bext,Cext,a,b,c`).
//! - `AngleSet` (possibly partial) and `Angles` (complete) interior triples.
//! - `Inputs`: the nine optional user-supplied values.
//! - `Reason`: every NA/Bad explanation the solver can report.

use std::fmt;

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::cfg::STRAIGHT;

/// A clicked canvas point.
pub type Point = Vector2<f64>;

/// Triangle vertex label. The side opposite vertex `A` is `a`, and so on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        }
    }

    pub fn interior(self) -> FieldKey {
        match self {
            Vertex::A => FieldKey::A,
            Vertex::B => FieldKey::B,
            Vertex::C => FieldKey::C,
        }
    }

    pub fn exterior(self) -> FieldKey {
        match self {
            Vertex::A => FieldKey::Aext,
            Vertex::B => FieldKey::Bext,
            Vertex::C => FieldKey::Cext,
        }
    }

    /// Key of the side opposite this vertex.
    pub fn side(self) -> FieldKey {
        match self {
            Vertex::A => FieldKey::SideA,
            Vertex::B => FieldKey::SideB,
            Vertex::C => FieldKey::SideC,
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the nine reported quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldKey {
    A,
    B,
    C,
    Aext,
    Bext,
    Cext,
    #[serde(rename = "a")]
    SideA,
    #[serde(rename = "b")]
    SideB,
    #[serde(rename = "c")]
    SideC,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::A,
        FieldKey::B,
        FieldKey::C,
        FieldKey::Aext,
        FieldKey::Bext,
        FieldKey::Cext,
        FieldKey::SideA,
        FieldKey::SideB,
        FieldKey::SideC,
    ];

    /// Position in `ALL`; also the slot in `SolveResult` field storage.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::A => "A",
            FieldKey::B => "B",
            FieldKey::C => "C",
            FieldKey::Aext => "Aext",
            FieldKey::Bext => "Bext",
            FieldKey::Cext => "Cext",
            FieldKey::SideA => "a",
            FieldKey::SideB => "b",
            FieldKey::SideC => "c",
        }
    }

    /// Case-sensitive: `"A"` is an angle, `"a"` a side.
    pub fn parse(s: &str) -> Option<FieldKey> {
        FieldKey::ALL.into_iter().find(|k| k.as_str() == s)
    }

    pub fn vertex(self) -> Vertex {
        match self {
            FieldKey::A | FieldKey::Aext | FieldKey::SideA => Vertex::A,
            FieldKey::B | FieldKey::Bext | FieldKey::SideB => Vertex::B,
            FieldKey::C | FieldKey::Cext | FieldKey::SideC => Vertex::C,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interior angles in degrees, each possibly unknown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AngleSet(pub [Option<f64>; 3]);

impl AngleSet {
    #[inline]
    pub fn get(&self, v: Vertex) -> Option<f64> {
        self.0[v.index()]
    }

    #[inline]
    pub fn set(&mut self, v: Vertex, deg: Option<f64>) {
        self.0[v.index()] = deg;
    }

    pub fn known_count(&self) -> usize {
        self.0.iter().filter(|a| a.is_some()).count()
    }

    /// Sum of the known angles (unknowns count as zero).
    pub fn known_sum(&self) -> f64 {
        self.0.iter().flatten().sum()
    }

    /// The full triple if all three angles are known.
    pub fn complete(&self) -> Option<Angles> {
        match self.0 {
            [Some(a), Some(b), Some(c)] => Some(Angles([a, b, c])),
            _ => None,
        }
    }
}

/// A fully known interior-angle triple in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Angles(pub [f64; 3]);

impl Angles {
    #[inline]
    pub fn get(&self, v: Vertex) -> f64 {
        self.0[v.index()]
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Exterior angle `180 - X` at vertex `v`.
    #[inline]
    pub fn exterior(&self, v: Vertex) -> f64 {
        STRAIGHT - self.get(v)
    }

    pub fn radians(&self) -> [f64; 3] {
        self.0.map(f64::to_radians)
    }
}

impl From<Angles> for AngleSet {
    fn from(a: Angles) -> Self {
        AngleSet(a.0.map(Some))
    }
}

/// Side lengths `(a, b, c)`, `a` opposite `A`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sides(pub [f64; 3]);

impl Sides {
    #[inline]
    pub fn get(&self, v: Vertex) -> f64 {
        self.0[v.index()]
    }
}

/// The nine optional user inputs. Absence is distinct from zero.
///
/// Invariant: stored values are finite; setters turn non-finite values into
/// absence so that NaN never reaches the solver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    #[serde(rename = "A", default)]
    angle_a: Option<f64>,
    #[serde(rename = "B", default)]
    angle_b: Option<f64>,
    #[serde(rename = "C", default)]
    angle_c: Option<f64>,
    #[serde(rename = "Aext", default)]
    ext_a: Option<f64>,
    #[serde(rename = "Bext", default)]
    ext_b: Option<f64>,
    #[serde(rename = "Cext", default)]
    ext_c: Option<f64>,
    #[serde(rename = "a", default)]
    side_a: Option<f64>,
    #[serde(rename = "b", default)]
    side_b: Option<f64>,
    #[serde(rename = "c", default)]
    side_c: Option<f64>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set` for tests and callers that hold plain numbers.
    pub fn with(mut self, key: FieldKey, value: f64) -> Self {
        self.set(key, Some(value));
        self
    }

    pub fn get(&self, key: FieldKey) -> Option<f64> {
        match key {
            FieldKey::A => self.angle_a,
            FieldKey::B => self.angle_b,
            FieldKey::C => self.angle_c,
            FieldKey::Aext => self.ext_a,
            FieldKey::Bext => self.ext_b,
            FieldKey::Cext => self.ext_c,
            FieldKey::SideA => self.side_a,
            FieldKey::SideB => self.side_b,
            FieldKey::SideC => self.side_c,
        }
    }

    pub fn set(&mut self, key: FieldKey, value: Option<f64>) {
        *self.slot_mut(key) = value.filter(|v| v.is_finite());
    }

    #[inline]
    pub fn interior(&self, v: Vertex) -> Option<f64> {
        self.get(v.interior())
    }

    #[inline]
    pub fn exterior(&self, v: Vertex) -> Option<f64> {
        self.get(v.exterior())
    }

    #[inline]
    pub fn side(&self, v: Vertex) -> Option<f64> {
        self.get(v.side())
    }

    pub fn is_empty(&self) -> bool {
        FieldKey::ALL.iter().all(|k| self.get(*k).is_none())
    }

    fn slot_mut(&mut self, key: FieldKey) -> &mut Option<f64> {
        match key {
            FieldKey::A => &mut self.angle_a,
            FieldKey::B => &mut self.angle_b,
            FieldKey::C => &mut self.angle_c,
            FieldKey::Aext => &mut self.ext_a,
            FieldKey::Bext => &mut self.ext_b,
            FieldKey::Cext => &mut self.ext_c,
            FieldKey::SideA => &mut self.side_a,
            FieldKey::SideB => &mut self.side_b,
            FieldKey::SideC => &mut self.side_c,
        }
    }
}

/// Why a field is not available or why the whole input was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reason {
    /// Nothing entered yet.
    WaitingForInput,
    /// Fewer than three points clicked.
    WaitingForPoints,
    /// Clicked points lie (nearly) on one line.
    Collinear,
    /// A vertex angle from points is undefined or out of range.
    InvalidPointAngles,
    /// Angles do not add up to 180 degrees within tolerance.
    AngleSum,
    /// Interior and exterior angle at one vertex disagree.
    InteriorExteriorMismatch(Vertex),
    /// A resolved angle lies outside (0, 180).
    InvalidAngle(Vertex),
    /// Fewer than two angles known.
    NeedTwoAngles,
    /// Two angles leave no room for a valid third.
    NotATriangle,
    /// No side length supplied.
    NeedSide,
    /// The honored side length is zero or negative.
    NonPositiveSide,
    /// The law-of-sines scale factor is not finite.
    SideScale,
    /// History panel before the first recorded solve.
    NoHistory,
    /// History panel right after a replay.
    HistoryInUse,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::WaitingForInput => write!(f, "Waiting for input."),
            Reason::WaitingForPoints => write!(f, "Waiting for 3 points on the canvas."),
            Reason::Collinear => write!(f, "Points are collinear (not a valid triangle)."),
            Reason::InvalidPointAngles => write!(f, "Triangle angles are invalid."),
            Reason::AngleSum => write!(f, "Angles do not sum to 180 degrees."),
            Reason::InteriorExteriorMismatch(v) => {
                write!(f, "Interior and exterior for {} do not sum to 180.", v)
            }
            Reason::InvalidAngle(v) => write!(f, "Angle {} is not valid.", v),
            Reason::NeedTwoAngles => write!(f, "Need at least two angles to solve."),
            Reason::NotATriangle => write!(f, "Angles do not form a valid triangle."),
            Reason::NeedSide => write!(f, "Provide one side length to compute sides."),
            Reason::NonPositiveSide => write!(f, "Side length must be greater than zero."),
            Reason::SideScale => write!(f, "Cannot compute side lengths with given values."),
            Reason::NoHistory => write!(f, "No history yet."),
            Reason::HistoryInUse => write!(f, "History used as current input."),
        }
    }
}
