//! Result classification: per-field outcomes merged into one `SolveResult`.
//!
//! Rules
//! - Any `Bad` stage collapses the entire result to all-bad with that stage's
//!   reason; partial successes are discarded.
//! - Otherwise fields default to `na(reason)` and are overwritten with values
//!   wherever a stage produced one.
//! - Status is `OK` when at least one field holds a value, else `NA`;
//!   `BadValue` only in the collapse case.
//!
//! Code cross-refs: `angles::Normalized`, `sides::SideOutcome`, `points::PointTriangle`.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cfg::STRAIGHT;
use crate::points::PointTriangle;
use crate::sides::SideOutcome;
use crate::types::{AngleSet, Angles, FieldKey, Reason, Vertex};

/// Outcome for one reported field. Exactly one tag holds at a time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FieldResult {
    Value { value: f64 },
    Bad { reason: Reason },
    Na { reason: Reason },
}

impl FieldResult {
    #[inline]
    pub fn value(value: f64) -> Self {
        FieldResult::Value { value }
    }
    #[inline]
    pub fn bad(reason: Reason) -> Self {
        FieldResult::Bad { reason }
    }
    #[inline]
    pub fn na(reason: Reason) -> Self {
        FieldResult::Na { reason }
    }

    pub fn as_value(&self) -> Option<f64> {
        match *self {
            FieldResult::Value { value } => Some(value),
            _ => None,
        }
    }

    pub fn reason(&self) -> Option<Reason> {
        match *self {
            FieldResult::Value { .. } => None,
            FieldResult::Bad { reason } | FieldResult::Na { reason } => Some(reason),
        }
    }

    pub fn is_value(&self) -> bool {
        matches!(self, FieldResult::Value { .. })
    }
}

/// Overall classification of a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "OK")]
    Ok,
    BadValue,
    #[serde(rename = "NA")]
    Na,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "OK"),
            Status::BadValue => write!(f, "Bad value"),
            Status::Na => write!(f, "N.A."),
        }
    }
}

/// All nine field outcomes, indexed by `FieldKey`. Serialized as a map keyed
/// by the field names.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<FieldKey, FieldResult>",
    into = "BTreeMap<FieldKey, FieldResult>"
)]
pub struct Fields([FieldResult; 9]);

impl Fields {
    fn filled(f: FieldResult) -> Self {
        Fields([f; 9])
    }

    fn set(&mut self, key: FieldKey, f: FieldResult) {
        self.0[key.index()] = f;
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &FieldResult)> {
        FieldKey::ALL.into_iter().zip(self.0.iter())
    }
}

impl Index<FieldKey> for Fields {
    type Output = FieldResult;
    fn index(&self, key: FieldKey) -> &FieldResult {
        &self.0[key.index()]
    }
}

impl From<Fields> for BTreeMap<FieldKey, FieldResult> {
    fn from(f: Fields) -> Self {
        f.iter().map(|(k, v)| (k, *v)).collect()
    }
}

impl TryFrom<BTreeMap<FieldKey, FieldResult>> for Fields {
    type Error = String;
    fn try_from(mut map: BTreeMap<FieldKey, FieldResult>) -> Result<Self, Self::Error> {
        let mut out = [FieldResult::na(Reason::WaitingForInput); 9];
        for key in FieldKey::ALL {
            out[key.index()] = map
                .remove(&key)
                .ok_or_else(|| format!("missing field `{}`", key))?;
        }
        Ok(Fields(out))
    }
}

/// Result of one solve: per-field outcomes, overall status and an optional
/// complete angle triple for preview drawing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolveResult {
    pub fields: Fields,
    pub status: Status,
    /// Explanation for the status; absent when there is nothing to report.
    #[serde(rename = "statusReason")]
    pub status_reason: Option<Reason>,
    /// Complete, consistent triple if one exists. Not validated further.
    #[serde(rename = "previewAngles")]
    pub preview: Option<Angles>,
}

impl SolveResult {
    pub fn all_na(reason: Reason) -> Self {
        Self {
            fields: Fields::filled(FieldResult::na(reason)),
            status: Status::Na,
            status_reason: Some(reason),
            preview: None,
        }
    }

    pub fn all_bad(reason: Reason) -> Self {
        Self {
            fields: Fields::filled(FieldResult::bad(reason)),
            status: Status::BadValue,
            status_reason: Some(reason),
            preview: None,
        }
    }

    #[inline]
    pub fn field(&self, key: FieldKey) -> &FieldResult {
        &self.fields[key]
    }

    #[inline]
    pub fn value(&self, key: FieldKey) -> Option<f64> {
        self.fields[key].as_value()
    }

    fn from_fields(fields: Fields, status_reason: Option<Reason>, preview: Option<Angles>) -> Self {
        let status = if fields.0.iter().any(FieldResult::is_value) {
            Status::Ok
        } else {
            Status::Na
        };
        Self {
            fields,
            status,
            status_reason,
            preview,
        }
    }
}

/// Stage outputs of the angle/side path that survived without a `Bad`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnglePath {
    /// Fewer than three angles resolvable; sides cannot be attempted.
    Partial { known: AngleSet, reason: Reason },
    /// Complete triple; the side resolver ran.
    Complete { angles: Angles, sides: SideOutcome },
}

/// Classify the angle/side path. `Err` is a hard failure from any stage.
pub fn classify_angle_path(stages: Result<AnglePath, Reason>) -> SolveResult {
    let path = match stages {
        Ok(p) => p,
        Err(reason) => {
            debug!(%reason, "angle path rejected");
            return SolveResult::all_bad(reason);
        }
    };
    match path {
        AnglePath::Partial { known, reason } => {
            let mut fields = Fields::filled(FieldResult::na(reason));
            put_angles(&mut fields, &known);
            SolveResult::from_fields(fields, Some(reason), None)
        }
        AnglePath::Complete { angles, sides } => {
            let side_default = match sides {
                SideOutcome::Missing(reason) => reason,
                SideOutcome::Resolved(_) => Reason::NeedSide,
            };
            let mut fields = Fields::filled(FieldResult::na(side_default));
            put_angles(&mut fields, &AngleSet::from(angles));
            if let SideOutcome::Resolved(s) = sides {
                for v in Vertex::ALL {
                    fields.set(v.side(), FieldResult::value(s.get(v)));
                }
            }
            SolveResult::from_fields(fields, None, Some(angles))
        }
    }
}

/// Classify the point path. `Err` is a hard failure from the geometry stage.
pub fn classify_point_path(stage: Result<PointTriangle, Reason>) -> SolveResult {
    let tri = match stage {
        Ok(t) => t,
        Err(reason) => {
            debug!(%reason, "point triple rejected");
            return SolveResult::all_bad(reason);
        }
    };
    let mut fields = Fields::filled(FieldResult::na(Reason::WaitingForPoints));
    put_angles(&mut fields, &AngleSet::from(tri.angles));
    for v in Vertex::ALL {
        fields.set(v.side(), FieldResult::value(tri.sides.get(v)));
    }
    SolveResult::from_fields(fields, None, Some(tri.angles))
}

/// Known interior `X` yields values for both `X` and `Xext = 180 - X`.
fn put_angles(fields: &mut Fields, known: &AngleSet) {
    for v in Vertex::ALL {
        if let Some(deg) = known.get(v) {
            fields.set(v.interior(), FieldResult::value(deg));
            fields.set(v.exterior(), FieldResult::value(STRAIGHT - deg));
        }
    }
}
