use serde::{Deserialize, Serialize};

/// What a caller is allowed to do, as enforced by the records backend's
/// row-level policies. This server never checks capabilities itself; the
/// table exists so responses can describe the caller's role accurately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ViewOwnProgress,
    ViewClassroomProgress,
    EditProgress,
    ComputeClassAverage,
    ViewAllClassrooms,
}

const STUDENT_CAPABILITIES: &[Capability] = &[Capability::ViewOwnProgress];

const TEACHER_CAPABILITIES: &[Capability] = &[
    Capability::ViewOwnProgress,
    Capability::ViewClassroomProgress,
    Capability::EditProgress,
    Capability::ComputeClassAverage,
];

const HEAD_TEACHER_CAPABILITIES: &[Capability] = &[
    Capability::ViewOwnProgress,
    Capability::ViewClassroomProgress,
    Capability::EditProgress,
    Capability::ComputeClassAverage,
    Capability::ViewAllClassrooms,
];

/// Closed set of roles stored in the `profile.role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
    HeadTeacher,
}

impl Role {
    pub fn capabilities(&self) -> &'static [Capability] {
        match self {
            Role::Student => STUDENT_CAPABILITIES,
            Role::Teacher => TEACHER_CAPABILITIES,
            Role::HeadTeacher => HEAD_TEACHER_CAPABILITIES,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::HeadTeacher => "head_teacher",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "student" => Some(Role::Student),
            "teacher" => Some(Role::Teacher),
            "head_teacher" => Some(Role::HeadTeacher),
            _ => None,
        }
    }
}
