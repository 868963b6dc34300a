//! User roles, their landing pages, and the permissions each role carries.
//!
//! DESIGN
//! ======
//! Roles are a closed enum so every role-keyed table below is an exhaustive
//! `match`; adding a role fails to compile until each table covers it.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Path unauthenticated visitors and unknown roles are sent to.
pub const LOGIN_PATH: &str = "/login";

/// One of the five account roles of the archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Teacher,
    DepartmentHead,
    #[serde(alias = "college_dean")]
    Dean,
    #[serde(alias = "it_manager")]
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Student,
        Role::Teacher,
        Role::DepartmentHead,
        Role::Dean,
        Role::Admin,
    ];

    /// Wire name used by the API and persisted session records.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::DepartmentHead => "department_head",
            Role::Dean => "dean",
            Role::Admin => "admin",
        }
    }

    /// Human-readable role name.
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Teacher => "Teacher",
            Role::DepartmentHead => "Department Head",
            Role::Dean => "Dean",
            Role::Admin => "Administrator",
        }
    }

    /// URL segment of the role's section, also used for `/{section}/stats`.
    pub fn section(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
            Role::DepartmentHead => "department",
            Role::Dean => "dean",
            Role::Admin => "admin",
        }
    }

    /// Canonical landing page for the role.
    pub fn landing_path(self) -> &'static str {
        match self {
            Role::Student => "/student/dashboard",
            Role::Teacher => "/teacher/dashboard",
            Role::DepartmentHead => "/department/dashboard",
            Role::Dean => "/dean/dashboard",
            Role::Admin => "/admin/dashboard",
        }
    }

    /// Sidebar entries shown to the role, as `(label, path)`.
    pub fn nav_items(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Role::Student => &[
                ("Dashboard", "/student/dashboard"),
                ("Browse", "/student/browse"),
                ("Suggestions", "/student/suggestions"),
                ("Profile", "/profile"),
            ],
            Role::Teacher => &[
                ("Dashboard", "/teacher/dashboard"),
                ("Profile", "/profile"),
            ],
            Role::DepartmentHead => &[
                ("Dashboard", "/department/dashboard"),
                ("Profile", "/profile"),
            ],
            Role::Dean => &[("Dashboard", "/dean/dashboard"), ("Profile", "/profile")],
            Role::Admin => &[("Dashboard", "/admin/dashboard"), ("Profile", "/profile")],
        }
    }

    /// Fixed permission set granted to the role.
    pub fn permissions(self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::Student => &[DocumentView, AnalyticsView],
            Role::Teacher => &[
                DocumentView,
                DocumentCreate,
                DocumentEdit,
                DocumentDelete,
                AnalyticsView,
                ExportData,
            ],
            Role::DepartmentHead => &[
                DocumentView,
                DocumentCreate,
                DocumentEdit,
                DocumentDelete,
                DocumentApprove,
                DocumentReject,
                UserView,
                DepartmentView,
                DepartmentEdit,
                AnalyticsView,
                AnalyticsExport,
                ExportData,
                ExportReports,
            ],
            Role::Dean => &[
                DocumentView,
                DocumentCreate,
                DocumentEdit,
                DocumentDelete,
                DocumentApprove,
                DocumentReject,
                UserView,
                UserEdit,
                DepartmentView,
                DepartmentEdit,
                DepartmentManage,
                AnalyticsView,
                AnalyticsExport,
                ExportData,
                ExportReports,
            ],
            Role::Admin => &Permission::ALL,
        }
    }

    pub fn has_permission(self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role string names no known role.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            "department_head" => Ok(Role::DepartmentHead),
            "dean" | "college_dean" => Ok(Role::Dean),
            "admin" | "it_manager" => Ok(Role::Admin),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Landing page for a raw role string; unknown roles go to the login page.
pub fn landing_path_for(raw: &str) -> &'static str {
    raw.parse::<Role>().map_or(LOGIN_PATH, Role::landing_path)
}

/// A single capability checked by role-aware UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Permission {
    DocumentView,
    DocumentCreate,
    DocumentEdit,
    DocumentDelete,
    DocumentApprove,
    DocumentReject,
    UserView,
    UserCreate,
    UserEdit,
    UserDelete,
    UserSuspend,
    DepartmentView,
    DepartmentEdit,
    DepartmentManage,
    SystemMonitor,
    SystemConfig,
    SystemBackup,
    AnalyticsView,
    AnalyticsExport,
    ExportData,
    ExportReports,
}

impl Permission {
    pub const ALL: [Permission; 21] = [
        Permission::DocumentView,
        Permission::DocumentCreate,
        Permission::DocumentEdit,
        Permission::DocumentDelete,
        Permission::DocumentApprove,
        Permission::DocumentReject,
        Permission::UserView,
        Permission::UserCreate,
        Permission::UserEdit,
        Permission::UserDelete,
        Permission::UserSuspend,
        Permission::DepartmentView,
        Permission::DepartmentEdit,
        Permission::DepartmentManage,
        Permission::SystemMonitor,
        Permission::SystemConfig,
        Permission::SystemBackup,
        Permission::AnalyticsView,
        Permission::AnalyticsExport,
        Permission::ExportData,
        Permission::ExportReports,
    ];

    /// `resource:action` name as used by the backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::DocumentView => "document:view",
            Permission::DocumentCreate => "document:create",
            Permission::DocumentEdit => "document:edit",
            Permission::DocumentDelete => "document:delete",
            Permission::DocumentApprove => "document:approve",
            Permission::DocumentReject => "document:reject",
            Permission::UserView => "user:view",
            Permission::UserCreate => "user:create",
            Permission::UserEdit => "user:edit",
            Permission::UserDelete => "user:delete",
            Permission::UserSuspend => "user:suspend",
            Permission::DepartmentView => "department:view",
            Permission::DepartmentEdit => "department:edit",
            Permission::DepartmentManage => "department:manage",
            Permission::SystemMonitor => "system:monitor",
            Permission::SystemConfig => "system:config",
            Permission::SystemBackup => "system:backup",
            Permission::AnalyticsView => "analytics:view",
            Permission::AnalyticsExport => "analytics:export",
            Permission::ExportData => "export:data",
            Permission::ExportReports => "export:reports",
        }
    }
}
