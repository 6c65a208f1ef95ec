//! NFS procedure number to display name mapping.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// NFSv3 procedures (RFC 1813).
const NFS_V3: &[(i64, &str)] = &[
    (0, "NULL"),
    (1, "GETATTR"),
    (2, "SETATTR"),
    (3, "LOOKUP"),
    (4, "ACCESS"),
    (5, "READLINK"),
    (6, "READ"),
    (7, "WRITE"),
    (8, "CREATE"),
    (9, "MKDIR"),
    (10, "SYMLINK"),
    (11, "MKNOD"),
    (12, "REMOVE"),
    (13, "RMDIR"),
    (14, "RENAME"),
    (15, "LINK"),
    (16, "READDIR"),
    (17, "READDIRPLUS"),
    (18, "FSSTAT"),
    (19, "FSINFO"),
    (20, "PATHCONF"),
    (21, "COMMIT"),
];

/// Immutable procedure name lookup used when labelling report rows.
#[derive(Debug, Clone, Default)]
pub struct ProcTable {
    names: BTreeMap<i64, String>,
}

impl ProcTable {
    pub fn nfs_v3() -> Self {
        Self::from_pairs(NFS_V3.iter().map(|&(id, name)| (id, name.to_string())))
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (i64, String)>) -> Self {
        Self {
            names: pairs.into_iter().collect(),
        }
    }

    pub fn name(&self, proc: i64) -> Option<&str> {
        self.names.get(&proc).map(String::as_str)
    }

    /// Display name, or the decimal procedure number when unknown.
    pub fn label(&self, proc: i64) -> Cow<'_, str> {
        match self.name(proc) {
            Some(name) => Cow::Borrowed(name),
            None => Cow::Owned(proc.to_string()),
        }
    }
}
