/// Answers whether the current process may mount filesystems.
pub trait PrivilegeCheck {
    /// True when running as the privileged OS account
    fn is_privileged(&self) -> bool;
}

/// Fixed answer, for callers that already know the privilege level.
#[derive(Debug, Clone, Copy)]
pub struct StaticPrivilege(pub bool);

impl PrivilegeCheck for StaticPrivilege {
    fn is_privileged(&self) -> bool {
        self.0
    }
}
