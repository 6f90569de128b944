use crate::platform::PrivilegeCheck;
use log::debug;

/// Privilege check against the effective user id.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootPrivilege;

impl PrivilegeCheck for RootPrivilege {
    fn is_privileged(&self) -> bool {
        let euid = nix::unistd::geteuid();
        debug!("Effective uid is {}", euid);
        euid.is_root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_effective_uid() {
        let expected = nix::unistd::geteuid().as_raw() == 0;
        assert_eq!(RootPrivilege.is_privileged(), expected);
    }
}
