/// Gate for the unlisted admin entry path.
///
/// The admin UI lives behind a secret path segment rather than a public
/// login page; this only answers whether a candidate segment matches the
/// configured one. It is obscurity, not security, and every mutating
/// endpoint still demands a valid session.
pub trait IVerifyAdminPathUseCase: Send + Sync {
    fn execute(&self, path: &str) -> bool;
}

pub struct VerifyAdminPathUseCase {
    admin_path: Option<String>,
}

impl VerifyAdminPathUseCase {
    pub fn new(admin_path: Option<String>) -> Self {
        Self {
            admin_path: admin_path.filter(|p| !p.trim().is_empty()),
        }
    }
}

impl IVerifyAdminPathUseCase for VerifyAdminPathUseCase {
    fn execute(&self, path: &str) -> bool {
        match self.admin_path.as_deref() {
            Some(expected) => expected == path,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_only() {
        let use_case = VerifyAdminPathUseCase::new(Some("velvet-otter".to_string()));
        assert!(use_case.execute("velvet-otter"));
        assert!(!use_case.execute("velvet-otter/"));
        assert!(!use_case.execute("Velvet-Otter"));
        assert!(!use_case.execute(""));
    }

    #[test]
    fn test_unconfigured_path_rejects_everything() {
        let use_case = VerifyAdminPathUseCase::new(None);
        assert!(!use_case.execute("anything"));

        let blank = VerifyAdminPathUseCase::new(Some("  ".to_string()));
        assert!(!blank.execute("  "));
    }
}
