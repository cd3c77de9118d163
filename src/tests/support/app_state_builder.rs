use std::sync::Arc;
use std::time::Duration;

use actix_web::web;

use crate::modules::auth::application::use_cases::check_session::ICheckSessionUseCase;
use crate::modules::auth::application::use_cases::login_admin::ILoginAdminUseCase;
use crate::modules::auth::application::use_cases::logout_admin::ILogoutAdminUseCase;
use crate::modules::auth::application::use_cases::verify_admin_path::{
    IVerifyAdminPathUseCase, VerifyAdminPathUseCase,
};
use crate::modules::content::application::use_cases::commit_section::ICommitSectionUseCase;
use crate::modules::content::application::use_cases::load_section::ILoadSectionUseCase;
use crate::modules::editor::application::save::SaveCoordinator;
use crate::modules::media::application::policies::upload_policy::UploadPolicy;
use crate::modules::status::adapter::ToastRegistry;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    load_section: Option<Arc<dyn ILoadSectionUseCase + Send + Sync>>,
    commit_section: Option<Arc<dyn ICommitSectionUseCase + Send + Sync>>,
    save_coordinator: Option<Arc<SaveCoordinator>>,
    statuses: Option<Arc<ToastRegistry>>,
    upload_policy: Option<UploadPolicy>,
    session_ttl: Option<Duration>,
    login_admin: Option<Arc<dyn ILoginAdminUseCase + Send + Sync>>,
    check_session: Option<Arc<dyn ICheckSessionUseCase + Send + Sync>>,
    logout_admin: Option<Arc<dyn ILogoutAdminUseCase + Send + Sync>>,
    verify_admin_path: Option<Arc<dyn IVerifyAdminPathUseCase + Send + Sync>>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let (coordinator, _store) = memory_coordinator();
        Self {
            load_section: Some(Arc::new(StubLoadSectionUseCase)),
            commit_section: Some(Arc::new(StubCommitSectionUseCase)),
            save_coordinator: Some(coordinator),
            statuses: Some(Arc::new(ToastRegistry::new())),
            upload_policy: Some(UploadPolicy::new("test-bucket".to_string())),
            session_ttl: Some(Duration::from_secs(3600)),
            login_admin: Some(Arc::new(StubLoginAdminUseCase)),
            check_session: Some(Arc::new(StubCheckSession)),
            logout_admin: Some(Arc::new(StubLogoutAdminUseCase)),
            verify_admin_path: Some(Arc::new(VerifyAdminPathUseCase::new(None))),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_load_section(
        mut self,
        uc: impl ILoadSectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_section = Some(Arc::new(uc));
        self
    }

    pub fn with_commit_section(
        mut self,
        uc: impl ICommitSectionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.commit_section = Some(Arc::new(uc));
        self
    }

    pub fn with_save_coordinator(mut self, coordinator: Arc<SaveCoordinator>) -> Self {
        self.save_coordinator = Some(coordinator);
        self
    }

    pub fn with_statuses(mut self, statuses: Arc<ToastRegistry>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = Some(policy);
        self
    }

    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = Some(ttl);
        self
    }

    pub fn with_login_admin(mut self, uc: impl ILoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.login_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_check_session(
        mut self,
        uc: impl ICheckSessionUseCase + Send + Sync + 'static,
    ) -> Self {
        self.check_session = Some(Arc::new(uc));
        self
    }

    pub fn with_logout_admin(
        mut self,
        uc: impl ILogoutAdminUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout_admin = Some(Arc::new(uc));
        self
    }

    pub fn with_verify_admin_path(
        mut self,
        uc: impl IVerifyAdminPathUseCase + Send + Sync + 'static,
    ) -> Self {
        self.verify_admin_path = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            load_section_use_case: self.load_section.unwrap(),
            commit_section_use_case: self.commit_section.unwrap(),
            save_coordinator: self.save_coordinator.unwrap(),
            statuses: self.statuses.unwrap(),
            upload_policy: self.upload_policy.unwrap(),
            session_ttl: self.session_ttl.unwrap(),
            login_admin_use_case: self.login_admin.unwrap(),
            check_session_use_case: self.check_session.unwrap(),
            logout_admin_use_case: self.logout_admin.unwrap(),
            verify_admin_path_use_case: self.verify_admin_path.unwrap(),
        })
    }
}
