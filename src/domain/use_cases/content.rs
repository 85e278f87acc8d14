use serde_json::Value;
use tracing::instrument;

use crate::{
    entities::profile::Profile,
    errors::{ContentError, ValidationReport},
    repositories::profile::ProfileRepository,
    settings::ValidationPolicy,
    use_cases::validation::validate_profile,
};

pub struct ContentHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
    pub policy: ValidationPolicy,
}

impl<R> ContentHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R, policy: ValidationPolicy) -> Self {
        ContentHandler { profile_repo, policy }
    }

    /// Loads the profile and applies the configured validation policy.
    ///
    /// `Enforce` fails with the full report, `Warn` logs it and falls back to the
    /// document as authored, `Skip` never checks.
    #[instrument(skip(self), fields(policy = ?self.policy))]
    pub async fn load_profile(&self) -> Result<Profile, ContentError> {
        let document = self.profile_repo.load_document().await?;

        match self.policy {
            ValidationPolicy::Enforce => {
                let profile = validate_profile(&document)?;
                tracing::info!("Profile content validated");
                Ok(profile)
            }
            ValidationPolicy::Warn => match validate_profile(&document) {
                Ok(profile) => Ok(profile),
                Err(report) => {
                    log_report(&report);
                    as_authored(document)
                }
            },
            ValidationPolicy::Skip => as_authored(document),
        }
    }

    /// Checks the stored profile without keeping it.
    #[instrument(skip(self))]
    pub async fn check_profile(&self) -> Result<Result<(), ValidationReport>, ContentError> {
        let document = self.profile_repo.load_document().await?;
        Ok(validate_profile(&document).map(|_| ()))
    }
}

fn log_report(report: &ValidationReport) {
    tracing::warn!(count = report.len(), "Profile content has violations; using it as authored");
    for violation in &report.violations {
        tracing::warn!(path = %violation.path, "{}", violation.message);
    }
}

/// Reads the document with only structural checks.
fn as_authored(document: Value) -> Result<Profile, ContentError> {
    serde_json::from_value(document).map_err(ContentError::from)
}
