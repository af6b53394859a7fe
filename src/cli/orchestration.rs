//! Main workflow orchestration logic
//!
//! Keeps the tagging workflow separate from CLI argument parsing so it can
//! be driven programmatically against any [TagStore].

use tracing::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, FailurePolicy, ParseMode};
use crate::domain::{environment, select_latest, BumpKind, Tag, Version};
use crate::error::{Result, TagitError};
use crate::git::TagStore;
use crate::ui;

/// Result of a successful tagging run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was (or, in dry-run mode, would be) created
    pub tag: String,

    /// Latest existing tag for the prefix, if any
    pub previous_tag: Option<String>,

    /// Version carried by `tag`
    pub version: Version,

    /// Bump kind that was requested
    pub bump: BumpKind,

    /// Whether the tag was created locally
    pub created: bool,

    /// Whether the tag was pushed to the remote
    pub pushed: bool,

    /// Non-fatal issues reported along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Computes the next tag for an environment and publishes it through a [TagStore].
pub struct TagWorkflow<'a, S: TagStore> {
    store: &'a S,
    config: &'a Config,
    dry_run: bool,
}

impl<'a, S: TagStore> TagWorkflow<'a, S> {
    pub fn new(store: &'a S, config: &'a Config) -> Self {
        TagWorkflow {
            store,
            config,
            dry_run: false,
        }
    }

    /// Compute the next tag without creating or pushing it
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the tagging workflow:
    /// 1. Validate arguments and resolve the tag prefix
    /// 2. Refresh tags from the remote
    /// 3. Select the latest tag for the prefix and bump its version
    /// 4. Create and push the new tag
    ///
    /// # Arguments
    ///
    /// * `env_token` - `p`/`P` for production, `s<N>` for a staging slot
    /// * `bump_token` - `x`/`y`/`z` or `major`/`minor`/`patch`
    pub fn run(&self, env_token: &str, bump_token: &str) -> Result<WorkflowResult> {
        let env_token = env_token.trim();
        let bump_token = bump_token.trim();
        require_arguments(env_token, bump_token)?;

        let bump: BumpKind = bump_token.parse()?;
        let prefix = environment::resolve(env_token, &self.config.prefixes)?;
        debug!(env = env_token, %prefix, %bump, "resolved tag prefix");

        let remote = self.config.remote.name.as_str();
        let mut warnings = Vec::new();

        ui::display_status("Fetching latest tags");
        if let Err(e) = self.store.refresh_remote_tags(remote) {
            match self.config.behavior.refresh {
                FailurePolicy::BestEffort if !e.is_timeout() => {
                    warn!(remote, error = %e, "refresh failed, continuing with local tags");
                    warnings.push(BoundaryWarning::RefreshFailed {
                        remote: remote.to_string(),
                        reason: e.to_string(),
                    });
                }
                _ => return Err(e),
            }
        }

        let existing = self.store.list_tags(&prefix)?;
        let previous_tag = select_latest(&prefix, &existing, self.config.versioning.ordering);
        debug!(candidates = existing.len(), latest = ?previous_tag, "selected latest tag");

        let version = match previous_tag.as_deref() {
            None => self.config.versioning.initial_version()?,
            Some(latest) => {
                let current = self.parse_tag_version(&prefix, latest, &mut warnings)?;
                current.increment(bump)
            }
        };

        let tag = Tag::compose(&prefix, &version).name;
        info!(%tag, previous = ?previous_tag, "computed next tag");

        if self.dry_run {
            return Ok(WorkflowResult {
                tag,
                previous_tag,
                version,
                bump,
                created: false,
                pushed: false,
                warnings,
            });
        }

        self.store.create_tag(&tag)?;

        ui::display_status(&format!("Pushing new tag: {}", tag));
        let pushed = match self.store.push_tag(remote, &tag) {
            Ok(()) => true,
            Err(e) => match self.config.behavior.push {
                FailurePolicy::BestEffort if !e.is_timeout() => {
                    warn!(remote, %tag, error = %e, "push failed, tag kept locally");
                    warnings.push(BoundaryWarning::PushFailed {
                        tag: tag.clone(),
                        remote: remote.to_string(),
                        reason: e.to_string(),
                    });
                    false
                }
                _ => return Err(e),
            },
        };

        Ok(WorkflowResult {
            tag,
            previous_tag,
            version,
            bump,
            created: true,
            pushed,
            warnings,
        })
    }

    fn parse_tag_version(
        &self,
        prefix: &str,
        latest: &str,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> Result<Version> {
        let version_part = Tag::new(latest).version_part(prefix).to_string();

        match self.config.versioning.parsing {
            ParseMode::Strict => Version::parse_strict(&version_part).map_err(|e| {
                TagitError::parse(format!("Latest tag '{}' is malformed: {}", latest, e))
            }),
            ParseMode::Lenient => {
                if !Version::is_well_formed(&version_part) {
                    warnings.push(BoundaryWarning::UnparsableTag {
                        tag: latest.to_string(),
                        reason: "version is not X.Y.Z, missing or non-numeric parts count as 0"
                            .to_string(),
                    });
                }
                Ok(Version::parse_lenient(&version_part))
            }
        }
    }
}

/// Both the environment and the bump type must be non-blank.
pub fn require_arguments(env_token: &str, bump_token: &str) -> Result<()> {
    if env_token.trim().is_empty() || bump_token.trim().is_empty() {
        return Err(TagitError::missing_argument(
            "You must specify both --env and --type",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TagOrdering;
    use crate::git::mock::{MockFailure, MockRepository};

    #[test]
    fn test_first_staging_tag() {
        let store = MockRepository::new();
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config).run("s1", "z").unwrap();

        assert_eq!(result.tag, "s1v1.0.0");
        assert_eq!(result.previous_tag, None);
        assert!(result.created && result.pushed);
        assert_eq!(store.created_tags(), vec!["s1v1.0.0".to_string()]);
        assert_eq!(
            store.pushed_tags(),
            vec![("origin".to_string(), "s1v1.0.0".to_string())]
        );
    }

    #[test]
    fn test_major_bump_on_existing_staging_tag() {
        let store = MockRepository::with_tags(["s1v1.2.3", "v9.9.9"]);
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config).run("s1", "x").unwrap();

        assert_eq!(result.tag, "s1v2.0.0");
        assert_eq!(result.previous_tag.as_deref(), Some("s1v1.2.3"));
        assert_eq!(result.version, Version::new(2, 0, 0));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_production_minor_bump() {
        let store = MockRepository::with_tags(["v1.4.2", "v1.10.0", "s1v5.0.0"]);
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config).run("P", "minor").unwrap();
        assert_eq!(result.tag, "v1.11.0");
    }

    #[test]
    fn test_lexical_ordering_picks_string_max() {
        let store = MockRepository::with_tags(["v1.4.2", "v1.10.0"]);
        let mut config = Config::default();
        config.versioning.ordering = TagOrdering::Lexical;

        let result = TagWorkflow::new(&store, &config).run("p", "z").unwrap();
        assert_eq!(result.previous_tag.as_deref(), Some("v1.4.2"));
        assert_eq!(result.tag, "v1.4.3");
    }

    #[test]
    fn test_missing_arguments_touch_nothing() {
        let store = MockRepository::new();
        let config = Config::default();
        let workflow = TagWorkflow::new(&store, &config);

        for (env, bump) in [("", "x"), ("s1", ""), ("  ", " "), ("", "")] {
            let err = workflow.run(env, bump).unwrap_err();
            assert!(matches!(err, TagitError::MissingArgument(_)));
        }
        assert!(store.refreshed_remotes().is_empty());
        assert!(store.created_tags().is_empty());
    }

    #[test]
    fn test_invalid_environment_and_bump() {
        let store = MockRepository::new();
        let config = Config::default();
        let workflow = TagWorkflow::new(&store, &config);

        assert!(matches!(
            workflow.run("x1", "x"),
            Err(TagitError::InvalidEnvironment(_))
        ));
        assert!(matches!(
            workflow.run("s1", "1"),
            Err(TagitError::InvalidBumpKind(_))
        ));
        assert!(store.created_tags().is_empty());
    }

    #[test]
    fn test_refresh_failure_is_warning_by_default() {
        let store = MockRepository::with_tags(["v1.0.0"])
            .fail_refresh(MockFailure::Error("network unreachable".to_string()));
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config).run("p", "z").unwrap();
        assert_eq!(result.tag, "v1.0.1");
        assert!(matches!(
            result.warnings.as_slice(),
            [BoundaryWarning::RefreshFailed { .. }]
        ));
    }

    #[test]
    fn test_refresh_failure_fails_fast_when_configured() {
        let store = MockRepository::new()
            .fail_refresh(MockFailure::Error("network unreachable".to_string()));
        let mut config = Config::default();
        config.behavior.refresh = FailurePolicy::FailFast;

        let err = TagWorkflow::new(&store, &config).run("p", "z").unwrap_err();
        assert!(matches!(err, TagitError::Remote { operation: "refresh", .. }));
        assert!(store.created_tags().is_empty());
    }

    #[test]
    fn test_refresh_timeout_is_always_fatal() {
        let store = MockRepository::new().fail_refresh(MockFailure::Timeout);
        let config = Config::default();

        let err = TagWorkflow::new(&store, &config).run("p", "z").unwrap_err();
        assert!(err.is_timeout());
        assert!(store.created_tags().is_empty());
    }

    #[test]
    fn test_push_failure_fails_by_default() {
        let store =
            MockRepository::new().fail_push(MockFailure::Error("rejected".to_string()));
        let config = Config::default();

        let err = TagWorkflow::new(&store, &config).run("s2", "y").unwrap_err();
        assert!(matches!(err, TagitError::Remote { operation: "push", .. }));
        assert_eq!(store.created_tags(), vec!["s2v1.0.0".to_string()]);
    }

    #[test]
    fn test_push_failure_best_effort() {
        let store =
            MockRepository::new().fail_push(MockFailure::Error("rejected".to_string()));
        let mut config = Config::default();
        config.behavior.push = FailurePolicy::BestEffort;

        let result = TagWorkflow::new(&store, &config).run("s2", "y").unwrap();
        assert!(result.created);
        assert!(!result.pushed);
        assert!(matches!(
            result.warnings.as_slice(),
            [BoundaryWarning::PushFailed { .. }]
        ));
    }

    #[test]
    fn test_tag_creation_failure_is_surfaced() {
        let store = MockRepository::new().fail_create("HEAD is unborn");
        let config = Config::default();

        let err = TagWorkflow::new(&store, &config).run("p", "x").unwrap_err();
        assert!(matches!(err, TagitError::TagCreation(_)));
        assert!(store.pushed_tags().is_empty());
    }

    #[test]
    fn test_lenient_parsing_warns_on_malformed_tag() {
        let store = MockRepository::with_tags(["v2.x"]);
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config).run("p", "z").unwrap();
        assert_eq!(result.tag, "v2.0.1");
        assert!(matches!(
            result.warnings.as_slice(),
            [BoundaryWarning::UnparsableTag { .. }]
        ));
    }

    #[test]
    fn test_strict_parsing_rejects_malformed_tag() {
        let store = MockRepository::with_tags(["v2.x"]);
        let mut config = Config::default();
        config.versioning.parsing = ParseMode::Strict;

        let err = TagWorkflow::new(&store, &config).run("p", "z").unwrap_err();
        assert!(matches!(err, TagitError::Parse(_)));
        assert!(store.created_tags().is_empty());
    }

    #[test]
    fn test_dry_run_creates_nothing() {
        let store = MockRepository::with_tags(["s3v0.4.1"]);
        let config = Config::default();

        let result = TagWorkflow::new(&store, &config)
            .dry_run(true)
            .run("s3", "y")
            .unwrap();

        assert_eq!(result.tag, "s3v0.5.0");
        assert!(!result.created && !result.pushed);
        assert!(store.created_tags().is_empty());
        assert!(store.pushed_tags().is_empty());
    }

    #[test]
    fn test_configured_remote_and_initial_version() {
        let store = MockRepository::new();
        let mut config = Config::default();
        config.remote.name = "upstream".to_string();
        config.versioning.initial = "0.1.0".to_string();

        let result = TagWorkflow::new(&store, &config).run("p", "x").unwrap();
        assert_eq!(result.tag, "v0.1.0");
        assert_eq!(store.refreshed_remotes(), vec!["upstream".to_string()]);
        assert_eq!(
            store.pushed_tags(),
            vec![("upstream".to_string(), "v0.1.0".to_string())]
        );
    }
}
