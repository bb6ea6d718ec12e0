//! End-to-end workflow tests against scripted providers.

use std::time::Duration;

use tinker::app::{
    CreateProject, DeploySharedInfra, DestroyProject, SharedStackInputs, Waiter,
};
use tinker::config::WaiterConfig;
use tinker::domain::{
    DomainName, ProjectName, Region, StackStatus, ADMIN_STACK_NAME, OUTPUT_ADMIN_DOMAIN,
    OUTPUT_DOMAIN_NAME, OUTPUT_REGION,
};
use tinker::error::{Error, ProviderError};
use tinker::testkit::{RecordingAdmin, RecordingKeyPairs, ScriptedStacks};

fn fast_waiter() -> Waiter {
    Waiter::new(WaiterConfig {
        poll_interval: Duration::from_secs(1),
        max_wait: Duration::from_secs(900),
    })
}

fn demo1() -> ProjectName {
    ProjectName::parse("demo1").unwrap()
}

fn us_east_1() -> Region {
    Region::parse("us-east-1").unwrap()
}

fn ready_stacks() -> ScriptedStacks {
    ScriptedStacks::new()
        .with_statuses([StackStatus::CreateInProgress, StackStatus::CreateComplete])
        .with_outputs([
            (OUTPUT_REGION, "us-east-1"),
            (OUTPUT_DOMAIN_NAME, "example.com"),
            (OUTPUT_ADMIN_DOMAIN, "admin.example.com"),
        ])
}

// Scenario A: ordinal 5 becomes RulePriority 6 and the tenant is registered
// under its fully qualified domain from the stack outputs.
#[tokio::test(start_paused = true)]
async fn create_project_registers_tenant_with_derived_priority() {
    let stacks = ready_stacks();
    let admin = RecordingAdmin::with_ordinal(5);
    let workflow = CreateProject::new(&stacks, &admin, fast_waiter(), "s3cret", "{}", false);

    let outcome = workflow.run(&demo1(), &us_east_1(), None).await.unwrap();

    assert_eq!(outcome.name, "demo1");
    assert_eq!(outcome.fqdn, "demo1.example.com");
    assert_eq!(outcome.priority.value(), 6);

    let creates = stacks.create_calls();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].name, "demo1");
    assert_eq!(creates[0].region, "us-east-1");

    let param = |key: &str| {
        creates[0]
            .parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.clone())
    };
    assert_eq!(param("ProjectName").as_deref(), Some("demo1"));
    assert_eq!(param("RulePriority").as_deref(), Some("6"));

    assert_eq!(
        admin.register_calls(),
        vec![("demo1".to_string(), "demo1.example.com".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn create_project_uses_one_token_for_the_whole_sequence() {
    let stacks = ready_stacks();
    let admin = RecordingAdmin::with_ordinal(1);
    let workflow = CreateProject::new(&stacks, &admin, fast_waiter(), "s3cret", "{}", false);

    workflow.run(&demo1(), &us_east_1(), None).await.unwrap();

    let tokens = admin.tokens_seen();
    assert_eq!(tokens.len(), 2); // ordinal + register
    assert_eq!(tokens[0], tokens[1]);
}

#[tokio::test(start_paused = true)]
async fn create_project_rolls_back_stack_when_registration_fails() {
    let stacks = ready_stacks();
    let admin = RecordingAdmin::with_ordinal(5).failing_register();
    let workflow = CreateProject::new(&stacks, &admin, fast_waiter(), "s3cret", "{}", false);

    let err = workflow.run(&demo1(), &us_east_1(), None).await.unwrap_err();

    assert!(matches!(err, Error::Admin(_)), "unexpected error: {err}");
    assert_eq!(stacks.delete_calls(), vec!["demo1".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn keep_on_failure_leaves_the_stack_in_place() {
    let stacks = ready_stacks();
    let admin = RecordingAdmin::with_ordinal(5).failing_register();
    let workflow = CreateProject::new(&stacks, &admin, fast_waiter(), "s3cret", "{}", true);

    let err = workflow.run(&demo1(), &us_east_1(), None).await.unwrap_err();

    assert!(matches!(err, Error::Admin(_)));
    assert!(stacks.delete_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn create_project_rolls_back_on_wait_timeout() {
    let stacks = ScriptedStacks::new().with_statuses([StackStatus::CreateInProgress]);
    let admin = RecordingAdmin::with_ordinal(5);
    let waiter = Waiter::new(WaiterConfig {
        poll_interval: Duration::from_secs(1),
        max_wait: Duration::from_secs(5),
    });
    let workflow = CreateProject::new(&stacks, &admin, waiter, "s3cret", "{}", false);

    let err = workflow.run(&demo1(), &us_east_1(), None).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Provider(ProviderError::Timeout { .. })
    ));
    assert_eq!(stacks.delete_calls(), vec!["demo1".to_string()]);
    assert!(admin.register_calls().is_empty());
}

#[tokio::test]
async fn create_project_fails_fast_on_empty_secret() {
    let stacks = ScriptedStacks::new();
    let admin = RecordingAdmin::with_ordinal(5);
    let workflow = CreateProject::new(&stacks, &admin, fast_waiter(), "", "{}", false);

    let err = workflow.run(&demo1(), &us_east_1(), None).await.unwrap_err();

    assert!(matches!(err, Error::Signing(_)));
    assert!(stacks.create_calls().is_empty());
    assert!(admin.tokens_seen().is_empty());
}

#[tokio::test(start_paused = true)]
async fn destroy_project_deregisters_and_waits_for_deletion() {
    // No scripted statuses: describe reports the stack as gone.
    let stacks = ScriptedStacks::new();
    let admin = RecordingAdmin::with_ordinal(1);
    let workflow = DestroyProject::new(&stacks, &admin, fast_waiter(), "s3cret");

    workflow.run(&demo1()).await.unwrap();

    assert_eq!(stacks.delete_calls(), vec!["demo1".to_string()]);
    assert_eq!(admin.deregister_calls(), vec!["demo1".to_string()]);
}

// Scenario B: the delete submission fails, the workflow reports failure,
// and deregistration is still attempted exactly once.
#[tokio::test]
async fn destroy_project_still_deregisters_when_submission_fails() {
    let stacks = ScriptedStacks::new()
        .with_delete_error(ProviderError::DeleteRequest("404: no such stack".to_string()));
    let admin = RecordingAdmin::with_ordinal(1);
    let workflow = DestroyProject::new(&stacks, &admin, fast_waiter(), "s3cret");

    let err = workflow.run(&demo1()).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Provider(ProviderError::DeleteRequest(_))
    ));
    assert_eq!(admin.deregister_calls(), vec!["demo1".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn destroy_project_tolerates_deregistration_failure() {
    let stacks = ScriptedStacks::new();
    let admin = RecordingAdmin::with_ordinal(1).failing_deregister();
    let workflow = DestroyProject::new(&stacks, &admin, fast_waiter(), "s3cret");

    workflow.run(&demo1()).await.unwrap();

    assert_eq!(admin.deregister_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn deploy_shared_infra_provisions_key_pair_and_admin_stack() {
    let stacks = ready_stacks();
    let keys = RecordingKeyPairs::new();
    let workflow = DeploySharedInfra::new(&stacks, &keys, fast_waiter(), "s3cret", "{}");

    let inputs = SharedStackInputs {
        region: us_east_1(),
        domain: DomainName::parse("badbud.net").unwrap(),
        hosted_zone_id: "Z04496672BBIBQSBM3YR9".to_string(),
    };
    let outcome = workflow.run(&inputs).await.unwrap();

    assert!(outcome.key_material.is_some());
    assert_eq!(keys.create_count(), 1);

    let creates = stacks.create_calls();
    assert_eq!(creates.len(), 1);
    assert_eq!(creates[0].name, ADMIN_STACK_NAME);

    let param = |key: &str| {
        creates[0]
            .parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.clone())
    };
    assert_eq!(param("WildcardSubdomainName").as_deref(), Some("*.badbud.net"));
    assert_eq!(param("AdminDomain").as_deref(), Some("admin.badbud.net"));
    assert_eq!(param("HostedZoneId").as_deref(), Some("Z04496672BBIBQSBM3YR9"));
    assert_eq!(param("Secret").as_deref(), Some("s3cret"));

    assert_eq!(outcome.outputs.admin_domain().unwrap(), "admin.example.com");
}

#[tokio::test(start_paused = true)]
async fn deploy_shared_infra_reuses_existing_key_pair() {
    let stacks = ready_stacks();
    let keys = RecordingKeyPairs::with_existing(["tinker_keys"]);
    let workflow = DeploySharedInfra::new(&stacks, &keys, fast_waiter(), "s3cret", "{}");

    let inputs = SharedStackInputs {
        region: us_east_1(),
        domain: DomainName::parse("badbud.net").unwrap(),
        hosted_zone_id: "Z0449667".to_string(),
    };
    let outcome = workflow.run(&inputs).await.unwrap();

    assert!(outcome.key_material.is_none());
    assert_eq!(keys.create_count(), 0);
}
