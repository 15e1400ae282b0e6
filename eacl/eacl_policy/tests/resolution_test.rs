use eacl_core::error::ProviderError;
use eacl_core::Privilege;
use eacl_policy::privilege::names::*;
use eacl_policy::{
    resolve_effective_permissions, AccessControlEntry, EaclService, EffectivePermissionSet,
    InMemoryPolicyProvider, PermissionAggregator, Policy, PolicyEntry, PolicyExtractor,
    PolicyProvider, PolicyScope, PrivilegeExpander, PrivilegeHierarchy, ResponseStatus,
};

fn read_write() -> PrivilegeHierarchy {
    PrivilegeHierarchy::from_aggregates([("all", vec!["read", "write"])]).unwrap()
}

fn sorted(set: &std::collections::BTreeSet<Privilege>) -> Vec<&str> {
    set.iter().map(Privilege::as_str).collect()
}

#[test]
fn scenario_first_entry_decides_conflict() {
    let entries = vec![
        AccessControlEntry::grant("alice", "read", 0),
        AccessControlEntry::deny("alice", "read", 1),
    ];

    let hierarchy = read_write();
    let set = PermissionAggregator::new(&hierarchy).aggregate(&entries);

    assert_eq!(
        set.to_json().unwrap(),
        r#"{"alice":{"granted":["read"],"denied":[]}}"#
    );
}

#[test]
fn scenario_aggregate_grant() {
    let entries = vec![AccessControlEntry::grant("bob", "all", 0)];

    let hierarchy = read_write();
    let set = PermissionAggregator::new(&hierarchy).aggregate(&entries);

    assert_eq!(
        set.to_json().unwrap(),
        r#"{"bob":{"granted":["read","write"],"denied":[]}}"#
    );
}

#[test]
fn scenario_no_entries() {
    let set = resolve_effective_permissions(&[], &read_write());
    assert_eq!(set.to_json().unwrap(), "{}");
}

#[test]
fn scenario_deny_in_first_policy_beats_grant_in_second() {
    let policies = vec![
        Policy::acl(vec![PolicyEntry::denying("carol", ["write"])]),
        Policy::acl(vec![PolicyEntry::granting("carol", ["write", "read"])]),
    ];

    let set = resolve_effective_permissions(&policies, &read_write());
    let carol = set.get("carol").unwrap();

    assert_eq!(sorted(carol.denied()), vec!["write"]);
    assert_eq!(sorted(carol.granted()), vec!["read"]);
}

#[test]
fn later_acl_policies_contribute_entries() {
    let policies = vec![
        Policy::acl(vec![PolicyEntry::granting("alice", ["read"])]),
        Policy::restriction("glob", vec!["/content/*".to_string()]),
        Policy::acl(vec![PolicyEntry::granting("dave", ["write"])]),
    ];

    let set = resolve_effective_permissions(&policies, &read_write());

    assert_eq!(set.len(), 2);
    assert_eq!(sorted(set.get("dave").unwrap().granted()), vec!["write"]);
}

#[test]
fn granted_and_denied_are_disjoint() {
    let policies = vec![
        Policy::acl(vec![
            PolicyEntry::denying("everyone", [JCR_WRITE]),
            PolicyEntry::granting("everyone", [JCR_ALL]),
            PolicyEntry::denying("everyone", [JCR_READ]),
        ]),
        Policy::acl(vec![
            PolicyEntry::granting("editors", [REP_WRITE]),
            PolicyEntry::denying("editors", [JCR_ALL]),
        ]),
    ];

    let set = resolve_effective_permissions(&policies, &PrivilegeHierarchy::jcr());

    for (_, permissions) in set.iter() {
        assert!(permissions.granted().is_disjoint(permissions.denied()));
    }

    let everyone = set.get("everyone").unwrap();
    assert!(everyone.is_denied(JCR_MODIFY_PROPERTIES));
    assert!(everyone.is_granted(JCR_READ));
    assert_eq!(everyone.granted().len() + everyone.denied().len(), 16);
}

#[test]
fn unrelated_entries_do_not_change_precedence() {
    let conflict = [
        AccessControlEntry::deny("alice", "write", 1),
        AccessControlEntry::grant("alice", "write", 4),
    ];
    let noise = [
        AccessControlEntry::grant("bob", "read", 0),
        AccessControlEntry::deny("bob", "write", 2),
        AccessControlEntry::grant("everyone", "all", 3),
    ];

    let hierarchy = read_write();
    let aggregator = PermissionAggregator::new(&hierarchy);

    let forward: Vec<_> = noise.iter().chain(conflict.iter()).cloned().collect();
    let mut reversed = forward.clone();
    reversed.reverse();
    let interleaved = vec![
        noise[2].clone(),
        conflict[1].clone(),
        noise[0].clone(),
        conflict[0].clone(),
        noise[1].clone(),
    ];

    let expected = aggregator.aggregate(&forward);
    assert!(expected.get("alice").unwrap().is_denied("write"));
    assert_eq!(aggregator.aggregate(&reversed), expected);
    assert_eq!(aggregator.aggregate(&interleaved), expected);
}

#[test]
fn aggregate_grant_equals_granting_its_closure() {
    let hierarchy = PrivilegeHierarchy::jcr();
    let aggregator = PermissionAggregator::new(&hierarchy);

    for aggregate in [JCR_ALL, JCR_WRITE, REP_WRITE] {
        let closure = PrivilegeExpander::new(&hierarchy).expand(&Privilege::new(aggregate));

        let via_aggregate = aggregator.aggregate(&[AccessControlEntry::grant("p", aggregate, 0)]);
        let individually: Vec<_> = closure
            .iter()
            .enumerate()
            .map(|(i, privilege)| AccessControlEntry::grant("p", privilege.clone(), i))
            .collect();

        assert_eq!(via_aggregate, aggregator.aggregate(&individually));
    }
}

#[test]
fn resolution_is_idempotent() {
    let policies = vec![
        Policy::acl(vec![
            PolicyEntry::granting("zed", [JCR_READ, JCR_WRITE]),
            PolicyEntry::denying("amy", [JCR_ALL]),
            PolicyEntry::granting("amy", [JCR_READ]),
        ]),
        Policy::acl(vec![PolicyEntry::granting("everyone", [JCR_READ])]),
    ];
    let hierarchy = PrivilegeHierarchy::jcr();

    let first = resolve_effective_permissions(&policies, &hierarchy)
        .to_json()
        .unwrap();
    for _ in 0..10 {
        let again = resolve_effective_permissions(&policies, &hierarchy)
            .to_json()
            .unwrap();
        assert_eq!(again, first);
    }

    // principals in lexicographic order
    let amy = first.find("\"amy\"").unwrap();
    let everyone = first.find("\"everyone\"").unwrap();
    let zed = first.find("\"zed\"").unwrap();
    assert!(amy < everyone && everyone < zed);
}

#[test]
fn extractor_feeds_aggregator_in_provider_order() {
    let policies = vec![Policy::acl(vec![
        PolicyEntry::granting("alice", ["read"]),
        PolicyEntry::denying("alice", ["read", "write"]),
    ])];

    let entries = PolicyExtractor::new().extract(&policies);
    let hierarchy = read_write();
    let set: EffectivePermissionSet = PermissionAggregator::new(&hierarchy).aggregate(&entries);
    let alice = set.get("alice").unwrap();

    assert_eq!(sorted(alice.granted()), vec!["read"]);
    assert_eq!(sorted(alice.denied()), vec!["write"]);
}

struct FailingProvider;

impl PolicyProvider for FailingProvider {
    fn resource_exists(&self, _path: &str) -> Result<bool, ProviderError> {
        Ok(true)
    }

    fn effective_policies(&self, path: &str) -> Result<Vec<Policy>, ProviderError> {
        Err(ProviderError::Unavailable(format!("cannot read {}", path)))
    }
}

#[test]
fn provider_failure_is_terminal() {
    let service = EaclService::new(FailingProvider, PrivilegeHierarchy::jcr());

    assert!(service
        .resolve("/content", PolicyScope::Effective)
        .is_err());

    let response = service.handle_path("/content.eacl.json");
    assert_eq!(response.status, ResponseStatus::InternalError);
    assert_eq!(response.status.code(), 500);
    assert_eq!(
        response.body["error"],
        "Policy provider error: Policy store unavailable: cannot read /content"
    );
}

#[test]
fn service_serves_declared_and_effective_scopes() {
    let provider = InMemoryPolicyProvider::new();
    provider.insert(
        "/content/page",
        eacl_policy::provider::ResourcePolicies::declared(vec![Policy::acl(vec![
            PolicyEntry::granting("alice", [JCR_WRITE]),
        ])])
        .with_effective(vec![
            Policy::acl(vec![PolicyEntry::granting("alice", [JCR_WRITE])]),
            Policy::acl(vec![PolicyEntry::granting("everyone", [JCR_READ])]),
        ]),
    );
    let service = EaclService::new(provider, PrivilegeHierarchy::jcr());

    let declared = service.handle_path("/content/page.acl.json");
    let effective = service.handle_path("/content/page.eacl.json");

    assert!(declared.is_success() && effective.is_success());
    assert!(declared.body.get("everyone").is_none());
    assert_eq!(effective.body["everyone"]["granted"][0], JCR_READ);
    assert_eq!(
        effective.body["alice"]["granted"].as_array().unwrap().len(),
        4
    );
}

#[test]
fn concurrent_requests_share_the_service() {
    let provider = InMemoryPolicyProvider::new();
    provider.insert_policies(
        "/content",
        vec![Policy::acl(vec![PolicyEntry::granting("everyone", [JCR_READ])])],
    );
    let service = std::sync::Arc::new(EaclService::new(provider, PrivilegeHierarchy::jcr()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = std::sync::Arc::clone(&service);
            std::thread::spawn(move || service.handle_path("/content.eacl.json").to_json())
        })
        .collect();

    let bodies: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(bodies.windows(2).all(|pair| pair[0] == pair[1]));
}
