//! End-to-end pipeline scenarios

use pretty_assertions::assert_eq;
use raci_enrich::{enrich, EnrichConfig, EnrichError, Enricher};
use raci_model::RaciLetter;
use raci_test_utils::{
    dep, document, planning_document, program_document, ActivityBuilder, GroupBuilder,
};

fn issues(warnings: &[raci_model::ActionWarning]) -> Vec<&str> {
    warnings.iter().map(|w| w.issue.as_str()).collect()
}

#[test]
fn planning_scenario() {
    let dataset = enrich(&planning_document(), &EnrichConfig::default()).unwrap();

    assert_eq!(dataset.actions.len(), 2);
    assert_eq!(dataset.relationships.len(), 4);
    assert_eq!(dataset.activity_dependencies.len(), 1);
    assert!(dataset.metrics.dependency_warnings.is_empty());

    // Review Plan only has C and I carriers
    assert_eq!(
        issues(&dataset.metrics.action_warnings),
        vec!["Missing Responsible assignment", "Missing Accountable assignment"]
    );
    assert!(dataset
        .metrics
        .action_warnings
        .iter()
        .all(|w| w.action_id == "planning__review_plan"));

    let edge = &dataset.activity_dependencies[0];
    assert_eq!(edge.source_action_id, "planning__review_plan");
    assert_eq!(edge.target_action_id, "planning__draft_plan");
    assert_eq!(edge.relation, "depends_on");

    let distribution = &dataset.metrics.group_summary["planning"].edge_distribution;
    assert_eq!(
        distribution.iter().collect::<Vec<_>>(),
        vec![
            (RaciLetter::R, 1),
            (RaciLetter::A, 1),
            (RaciLetter::C, 1),
            (RaciLetter::I, 1),
        ]
    );
    assert_eq!(dataset.metrics.dependency_summary.total, 1);
    assert_eq!(
        dataset.metrics.dependency_summary.counts_by_type.get("depends_on"),
        Some(&1)
    );
}

#[test]
fn planning_relationships_in_processing_order() {
    let dataset = enrich(&planning_document(), &EnrichConfig::default()).unwrap();
    let facts: Vec<(&str, &str, RaciLetter)> = dataset
        .relationships
        .iter()
        .map(|e| (e.action_id.as_str(), e.role_id.as_str(), e.raci))
        .collect();
    assert_eq!(
        facts,
        vec![
            ("planning__draft_plan", "alice", RaciLetter::R),
            ("planning__draft_plan", "bob", RaciLetter::A),
            ("planning__review_plan", "bob", RaciLetter::C),
            ("planning__review_plan", "carol", RaciLetter::I),
        ]
    );
}

#[test]
fn program_roles_and_aliases() {
    let dataset = enrich(&program_document(), &EnrichConfig::default()).unwrap();

    let ids: Vec<&str> = dataset.roles.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["product_owner", "stakeholder", "ux_researcher", "tech_lead", "qa", "engineer"]
    );

    let owner = dataset.role("product_owner").unwrap();
    assert_eq!(owner.name, "Product Owner");
    assert_eq!(owner.aliases, vec!["Product owner", "product owner"]);
}

#[test]
fn program_warnings() {
    let dataset = enrich(&program_document(), &EnrichConfig::default()).unwrap();

    assert_eq!(
        issues(&dataset.metrics.action_warnings),
        vec![
            "Multiple Responsible assignments: ['engineer', 'tech_lead']",
            "No valid RACI tokens for role 'Tech Lead'",
            "Missing Responsible assignment",
            "Missing Accountable assignment",
        ]
    );
    assert_eq!(dataset.metrics.action_warnings[0].action_id, "delivery__build_feature");

    let dep_warnings = &dataset.metrics.dependency_warnings;
    assert_eq!(dep_warnings.len(), 1);
    assert_eq!(
        dep_warnings[0].issue,
        "Dependency target not found: Delivery :: Missing Step"
    );
}

#[test]
fn program_dependencies_sorted_and_deduplicated() {
    let dataset = enrich(&program_document(), &EnrichConfig::default()).unwrap();

    let edges: Vec<(&str, &str, &str)> = dataset
        .activity_dependencies
        .iter()
        .map(|e| {
            (
                e.source_action_id.as_str(),
                e.target_action_id.as_str(),
                e.relation.as_str(),
            )
        })
        .collect();
    assert_eq!(
        edges,
        vec![
            ("delivery__build_feature", "discovery__write_brief", "depends_on"),
            ("delivery__test_feature", "delivery__build_feature", "verifies"),
            ("discovery__write_brief", "discovery__interview_users", "depends_on"),
        ]
    );

    let summary = &dataset.metrics.dependency_summary;
    assert_eq!(summary.total, 3);
    let by_type: Vec<(&str, usize)> = summary
        .counts_by_type
        .iter()
        .map(|(k, v)| (k.as_str(), *v))
        .collect();
    assert_eq!(by_type, vec![("depends_on", 2), ("verifies", 1)]);
}

#[test]
fn program_metrics() {
    let dataset = enrich(&program_document(), &EnrichConfig::default()).unwrap();
    let metrics = &dataset.metrics;

    let totals: Vec<(&str, usize)> = metrics
        .role_summary
        .iter()
        .map(|s| (s.role_id.as_str(), s.total_assignments))
        .collect();
    assert_eq!(
        totals,
        vec![
            ("product_owner", 4),
            ("ux_researcher", 2),
            ("tech_lead", 2),
            ("stakeholder", 1),
            ("qa", 1),
            ("engineer", 1),
        ]
    );

    let overloaded: Vec<&str> = metrics
        .overloaded_roles
        .iter()
        .map(|s| s.role_id.as_str())
        .collect();
    assert_eq!(overloaded, vec!["product_owner", "ux_researcher", "tech_lead"]);

    let discovery = &metrics.group_summary["discovery"];
    assert_eq!(discovery.action_count, 2);
    assert_eq!(discovery.edge_distribution.total(), 7);
    let delivery = &metrics.group_summary["delivery"];
    assert_eq!(delivery.edge_distribution.get(RaciLetter::R), 2);
    assert_eq!(delivery.edge_distribution.get(RaciLetter::I), 0);

    let group_ids: Vec<&str> = metrics.group_summary.keys().map(String::as_str).collect();
    assert_eq!(group_ids, vec!["discovery", "delivery"]);
}

#[test]
fn output_is_byte_reproducible() {
    let enricher = Enricher::default();
    let first = serde_json::to_string_pretty(&enricher.run(&program_document()).unwrap()).unwrap();
    let second = serde_json::to_string_pretty(&enricher.run(&program_document()).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn dependency_order_independent_of_declaration_order() {
    let forward = document([GroupBuilder::new("G")
        .activity(ActivityBuilder::new("A").assign("X", "RA"))
        .activity(ActivityBuilder::new("B").assign("X", "RA").depends_on(dep("A")))
        .activity(ActivityBuilder::new("C").assign("X", "RA").depends_on(dep("A")))]);
    let backward = document([GroupBuilder::new("G")
        .activity(ActivityBuilder::new("C").assign("X", "RA").depends_on(dep("A")))
        .activity(ActivityBuilder::new("B").assign("X", "RA").depends_on(dep("A")))
        .activity(ActivityBuilder::new("A").assign("X", "RA"))]);

    let config = EnrichConfig::default();
    let a = enrich(&forward, &config).unwrap();
    let b = enrich(&backward, &config).unwrap();
    assert_eq!(a.activity_dependencies, b.activity_dependencies);
}

#[test]
fn reference_to_later_group_resolves() {
    let doc = document([
        GroupBuilder::new("First").activity(
            ActivityBuilder::new("Start")
                .assign("X", "RA")
                .depends_on(dep("Finish").in_group("Second")),
        ),
        GroupBuilder::new("Second").activity(ActivityBuilder::new("Finish").assign("X", "RA")),
    ]);
    let dataset = enrich(&doc, &EnrichConfig::default()).unwrap();
    assert_eq!(dataset.activity_dependencies.len(), 1);
    assert_eq!(dataset.activity_dependencies[0].target_group_id, "second");
}

#[test]
fn untitled_group_aborts() {
    let doc = document([
        GroupBuilder::new("Fine"),
        GroupBuilder::untitled().activity(ActivityBuilder::new("A")),
    ]);
    let err = enrich(&doc, &EnrichConfig::default()).unwrap_err();
    assert_eq!(err, EnrichError::MissingGroupTitle { index: 1 });
}

#[test]
fn unnamed_activity_aborts() {
    let doc = document([GroupBuilder::new("Planning").activity(ActivityBuilder::unnamed())]);
    let err = enrich(&doc, &EnrichConfig::default()).unwrap_err();
    assert!(matches!(err, EnrichError::MissingActivityName { index: 0, .. }));
}

#[test]
fn empty_document_is_clean() {
    let dataset = enrich(&document([]), &EnrichConfig::default()).unwrap();
    assert!(dataset.roles.is_empty());
    assert!(dataset.actions.is_empty());
    assert!(dataset.is_clean());
    assert_eq!(dataset.metrics.dependency_summary.total, 0);
}

#[test]
fn overload_limit_from_config() {
    let config = EnrichConfig::new().with_overload_limit(1);
    let dataset = enrich(&program_document(), &config).unwrap();
    assert_eq!(dataset.metrics.overloaded_roles.len(), 1);
    assert_eq!(dataset.metrics.role_summary.len(), 6);
}

#[test]
fn configured_role_override() {
    let doc = document([GroupBuilder::new("G").activity(
        ActivityBuilder::new("A")
            .assign("pm", "R")
            .assign("Project manager", "A"),
    )]);
    let config = EnrichConfig::new().with_role_override("pm", "Project Manager");
    let dataset = enrich(&doc, &config).unwrap();

    assert_eq!(dataset.roles.len(), 1);
    // first spelling seen ("Project manager" sorts before "pm") is the display name
    assert_eq!(dataset.roles[0].id, "project_manager");
    assert_eq!(dataset.roles[0].name, "Project manager");
    assert_eq!(dataset.roles[0].aliases, vec!["pm"]);
}

#[test]
fn group_distribution_lists_only_assigned_letters() {
    let doc = document([GroupBuilder::new("Launch").activity(
        ActivityBuilder::new("Ship")
            .assign("Bob", "A")
            .assign("Alice", "R"),
    )]);
    let dataset = enrich(&doc, &EnrichConfig::default()).unwrap();

    let summary = &dataset.metrics.group_summary["launch"];
    assert_eq!(summary.edge_distribution.get(RaciLetter::C), 0);
    let json = serde_json::to_string(&summary.edge_distribution).unwrap();
    assert_eq!(json, r#"{"R":1,"A":1}"#);

    let role = &dataset.metrics.role_summary[0];
    let counts = serde_json::to_string(&role.counts).unwrap();
    assert_eq!(counts, r#"{"R":1,"A":0,"C":0,"I":0}"#);
}
