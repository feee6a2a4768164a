//! Span recovery over a realistic service fixture.

use std::path::Path;

use pretty_assertions::assert_eq;
use strata_parser::{
    DeclarationKind, SourceUnit, SpanCursor, index_source, metadata, span::to_signature,
};

const FIXTURE: &str = include_str!("fixtures/OrderService.java");

fn unit() -> SourceUnit {
    index_source(Path::new("OrderService.java"), FIXTURE).expect("fixture should index")
}

fn spans(unit: &SourceUnit) -> Vec<(String, strata_parser::MethodSpan)> {
    let class = unit.primary_class().expect("class");
    let mut cursor = SpanCursor::new(unit, class);
    unit.tree
        .members_of(class)
        .filter(|m| m.kind == DeclarationKind::Method)
        .map(|m| (m.name.clone(), cursor.extract(m).expect("in order")))
        .collect()
}

#[test]
fn every_member_method_span_is_balanced() {
    let unit = unit();
    let spans = spans(&unit);
    assert_eq!(
        spans.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
        vec!["create", "findAll", "findById", "detached", "audit", "cancel"]
    );
    for (name, span) in &spans {
        assert!(!span.is_ambiguous(), "{name} should not be ambiguous");
        assert!(span.is_balanced(), "{name} should be brace balanced");
    }
}

#[test]
fn annotated_method_keeps_annotation_and_anonymous_class() {
    let unit = unit();
    let spans = spans(&unit);
    let (_, create) = &spans[0];
    assert_eq!(create.start_line, 19);
    assert_eq!(create.end_line, Some(32));
    assert!(create.text.starts_with("    @Transactional\n    public Order create(Order order) {"));
    assert!(create.text.contains("public String body()"));
    assert!(create.text.ends_with("        return saved;\n    }"));
}

#[test]
fn annotation_with_arguments_is_reattached() {
    let unit = unit();
    let spans = spans(&unit);
    let (_, find_all) = &spans[1];
    assert_eq!(
        find_all.text,
        "    @Transactional(readOnly = true)\n    public List<Order> findAll() {\n        return orderRepository.findAll();\n    }"
    );
}

#[test]
fn last_method_with_lambda_body_stops_before_class_brace() {
    let unit = unit();
    let spans = spans(&unit);
    let (_, cancel) = spans.last().expect("cancel");
    assert!(cancel.text.starts_with("    public void cancel(Long id) {"));
    assert!(cancel.text.ends_with("        });\n    }"));
    assert_eq!(cancel.end_line, Some(FIXTURE.lines().count() - 1));
}

#[test]
fn signatures_project_contract_lines() {
    let unit = unit();
    let spans = spans(&unit);
    let signatures: Vec<_> = spans
        .iter()
        .filter_map(|(_, span)| to_signature(span))
        .collect();
    assert_eq!(
        signatures,
        vec![
            "Order create(Order order);",
            "List<Order> findAll();",
            "Optional<Order> findById(Long id);",
            "static OrderService detached();",
            "void audit(Order order);",
            "void cancel(Long id);",
        ]
    );
}

#[test]
fn metadata_matches_fixture() {
    let unit = unit();
    let class = unit.primary_class().expect("class");
    let deps = metadata::dependencies(&unit.tree, class);
    assert_eq!(
        deps.iter().map(|d| d.type_name.as_str()).collect::<Vec<_>>(),
        vec!["OrderRepository", "NotificationGateway"]
    );
    let promotable: Vec<_> = unit
        .tree
        .members_of(class)
        .filter(|m| metadata::is_promotable(m))
        .map(|m| m.name.as_str())
        .collect();
    assert_eq!(promotable, vec!["create", "findAll", "findById", "cancel"]);
}
