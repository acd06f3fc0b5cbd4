use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use jdl_converter::config::ConversionConfig;
use jdl_converter::convert::convert_parsed_jdl;
use jdl_converter::linter::lint_object;
use jdl_converter::model::ApplicationType;
use jdl_converter::parsed::{load_parsed_from_str, ParsedFormat, ParsedJdl};
use serde_json::{json, Value};
use std::hint::black_box;

/// A chain of `entity_count` entities, each with a handful of validated fields and a
/// many-to-one to its predecessor, plus options and one application over all of them.
fn synthetic_document(entity_count: usize) -> Value {
    let names: Vec<String> = (0..entity_count).map(|i| format!("Entity{}", i)).collect();

    let entities: Vec<Value> = names
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "javadoc": format!("The {} entity.", name),
                "annotations": [{"optionName": "dto", "optionValue": "mapstruct"}],
                "body": [
                    {"name": "code", "type": "String", "validations": [
                        {"key": "required"},
                        {"key": "pattern", "value": "^[A-Z']+$"}
                    ]},
                    {"name": "amount", "type": "BigDecimal", "validations": [
                        {"key": "min", "value": "MIN_AMOUNT", "constant": true}
                    ]},
                    {"name": "status", "type": "Status", "validations": []},
                    {"name": "createdAt", "type": "Instant", "validations": []}
                ]
            })
        })
        .collect();

    let relationships: Vec<Value> = names
        .windows(2)
        .map(|pair| {
            json!({
                "cardinality": "many-to-one",
                "from": {"name": pair[1]},
                "to": {"name": pair[0]}
            })
        })
        .collect();

    json!({
        "entities": entities,
        "enums": [{"name": "Status", "values": [{"key": "OPEN"}, {"key": "CLOSED"}]}],
        "relationships": relationships,
        "options": {
            "skipClient": {"list": ["*"], "excluded": [names[0]]},
            "pagination": {
                "infinite-scroll": {"list": &names[..entity_count / 2]},
                "pagination": {"list": &names[entity_count / 2..]}
            }
        },
        "useOptions": [{"optionValues": ["serviceImpl", "elasticsearch"], "list": ["*"]}],
        "applications": [{
            "config": {"baseName": "bench", "applicationType": "monolith"},
            "entities": {"entityList": ["*"]}
        }],
        "deployments": [],
        "constants": {"MIN_AMOUNT": 0}
    })
}

fn parsed(entity_count: usize) -> ParsedJdl {
    let document = synthetic_document(entity_count).to_string();
    load_parsed_from_str(&document, ParsedFormat::Json).expect("synthetic document parses")
}

fn bench_convert(c: &mut Criterion) {
    let config = ConversionConfig {
        application_type: Some(ApplicationType::Microservice),
        application_name: Some("bench".to_string()),
        ..ConversionConfig::default()
    };

    let mut group = c.benchmark_group("convert_parsed_jdl");
    for entity_count in [10, 100, 500] {
        let document = parsed(entity_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(entity_count),
            &document,
            |b, document| {
                b.iter(|| {
                    let jdl_object = convert_parsed_jdl(black_box(document), &config)
                        .expect("conversion succeeds");
                    black_box(jdl_object);
                })
            },
        );
    }
    group.finish();
}

fn bench_lint(c: &mut Criterion) {
    let jdl_object = convert_parsed_jdl(&parsed(100), &ConversionConfig::default())
        .expect("conversion succeeds");
    c.bench_function("lint_object_100", |b| {
        b.iter(|| black_box(lint_object(black_box(&jdl_object))))
    });
}

criterion_group!(benches, bench_convert, bench_lint);
criterion_main!(benches);
