use criterion::{black_box, criterion_group, criterion_main, Criterion};
use raci_enrich::{Enricher, EnrichConfig};
use raci_test_utils::{dep, document, ActivityBuilder, GroupBuilder};

fn synthetic_document(groups: usize, activities: usize) -> raci_model::InputDocument {
    document((0..groups).map(|g| {
        let mut group = GroupBuilder::new(&format!("Group {g}"));
        for a in 0..activities {
            let mut activity = ActivityBuilder::new(&format!("Activity {a}"))
                .assign(&format!("Lead {}", a % 7), "R")
                .assign(&format!("Owner {}", a % 3), "A")
                .assign("Reviewer", vec!["c", "I"]);
            if a > 0 {
                activity = activity.depends_on(dep(&format!("Activity {}", a - 1)));
            }
            group = group.activity(activity);
        }
        group
    }))
}

fn bench_enrich(c: &mut Criterion) {
    let enricher = Enricher::new(EnrichConfig::default());
    let doc = synthetic_document(20, 50);

    c.bench_function("enrich_1000_activities", |b| {
        b.iter(|| enricher.run(black_box(&doc)).unwrap());
    });
}

criterion_group!(benches, bench_enrich);
criterion_main!(benches);
