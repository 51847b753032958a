//! Benchmarks for the projection hot path
//!
//! Run with: cargo bench --package search
//!
//! List pages recompute the projection on every keystroke, so this is the
//! latency that bounds search-as-you-type responsiveness.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use registry::{CaseStatus, EyeColor, Gender, HairColor, MissingPerson, SkinColor};
use search::{project, FilterKey, SearchCriteria, MISSING_SEARCH_FIELDS};

fn synthetic_records(count: usize) -> Vec<MissingPerson> {
    let names = ["Ana Souza", "Bruno Lima", "Carla Dias", "Mariana Alves", "Pedro Rocha"];

    (0..count)
        .map(|i| MissingPerson {
            id: format!("m-{i}"),
            user_id: "u-1".to_string(),
            name: format!("{} {}", names[i % names.len()], i),
            nickname: String::new(),
            birth_date: NaiveDate::from_ymd_opt(1950 + (i % 60) as i32, 1, 1),
            date_of_disappearance: None,
            height: String::new(),
            clothes: "blue shirt".to_string(),
            gender: if i % 2 == 0 { Gender::Female } else { Gender::Male },
            eyes: EyeColor::ALL[i % EyeColor::ALL.len()],
            hair: HairColor::ALL[i % HairColor::ALL.len()],
            skin: SkinColor::ALL[i % SkinColor::ALL.len()],
            photo_url: String::new(),
            location: None,
            status: CaseStatus::Disappeared,
            event_report: "last seen downtown".to_string(),
            tattoo_description: String::new(),
            scar_description: String::new(),
        })
        .collect()
}

fn bench_projection_query(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let mut criteria = SearchCriteria::new();
    criteria.set(FilterKey::Query, "mariana");

    c.bench_function("project_query_10k", |b| {
        b.iter(|| {
            let visible = project(
                black_box(&records),
                black_box(&criteria),
                &MISSING_SEARCH_FIELDS,
            );
            black_box(visible)
        })
    });
}

fn bench_projection_all_dimensions(c: &mut Criterion) {
    let records = synthetic_records(10_000);
    let mut criteria = SearchCriteria::new();
    criteria.set(FilterKey::Query, "ana");
    criteria.set(FilterKey::Gender, "female");
    criteria.set(FilterKey::Eyes, "brown");
    criteria.set(FilterKey::AgeMin, "18");
    criteria.set(FilterKey::AgeMax, "60");

    c.bench_function("project_all_dimensions_10k", |b| {
        b.iter(|| {
            let visible = project(
                black_box(&records),
                black_box(&criteria),
                &MISSING_SEARCH_FIELDS,
            );
            black_box(visible)
        })
    });
}

criterion_group!(benches, bench_projection_query, bench_projection_all_dimensions);
criterion_main!(benches);
