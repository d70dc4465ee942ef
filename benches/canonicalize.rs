// benches/canonicalize.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use rvdss_scrape::canon::canonicalize_columns;
use rvdss_scrape::specs::positive;

const HEADERS: &[&str] = &[
    "Flu Tests", "Total Flu Tested", "RSV %", "Para Positive", "Influenza A Positive",
    "SARS-CoV-2 %", "hMPV tests", "Adeno Positive Tests", "Rhino %", "Other PIV positive",
    "flu tests.1", "Coronavirus Positive",
];

const PROVINCES: &[&str] = &[
    "Newfoundland and Labrador", "Prince Edward Island", "Nova Scotia", "New Brunswick",
    "Québec", "Ontario", "Manitoba", "Saskatchewan", "Alberta", "British Columbia", "Canada",
];

const VIRUSES: &[&str] = &[
    "Influenza", "Influenza A", "Influenza B", "RSV", "SARS-CoV-2", "Parainfluenza",
    "Adenovirus", "Human metapneumovirus", "Rhinovirus", "Coronavirus",
];

/// One season of weekly rows: every week × province × virus.
fn weekly_sample() -> String {
    let mut text = String::from("year,week,weekorder,region,province,date,virus,tests,percentpositive,detections\n");
    for week in 1..=52u32 {
        for prov in PROVINCES {
            for (i, virus) in VIRUSES.iter().enumerate() {
                let tests = 100 + week * 3 + i as u32;
                text.push_str(&format!(
                    "2024,{week},{week},X,{prov},{date},{virus},{tests},{pct},{pos}\n",
                    date = format!("{:02}/{:02}/2024", 1 + (week % 28), 1 + (week / 5)),
                    pct = (week % 40) as f64 / 2.0,
                    pos = tests / 10,
                ));
            }
        }
    }
    text
}

fn bench_canonicalize(c: &mut Criterion) {
    c.bench_function("canonicalize_columns", |b| {
        b.iter(|| black_box(canonicalize_columns(black_box(HEADERS))).len())
    });

    let text = weekly_sample();
    c.bench_function("positive_build_season", |b| {
        b.iter(|| {
            let table = positive::build(black_box(&text), "2024-12-31").expect("sample builds");
            black_box(table.len())
        })
    });
}

criterion_group!(benches, bench_canonicalize);
criterion_main!(benches);
