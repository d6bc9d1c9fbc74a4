//! Benchmarks for the chart and table renderers
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use gdpscope::dashboard::DashboardView;
use gdpscope::model::{FilterState, IndicatorKey, Record, YearBounds, COL_GDP_PER_CAPITA};
use gdpscope::render::comparison::{comparison_charts, latest_per_country};
use gdpscope::render::indicator::indicator_chart;
use gdpscope::render::table::details_table;
use gdpscope::render::timeseries::time_series_chart;
use gdpscope::render::Locale;

fn years() -> YearBounds {
    YearBounds::new(1960, 2030).unwrap()
}

fn create_test_records(countries: usize) -> Vec<Record> {
    let mut records = Vec::new();
    for year in 1960..=2030 {
        for c in 0..countries {
            records.push(
                Record::new(format!("Country {}", c), year)
                    .column(COL_GDP_PER_CAPITA, 1000.0 + (c * 37 + year as usize) as f64)
                    .column("Inflation_Rate", inflation(year)),
            );
        }
    }
    records
}

fn inflation(year: i32) -> String {
    if year % 7 == 0 {
        "N/A".to_string()
    } else {
        (year % 5).to_string()
    }
}

fn bench_charts(c: &mut Criterion) {
    let mut group = c.benchmark_group("charts");
    let years = years();

    for countries in [2, 20, 200] {
        let records = create_test_records(countries);
        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_function(format!("time_series_{}", countries), |b| {
            b.iter(|| time_series_chart(black_box(&records), years))
        });

        group.bench_function(format!("latest_per_country_{}", countries), |b| {
            b.iter(|| latest_per_country(black_box(&records)).len())
        });

        group.bench_function(format!("comparison_{}", countries), |b| {
            b.iter(|| comparison_charts(black_box(&records), years, Locale::EnUs))
        });

        let key = IndicatorKey::parse("Inflation_Rate");
        group.bench_function(format!("indicator_{}", countries), |b| {
            b.iter(|| indicator_chart(black_box(&records), key.as_ref(), years))
        });
    }

    group.finish();
}

fn bench_tables(c: &mut Criterion) {
    let mut group = c.benchmark_group("tables");
    let years = years();

    let records = create_test_records(20);
    group.throughput(Throughput::Elements(records.len() as u64));

    group.bench_function("details_table", |b| {
        b.iter(|| details_table(black_box(&records), Locale::EnUs))
    });

    group.bench_function("full_view", |b| {
        let filter = FilterState::new(["Country 0", "Country 1"], years, None);
        b.iter(|| DashboardView::render(&filter, black_box(&records), &[], Locale::EnUs))
    });

    group.finish();
}

criterion_group!(benches, bench_charts, bench_tables);
criterion_main!(benches);
