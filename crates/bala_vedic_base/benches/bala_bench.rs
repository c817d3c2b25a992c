use criterion::{Criterion, black_box, criterion_group, criterion_main};
use bala_vedic_base::{
    ALL_VARGAS, Chart, DrishtiMode, GeoLocation, Graha, HouseSystem, PlanetPosition, Varga,
    aspect_strength, calculate_house_strength, calculate_shadbala, divisional_chart,
    graha_drishti_matrix, varga_longitude,
};
use chrono::{TimeZone, Utc};

fn bench_chart() -> Chart {
    let ts = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let lons = [
        (Graha::Surya, 270.6, 1.017),
        (Graha::Chandra, 335.2, 13.5),
        (Graha::Mangal, 250.4, 0.75),
        (Graha::Buddh, 242.8, 1.2),
        (Graha::Guru, 11.5, 0.05),
        (Graha::Shukra, 222.3, 1.23),
        (Graha::Shani, 309.6, 0.11),
        (Graha::Rahu, 351.0, -0.05),
    ];
    let positions = lons.iter().map(|&(g, lon, speed)| {
        let mut p = PlanetPosition::at_longitude(g, lon, ts);
        p.longitude_speed = speed;
        p
    });
    Chart::builder(ts, GeoLocation::new(28.6139, 77.2090, 0.0))
        .houses(HouseSystem::whole_sign(71.0))
        .planets(positions)
        .build()
        .unwrap()
}

fn varga_bench(c: &mut Criterion) {
    let lon = 123.456;
    let chart = bench_chart();

    let mut group = c.benchmark_group("varga");
    group.bench_function("varga_longitude_d9", |b| {
        b.iter(|| varga_longitude(black_box(lon), Varga::D9))
    });
    group.bench_function("varga_longitude_d249", |b| {
        b.iter(|| varga_longitude(black_box(lon), Varga::D249))
    });
    group.bench_function("divisional_chart_all", |b| {
        b.iter(|| {
            for v in ALL_VARGAS {
                black_box(divisional_chart(black_box(&chart), v));
            }
        })
    });
    group.finish();
}

fn drishti_bench(c: &mut Criterion) {
    let chart = bench_chart();

    let mut group = c.benchmark_group("drishti");
    group.bench_function("aspect_strength", |b| {
        b.iter(|| aspect_strength(Graha::Shani, black_box(10.0), black_box(275.0)))
    });
    group.bench_function("graha_drishti_matrix", |b| {
        b.iter(|| graha_drishti_matrix(black_box(&chart), DrishtiMode::Classical))
    });
    group.finish();
}

fn shadbala_bench(c: &mut Criterion) {
    let chart = bench_chart();
    let shadbala = calculate_shadbala(&chart);

    let mut group = c.benchmark_group("shadbala");
    group.bench_function("calculate_shadbala", |b| {
        b.iter(|| calculate_shadbala(black_box(&chart)))
    });
    group.bench_function("calculate_house_strength", |b| {
        b.iter(|| calculate_house_strength(black_box(&chart), black_box(&shadbala)))
    });
    group.finish();
}

criterion_group!(benches, varga_bench, drishti_bench, shadbala_bench);
criterion_main!(benches);
