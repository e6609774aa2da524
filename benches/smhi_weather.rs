use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smhi_weather::{nearest, parse_payload, GeoPoint, StationCatalog};

fn synthetic_listing(stations: usize) -> String {
    let mut listing = String::from("Id;Namn;Höjd;Aktiv;Latitud;Longitud\n");
    for i in 0..stations {
        let latitude = 55.0 + (i % 150) as f64 * 0.1;
        let longitude = 11.0 + (i / 150) as f64 * 0.1;
        listing.push_str(&format!(
            "{i};Station {i};10,0;Ja;{};{}\n",
            latitude.to_string().replace('.', ","),
            longitude.to_string().replace('.', ",")
        ));
    }
    listing
}

fn synthetic_payload(hours: usize) -> String {
    let mut payload = String::from(
        "Stationsnamn;Stationsnummer\nBench;1\n\nDatum;Tid (UTC);Lufttemperatur;Kvalitet\n",
    );
    for hour in 0..hours {
        payload.push_str(&format!(
            "2020-{:02}-{:02};{:02}:00:00;{},5;G\n",
            1 + (hour / 24 / 28) % 12,
            1 + (hour / 24) % 28,
            hour % 24,
            hour % 30
        ));
    }
    payload
}

fn bench_pipeline(c: &mut Criterion) {
    let listing = synthetic_listing(2_000);
    let catalog = StationCatalog::parse(&listing);
    let payload = synthetic_payload(50_000);
    let query = GeoPoint::new(59.3293, 18.0686);

    c.bench_function("parse_station_listing", |b| {
        b.iter(|| StationCatalog::parse(black_box(&listing)))
    });
    c.bench_function("nearest_5_of_2000", |b| {
        b.iter(|| nearest(black_box(query), &catalog, 5))
    });
    c.bench_function("parse_payload_50k_rows", |b| {
        b.iter(|| parse_payload(black_box(&payload)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
