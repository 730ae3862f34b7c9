// benches/report.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use meter_scrape::config::options::ExtractOptions;
use meter_scrape::core::DocumentTree;

/// A month of half-hourly readings split over a few tables, Windows-1251 encoded.
fn synthetic_report() -> Vec<u8> {
    let mut html = String::from("<html><body><p><a name=\"gn\">Данные ГН </a></p>\n");
    for week in 0..4 {
        html.push_str("<table cellpadding=\"4\">\n<tr><th>Время</th><th>A+</th><th>A-</th><th>R+</th><th>R-</th></tr>\n");
        for day in 1..=7 {
            html.push_str(&format!("<tr><td colspan=\"5\">Дата: {:02}.03.2024</td></tr>\n", week * 7 + day));
            for slot in 0..48 {
                html.push_str(&format!(
                    "<tr><td>{:02}:{:02}</td><td>{},5</td><td>0,0</td><td>3,1</td><td>0,2</td></tr>\n",
                    slot / 2,
                    (slot % 2) * 30,
                    slot
                ));
            }
        }
        html.push_str("</table>\n<p>Страница</p>\n");
    }
    html.push_str("<h2>Конец</h2></body></html>");
    encoding_rs::WINDOWS_1251.encode(&html).0.into_owned()
}

fn bench_report(c: &mut Criterion) {
    let doc = synthetic_report();
    let opts = ExtractOptions::default();
    let tree = DocumentTree::from_bytes(&doc);

    c.bench_function("parse_tree", |b| {
        b.iter(|| {
            let tree = DocumentTree::from_bytes(black_box(&doc));
            black_box(tree.len())
        })
    });

    c.bench_function("extract_tree", |b| {
        b.iter(|| {
            let lines = meter_scrape::extract_tree(black_box(&tree), &opts).unwrap();
            black_box(lines.len())
        })
    });

    c.bench_function("extract_bytes", |b| {
        b.iter(|| {
            let lines = meter_scrape::extract(black_box(&doc), &opts).unwrap();
            black_box(lines.len())
        })
    });
}

criterion_group!(benches, bench_report);
criterion_main!(benches);
