use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cast_polish::cast::rescale::{ScaleOptions, rescale_text};
use cast_polish::poster::compose;

fn benchmark_rescale(c: &mut Criterion) {
    let mut cast = String::from("{\"version\": 2, \"width\": 80, \"height\": 24, \"duration\": 100.0}\n");
    for i in 0..2000 {
        cast.push_str(&format!("[{:.3}, \"o\", \"line {}\\r\\n\"]\n", i as f64 * 0.05, i));
    }
    let opts = ScaleOptions::default();

    c.bench_function("rescale_cast", |b| {
        b.iter(|| rescale_text(black_box(&cast), opts))
    });
}

fn benchmark_compose(c: &mut Criterion) {
    let mut svg = String::from(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="580" height="564.46" viewBox="0 0 580 564.46"><style>@keyframes walk {"#,
    );
    for i in 0..100 {
        svg.push_str(&format!("{}%{{transform:translateX(-{}px)}}", i, i * 580));
    }
    svg.push_str("}</style><rect/></svg>");

    c.bench_function("compose_poster", |b| {
        b.iter(|| compose(black_box(&svg), &["line one", "line two"], 1.5))
    });
}

criterion_group!(benches, benchmark_rescale, benchmark_compose);
criterion_main!(benches);
