use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    // Generate game TOML strings of various sizes
    let small_toml = generate_game_toml(3);
    let medium_toml = generate_game_toml(30);
    let large_toml = generate_game_toml(120);

    group.bench_function("3_levels", |b| {
        b.iter(|| {
            eduquest_core::parser::parse_game_str(
                black_box(&small_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("30_levels", |b| {
        b.iter(|| {
            eduquest_core::parser::parse_game_str(
                black_box(&medium_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("120_levels", |b| {
        b.iter(|| {
            eduquest_core::parser::parse_game_str(
                black_box(&large_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let toml = generate_game_toml(30);
    let game =
        eduquest_core::parser::parse_game_str(&toml, "bench.toml".as_ref()).unwrap();

    group.bench_function("30_levels", |b| {
        b.iter(|| eduquest_core::parser::validate_game(black_box(&game)))
    });

    group.finish();
}

fn generate_game_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[game]
id = "bench"
title = "Benchmark"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[levels]]
title = "Level {i}"
instruction = "Pick the right answer"
question = "What is {i} + {i}?"
choices = ["{}", "{}", "{}", "{}"]
correct = 1
points = 10
"#,
            2 * i + 1,
            2 * i,
            2 * i + 2,
            i,
        ));
    }
    s
}

criterion_group!(benches, bench_toml_parsing, bench_validation);
criterion_main!(benches);
