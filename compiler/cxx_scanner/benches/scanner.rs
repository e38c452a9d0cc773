//! Scanner benchmarks.
//!
//! Measures optimization plus recognition over function bodies of
//! growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use cxx_scanner::{ScanOptions, VariableScanner};

const FUNCTION_BODY: &str = r#"
bool Widget::Refresh(const wxRect& rect, bool erase)
{
    wxString label = GetLabel();
    std::map<int, std::vector<std::string>> groups;
    for (auto& entry : groups) {
        const std::string& first = entry.second.front();
        if (first.empty() && erase) {
            continue;
        }
    }
    try {
        Paint(rect, label);
    } catch (const std::exception& e) {
        wxLogError("%s", e.what());
    }
    return true;
}
"#;

fn generate_n_functions(n: usize) -> String {
    (0..n)
        .map(|i| FUNCTION_BODY.replace("Refresh", &format!("Refresh{i}")))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_function_body(c: &mut Criterion) {
    c.bench_function("scanner/function_body", |b| {
        b.iter(|| {
            let scanner = VariableScanner::new(black_box(FUNCTION_BODY), ScanOptions::new());
            black_box(scanner.get_variables(true));
        });
    });
}

fn bench_parse_function_arguments(c: &mut Criterion) {
    let signature = "(const wxString& name, int flags = 0, std::function<void(int)> cb, Foo*)";
    c.bench_function("scanner/function_arguments", |b| {
        b.iter(|| {
            let scanner = VariableScanner::new(black_box(signature), ScanOptions::new());
            black_box(scanner.parse_function_arguments());
        });
    });
}

fn bench_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/scaling");
    for n in [1, 10, 100] {
        let source = generate_n_functions(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &source, |b, source| {
            b.iter(|| {
                let scanner = VariableScanner::new(source.as_str(), ScanOptions::new());
                black_box(scanner.get_variables(false));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_function_body,
    bench_parse_function_arguments,
    bench_scaling
);
criterion_main!(benches);
