use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linkseq::{Deque, LinkedList, Value, reverse_lines};
use rand::prelude::*;

/// Benchmark O(1) appends at both ends of the deque
fn bench_deque_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque");
    group.throughput(Throughput::Elements(1));

    group.bench_function("append_pop", |b| {
        let mut deque: Deque<i64> = (0..1_000).collect();
        b.iter(|| {
            deque.append(black_box(1));
            black_box(deque.pop().unwrap());
        });
    });

    group.bench_function("appendleft_popleft", |b| {
        let mut deque: Deque<i64> = (0..1_000).collect();
        b.iter(|| {
            deque.appendleft(black_box(1));
            black_box(deque.popleft().unwrap());
        });
    });

    group.finish();
}

/// Benchmark the linear-time list operations at several sizes
fn bench_list_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("list");

    for size in [100usize, 1_000, 10_000] {
        let list: LinkedList<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("get_middle", size), &size, |b, &size| {
            b.iter(|| black_box(list.get(black_box(size / 2)).unwrap()));
        });

        group.bench_with_input(BenchmarkId::new("find_last", size), &size, |b, &size| {
            let last = size as i64 - 1;
            b.iter(|| black_box(list.find(black_box(&last)).unwrap()));
        });
    }

    group.finish();
}

/// Benchmark a mixed insert/remove workload at random positions
fn bench_list_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_mixed");
    group.throughput(Throughput::Elements(1));

    group.bench_function("insert_remove", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        let mut list: LinkedList<i64> = (0..1_000).collect();
        let mut next = 1_000i64;

        b.iter(|| {
            let index = rng.gen_range(0..=list.len());
            list.insert(index, next).unwrap();
            next += 1;
            let victim = rng.gen_range(0..next);
            let _ = black_box(list.remove(&victim));
        });
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let list: LinkedList = (0..1_000i64)
        .map(|i| {
            if i % 2 == 0 {
                Value::Int(i)
            } else {
                Value::Text(format!("s{i}"))
            }
        })
        .collect();

    c.bench_function("render_1000", |b| b.iter(|| black_box(list.render())));
}

fn bench_reverse_lines(c: &mut Criterion) {
    let lines: Vec<String> = (0..10_000).map(|i| format!("line {i}\n")).collect();

    let mut group = c.benchmark_group("reverse");
    group.throughput(Throughput::Elements(lines.len() as u64));
    group.bench_function("reverse_lines_10000", |b| {
        b.iter(|| black_box(reverse_lines(lines.iter().cloned()).unwrap()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_deque_ends,
    bench_list_scans,
    bench_list_mixed,
    bench_render,
    bench_reverse_lines
);
criterion_main!(benches);
