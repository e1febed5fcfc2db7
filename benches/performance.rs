use bufcoll::{GrowthMode, Queue, Stack, Vector};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_sequential_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_push");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("growing_vector", size), size, |b, &size| {
            b.iter(|| {
                let mut vector = Vector::new();
                for i in 0..size {
                    vector.push(black_box(i));
                }
                black_box(vector.len())
            });
        });
    }
    group.finish();
}

fn bench_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_access");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("get_operations", size), size, |b, &size| {
            let mut vector = Vector::with_capacity(size);
            for i in 0..size {
                vector.push(i);
            }

            b.iter(|| {
                for i in 0..size {
                    black_box(vector.get(i));
                }
            });
        });
    }
    group.finish();
}

fn bench_shifting(c: &mut Criterion) {
    let mut group = c.benchmark_group("shifting");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("insert_remove_head", size), size, |b, &size| {
            let mut vector = Vector::with_capacity(size + 1);
            for i in 0..size {
                vector.push(i);
            }

            b.iter(|| {
                vector.insert(0, black_box(usize::MAX));
                black_box(vector.remove(0))
            });
        });
    }
    group.finish();
}

fn bench_iterator_performance(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("full_iteration", size), size, |b, &size| {
            let mut vector = Vector::new();
            for i in 0..size {
                vector.push(i);
            }

            b.iter(|| {
                for value in black_box(&vector) {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

fn bench_stack_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("push_pop_cycle", size), size, |b, &size| {
            b.iter(|| {
                let mut stack = Stack::new(GrowthMode::Dynamic);

                for i in 0..size {
                    stack.push(black_box(i));
                }
                for _ in 0..size {
                    black_box(stack.pop());
                }
            });
        });
    }
    group.finish();
}

fn bench_queue_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("wrapping_cycle", size), size, |b, &size| {
            let mut queue = Queue::with_capacity(64);

            b.iter(|| {
                for i in 0..size {
                    if queue.is_full() {
                        black_box(queue.dequeue());
                    }
                    queue.enqueue(black_box(i));
                }
                while let Ok(value) = queue.try_dequeue() {
                    black_box(value);
                }
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sequential_push,
    bench_random_access,
    bench_shifting,
    bench_iterator_performance,
    bench_stack_operations,
    bench_queue_operations
);
criterion_main!(benches);
