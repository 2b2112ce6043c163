use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use larder_core::{Day, ProductCode};
use larder_inventory::{ProductLedger, Warehouse};

/// Fill a ledger with one batch per day, then drain it with small requests.
fn ledger_receive_then_drain(days: u32) -> u64 {
    let mut ledger = ProductLedger::new(days + 1);
    for day in 0..days {
        ledger.receive(100, Day::new(day));
    }
    let mut shipped = 0;
    while !ledger.is_empty() {
        shipped += ledger.consume(black_box(37));
    }
    shipped
}

/// Simulate `days` days over `products` products in one warehouse.
fn warehouse_daily_cycle(products: usize, days: u32) -> u64 {
    let codes: Vec<ProductCode> = (0..products)
        .map(|i| format!("{i:010}").parse().unwrap())
        .collect();
    let mut warehouse = Warehouse::new();

    for day in 0..days {
        let today = Day::new(day);
        for code in &codes {
            warehouse.receive(code, 20, today, 5);
            warehouse.request(code, 15);
        }
        warehouse.advance_day(today);
    }
    warehouse.peak_transactions()
}

fn bench_ledger(c: &mut Criterion) {
    let mut group = c.benchmark_group("ledger_fifo");
    for days in [10u32, 100, 1_000] {
        group.throughput(Throughput::Elements(days as u64));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| ledger_receive_then_drain(days));
        });
    }
    group.finish();
}

fn bench_warehouse(c: &mut Criterion) {
    let mut group = c.benchmark_group("warehouse_daily_cycle");
    for products in [10usize, 100, 1_000] {
        group.throughput(Throughput::Elements(products as u64 * 30));
        group.bench_with_input(
            BenchmarkId::from_parameter(products),
            &products,
            |b, &products| {
                b.iter(|| warehouse_daily_cycle(products, 30));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ledger, bench_warehouse);
criterion_main!(benches);
