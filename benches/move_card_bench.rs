//! Benchmark for the card move path

use cardwall::{apply_drag, AddBoard, AddCard, AddList, CardSlot, DragResult, Store};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_move_card(c: &mut Criterion) {
    let mut store = Store::new();
    store.apply(&AddBoard::new("Bench")).unwrap();
    store.apply(&AddList::new(0, "Backlog")).unwrap();
    store.apply(&AddList::new(0, "Done")).unwrap();
    for i in 0..1_000 {
        store.apply(&AddCard::new(0, 0, format!("card {i}"))).unwrap();
    }

    let set = store.snapshot();
    let board = set.boards()[0].id;
    let list = set.boards()[0].lists[0].id;

    c.bench_function("move_card_front_to_back_1000", |b| {
        b.iter(|| {
            let drag = DragResult::Card {
                source: CardSlot::new(board, list, 0),
                destination: Some(CardSlot::new(board, list, 999)),
            };
            apply_drag(black_box(&set), &drag).unwrap()
        })
    });

    c.bench_function("move_card_adjacent_1000", |b| {
        b.iter(|| {
            let drag = DragResult::Card {
                source: CardSlot::new(board, list, 500),
                destination: Some(CardSlot::new(board, list, 501)),
            };
            apply_drag(black_box(&set), &drag).unwrap()
        })
    });
}

criterion_group!(benches, bench_move_card);
criterion_main!(benches);
