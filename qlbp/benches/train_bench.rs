use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use qlbp::agent::ActionSpace;
use qlbp::config::QLConfig;
use qlbp::opt::QLTrainer;
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};

mod util;

criterion_main!(benches);
criterion_group!(benches, can_place_bench, episode_bench);

/// Validation of random candidates against a densely filled layout
fn can_place_bench(c: &mut Criterion) {
    let config = QLConfig::default();
    let instance = util::create_instance(&config);
    let layout = util::create_first_fit_layout(&instance, config.grid_step);
    let action_space = ActionSpace::new(&instance.container, config.grid_step);
    let mut rng = SmallRng::seed_from_u64(0);

    println!(
        "layout contains {} items, density: {:.3}%",
        layout.n_placed(),
        layout.density() * 100.0
    );

    c.bench_function("can_place", |b| {
        b.iter(|| {
            let item = instance.item(rng.random_range(0..instance.n_items()));
            let action = action_space.get(rng.random_range(0..action_space.len()));
            layout.can_place(action.position, item.rotated(action.rotation).dims)
        })
    });
}

/// A handful of episodes on a fresh trainer
fn episode_bench(c: &mut Criterion) {
    let config = QLConfig {
        n_episodes: 10,
        ..QLConfig::default()
    };
    let instance = util::create_instance(&config);

    c.bench_function("train_10_episodes", |b| {
        b.iter_batched(
            || QLTrainer::new(instance.clone(), config, SmallRng::seed_from_u64(0)),
            |mut trainer| {
                for _ in 0..config.n_episodes {
                    trainer.run_episode();
                }
                trainer.best.density
            },
            BatchSize::SmallInput,
        )
    });
}
