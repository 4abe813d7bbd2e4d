use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use terminal_arcade::core::{ArcadeConfig, Displayable, Game, MazeGrid, Snake, SnakeGame};
use terminal_arcade::types::{Direction, Position, MAZE_HEIGHT, MAZE_WIDTH};

fn bench_snake_tick(c: &mut Criterion) {
    let config = ArcadeConfig::default().with_seed(12345);
    let mut game = SnakeGame::new(&config);
    let keys = ['d', 'w', 'a', 's'];
    let mut i = 0;

    c.bench_function("snake_tick", |b| {
        b.iter(|| {
            if game.is_over() {
                game.reset();
            }
            game.input(Some(keys[i % keys.len()]));
            game.process();
            i += 1;
        })
    });
}

fn bench_snake_collision(c: &mut Criterion) {
    // A long body with many turns.
    let mut snake = Snake::new(Position::new(0, 0), Direction::Right, 200);
    for n in 0..400 {
        let d = if n % 2 == 0 { Direction::Up } else { Direction::Right };
        snake.set_direction(d);
        snake.advance();
    }

    c.bench_function("snake_body_intersects", |b| {
        b.iter(|| snake.body_intersects(black_box(Position::new(150, 150))))
    });
}

fn bench_maze_generation(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("maze_generate_default", |b| {
        b.iter(|| MazeGrid::generate(black_box(MAZE_WIDTH), black_box(MAZE_HEIGHT), &mut rng))
    });
}

fn bench_snake_frame(c: &mut Criterion) {
    let game = SnakeGame::new(&ArcadeConfig::default().with_seed(1));

    c.bench_function("snake_frame", |b| b.iter(|| black_box(game.frame())));
}

criterion_group!(
    benches,
    bench_snake_tick,
    bench_snake_collision,
    bench_maze_generation,
    bench_snake_frame
);
criterion_main!(benches);
