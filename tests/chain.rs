use bevy::math::Vec2;
use chain_snake::chain::{BASE_SPEED, SPEED_INCREMENT};
use chain_snake::{Chain, ChainError, Direction};

const EPSILON: f32 = 1e-3;

fn start() -> Chain {
    let mut chain = Chain::new();
    chain.init(100.0, 100.0, 500.0, 500.0);
    chain
}

fn link_errors(chain: &Chain) -> Vec<f32> {
    let segments = chain.segments();
    (1..segments.len())
        .map(|i| (segments[i].distance(segments[i - 1]) - 2.0 * chain.effective_radius(i)).abs())
        .collect()
}

#[test]
fn a_round_of_play() {
    let mut chain = start();
    let inputs = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];

    let mut length = chain.len();
    for (k, direction) in inputs.into_iter().enumerate() {
        chain.set_direction(direction).unwrap();
        for _ in 0..10 {
            chain.update(1.0 / 60.0).unwrap();
        }
        chain.eat_food().unwrap();
        chain.update(1.0 / 60.0).unwrap();

        assert!(chain.len() > length);
        length = chain.len();
        assert_eq!(chain.len(), 4 + k + 1);
        assert_eq!(chain.speed(), BASE_SPEED + SPEED_INCREMENT * (k + 1) as f32);
        assert!(link_errors(&chain).iter().all(|e| *e < EPSILON), "{:?}", link_errors(&chain));
    }
}

#[test]
fn straight_line_to_the_right() {
    let mut chain = start();
    chain.set_direction(Direction::Right).unwrap();

    let dt = 0.1;
    let mut previous = chain.head().unwrap();
    for _ in 0..30 {
        chain.update(dt).unwrap();
        let head = chain.head().unwrap();
        assert_eq!(head.y, 100.0);
        assert!((head.x - previous.x - chain.speed() * dt).abs() < EPSILON);
        previous = head;
    }
}

#[test]
fn food_is_eaten_through_hit() {
    let mut chain = start();
    chain.set_direction(Direction::Right).unwrap();
    let food = Vec2::new(150.0, 100.0);

    let mut frames = 0;
    while !chain.hit(food).unwrap() {
        chain.update(1.0 / 60.0).unwrap();
        frames += 1;
        assert!(frames < 120, "never reached the food");
    }
    assert!(chain.hit_head(food).unwrap());

    chain.eat_food().unwrap();
    chain.update(1.0 / 60.0).unwrap();
    assert_eq!(chain.len(), 5);
    assert!((chain.segments()[4].distance(chain.segments()[3]) - 11.2).abs() < EPSILON);
}

#[test]
fn wall_is_left_to_the_driver() {
    let mut chain = Chain::new();
    chain.init(20.0, 50.0, 100.0, 100.0);

    chain.update(1.0).unwrap();

    assert!(chain.head().unwrap().abs_diff_eq(Vec2::new(-80.0, 50.0), EPSILON));
    assert!(chain.is_out_of_bounds().unwrap());
}

#[test]
fn independent_chains_do_not_share_state() {
    let mut a = start();
    let mut b = start();

    a.eat_food().unwrap();
    a.set_direction(Direction::Down).unwrap();
    b.update(0.5).unwrap();

    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 4);
    assert_eq!(b.heading(), Direction::Left);
    assert_eq!(a.speed(), BASE_SPEED + SPEED_INCREMENT);
    assert_eq!(b.speed(), BASE_SPEED);
}

#[test]
fn text_commands_are_validated() {
    let mut chain = start();

    chain.set_direction_token("down").unwrap();
    assert_eq!(chain.heading(), Direction::Down);

    let err = chain.set_direction_token("diagonal").unwrap_err();
    assert_eq!(
        err,
        ChainError::InvalidDirection {
            token: "diagonal".to_string()
        }
    );
    assert_eq!(err.to_string(), "unrecognized direction \"diagonal\"");
}
