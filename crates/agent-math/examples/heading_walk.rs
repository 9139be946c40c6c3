use std::collections::HashMap;

use agent_math::distribution::normalize_map;
use agent_math::heading::{turn_left, turn_right, Heading};
use agent_math::math::scalar_vector_product;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Walk a small loop: forward, left, forward, right, forward
    let mut pos = (0, 0);
    let mut heading = Heading::East;
    let plan = ["F", "L", "F", "R", "F"];
    for step in plan.iter() {
        match *step {
            "L" => heading = turn_left(heading),
            "R" => heading = turn_right(heading),
            _ => pos = heading.advance(pos),
        }
        println!("{:<2} heading={:<5} pos={:?}", step, heading, pos);
    }

    // Action outcome model: intended move 0.8, slip left/right 0.1 each
    let mut outcomes: HashMap<Heading, f64> = HashMap::new();
    outcomes.insert(heading, 8.0);
    outcomes.insert(heading.left(), 1.0);
    outcomes.insert(heading.right(), 1.0);
    let probs = normalize_map(&outcomes)?;
    for (h, p) in probs.iter() {
        println!("P(move {}) = {:.2}", h, p);
    }

    let reward = scalar_vector_product(0.9, &[1.0, 0.5, -1.0]);
    println!("Discounted rewards: {:?}", reward);

    Ok(())
}
