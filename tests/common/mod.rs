#![allow(dead_code)]

use fenwick::*;
use rand::{self, Rng};

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Update { index: usize, value: i64 },
    Combine { index: usize, delta: i64 },
    Prefix { index: usize },
    Range { start: usize, end: usize },
    ValueAt { index: usize },
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Empty,
    Partial(Option<i64>),
    Value(i64),
    /// The action was rejected because of its indices
    Failed,
}

/// Keeps the values in a plain vector, and does everything in linear time.
/// Uses the same 1-based indices as the trees.
#[derive(Clone, Debug)]
pub struct Simulator {
    values: Vec<i64>,
}

impl Simulator {
    pub fn new(initial: &[i64]) -> Self {
        Self {
            values: initial.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    fn valid(&self, index: usize) -> bool {
        (1..=self.len()).contains(&index)
    }

    pub fn run(&mut self, round_action: &RoundAction) -> RoundResult {
        use RoundAction::*;
        use RoundResult::*;

        match *round_action {
            Update { index, value } if self.valid(index) => {
                self.values[index] = value;
                Empty
            }
            Combine { index, delta } if self.valid(index) => {
                self.values[index] += delta;
                Empty
            }
            Prefix { index } if index <= self.len() => {
                if index == 0 {
                    Partial(None)
                } else {
                    Partial(Some(self.values[1..=index].iter().sum()))
                }
            }
            Range { start, end } if self.valid(start) && self.valid(end) && start <= end => {
                Value(self.values[start..=end].iter().sum())
            }
            ValueAt { index } if self.valid(index) => Value(self.values[index]),
            _ => Failed,
        }
    }
}

pub fn run_round<O>(round_action: &RoundAction, tree: &mut FenwickTree<i64, O>) -> RoundResult
where
    O: CommutativeOperator<i64>,
{
    use RoundAction::*;
    use RoundResult::*;

    let res = match *round_action {
        Update { index, value } => tree.update(index, value).map(|()| Empty),
        Combine { index, delta } => tree.combine_at(index, delta).map(|()| Empty),
        Prefix { index } => tree.prefix_query(index).map(Partial),
        Range { start, end } => tree.range_query(start, end).map(Value),
        ValueAt { index } => tree.value_at(index).map(Value),
    };
    res.unwrap_or(Failed)
}

const MAX_VALUE: i64 = 200;

/// Indices are drawn from `0..=len + 1`, so some of them are out of bounds.
pub fn random_round_action(rng: &mut rand::rngs::ThreadRng, len: usize) -> RoundAction {
    use RoundAction::*;
    let index = rng.gen_range(0..=len + 1);
    match rng.gen_range(0..5) {
        0 => Update {
            index,
            value: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        1 => Combine {
            index,
            delta: rng.gen_range(-MAX_VALUE..=MAX_VALUE),
        },
        2 => Prefix { index },
        3 => Range {
            start: index,
            end: rng.gen_range(0..=len + 1),
        },
        4 => ValueAt { index },
        _ => {
            panic!()
        }
    }
}

pub fn random_initial(rng: &mut rand::rngs::ThreadRng, len: usize) -> Vec<i64> {
    // index 0 is ignored by the trees, so fill it with junk
    std::iter::once(rng.gen())
        .chain((0..len).map(|_| rng.gen_range(-MAX_VALUE..=MAX_VALUE)))
        .collect()
}

/// Runs random rounds on a tree and on a [`Simulator`], and checks that they always agree.
pub fn check_consistency<O>(op: O, len: usize, num_rounds: u32)
where
    O: CommutativeOperator<i64>,
{
    let mut rng = rand::thread_rng();
    let initial = random_initial(&mut rng, len);

    let mut tree = FenwickTree::build(initial.clone(), op);
    let mut simulator = Simulator::new(&initial);

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng, len);
        let res1 = run_round(&round_action, &mut tree);
        let res2 = simulator.run(&round_action);
        assert_eq!(res1, res2, "{round_action:?}");
    }

    // every prefix, not just the ones that were asked for
    for index in 0..=len {
        let prefix = RoundAction::Prefix { index };
        assert_eq!(run_round(&prefix, &mut tree), simulator.run(&prefix));
    }
}

/// Toggles random ranges of light bulbs, and checks them against a plain vector of bools.
pub fn check_light_bulbs(initial: &[bool], num_rounds: u32) {
    let mut rng = rand::thread_rng();
    let len = initial.len().saturating_sub(1);

    let mut bulbs = LightBulbs::new(initial.to_vec());
    let mut expected = initial.to_vec();
    if let Some(sentinel) = expected.first_mut() {
        *sentinel = false;
    }

    for _ in 0..num_rounds {
        if len == 0 {
            assert!(bulbs.toggle(1, 1).is_err());
            break;
        }
        let start = rng.gen_range(1..=len);
        let end = rng.gen_range(start..=len);
        bulbs.toggle(start, end).unwrap();
        for on in &mut expected[start..=end] {
            *on = !*on;
        }

        for (i, &on) in expected.iter().enumerate().skip(1) {
            assert_eq!(bulbs.is_on(i), Ok(on), "bulb {i} after toggling {start}..={end}");
        }
    }
    assert_eq!(bulbs.states(), expected);
}
