//! Tests for the DP cache module.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;

use super::*;

/// fib(n) = fib(n-1) + fib(n-2)
struct Fibonacci;

impl DpProblem<usize, u64> for Fibonacci {
    fn deps(&self, n: &usize) -> Vec<usize> {
        if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
    }

    fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
        if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
    }
}

/// Steps until a Collatz sequence reaches 1, over sparse u64 indices
struct Collatz;

impl DpProblem<u64, u64> for Collatz {
    fn deps(&self, n: &u64) -> Vec<u64> {
        if *n <= 1 {
            vec![]
        } else if n % 2 == 0 {
            vec![n / 2]
        } else {
            vec![3 * n + 1]
        }
    }

    fn compute(&self, _n: &u64, deps: Vec<u64>) -> u64 {
        deps.first().map_or(0, |d| d + 1)
    }
}

#[test]
fn test_fibonacci_linear_dependency_chain() {
    let cache = DpCache::builder()
        .backend(VecBackend::new())
        .problem(Fibonacci)
        .build();

    assert_eq!(cache.get(&0), 0);
    assert_eq!(cache.get(&1), 1);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&10), 55);
    assert_eq!(cache.get(&20), 6765);
    assert_eq!(cache.get(&90), 2_880_067_194_370_816_120);
}

#[test]
fn test_diamond_dependency_memoization() {
    // A(0) depends on B(1) and C(2), both depend on D(3)
    struct Diamond {
        count: Rc<Cell<i32>>,
    }

    impl DpProblem<usize, i32> for Diamond {
        fn deps(&self, n: &usize) -> Vec<usize> {
            match *n {
                0 => vec![1, 2],
                1 | 2 => vec![3],
                _ => vec![],
            }
        }

        fn compute(&self, n: &usize, deps: Vec<i32>) -> i32 {
            self.count.set(self.count.get() + 1);
            match *n {
                0 => deps[0] + deps[1],
                1 => deps[0] * 2,
                2 => deps[0] * 3,
                _ => 5,
            }
        }
    }

    let count = Rc::new(Cell::new(0));
    let cache = DpCache::with_problem(
        VecBackend::new(),
        Diamond {
            count: Rc::clone(&count),
        },
    );

    assert_eq!(cache.get(&0), 25);
    assert_eq!(count.get(), 4);

    // Everything is cached now
    assert_eq!(cache.get(&0), 25);
    assert_eq!(cache.get(&3), 5);
    assert_eq!(count.get(), 4);
}

#[test]
fn test_hashmap_backend_collatz() {
    let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);

    assert_eq!(cache.get(&1), 0);
    assert_eq!(cache.get(&2), 1);
    assert_eq!(cache.get(&6), 8);
    assert_eq!(cache.get(&27), 111);
}

#[test]
fn test_vec2d_backend_grid_paths() {
    let cache = DpCache::new(
        Vec2DBackend::new(4, 6),
        |&(r, c): &(usize, usize)| {
            let mut deps = Vec::new();
            if r > 0 {
                deps.push((r - 1, c));
            }
            if c > 0 {
                deps.push((r, c - 1));
            }
            deps
        },
        |_: &(usize, usize), deps: Vec<u64>| {
            if deps.is_empty() { 1 } else { deps.iter().sum() }
        },
    );

    // C(8, 3)
    assert_eq!(cache.get(&(3, 5)), 56);
    assert_eq!(cache.get(&(0, 5)), 1);
}

#[test]
fn test_backend_contracts() {
    let mut vec_backend: VecBackend<&str> = VecBackend::with_capacity(2);
    assert_eq!(vec_backend.get(&3), None);
    vec_backend.insert(3, "three");
    assert_eq!(vec_backend.get(&3), Some(&"three"));
    assert_eq!(vec_backend.get(&1), None);

    let mut grid: Vec2DBackend<u8> = Vec2DBackend::new(2, 2);
    assert_eq!(grid.get(&(1, 1)), None);
    assert_eq!(grid.get(&(0, 7)), None);
    grid.insert((1, 0), 9);
    assert_eq!(grid.get(&(1, 0)), Some(&9));

    let mut map: HashMapBackend<(u8, char), i32> = HashMapBackend::default();
    map.insert((1, 'x'), -1);
    assert_eq!(map.get(&(1, 'x')), Some(&-1));
    assert_eq!(map.get(&(1, 'y')), None);
}

proptest! {
    #[test]
    fn prop_cached_matches_iterative_fibonacci(n in 0usize..80) {
        let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
        let (mut a, mut b) = (0u64, 1u64);
        for _ in 0..n {
            (a, b) = (b, a + b);
        }
        prop_assert_eq!(cache.get(&n), a);
    }

    #[test]
    fn prop_query_order_does_not_matter(queries in prop::collection::vec(1u64..2000, 1..20)) {
        let cache = DpCache::with_problem(HashMapBackend::new(), Collatz);
        let fresh = |n: u64| DpCache::with_problem(HashMapBackend::new(), Collatz).get(&n);
        for q in queries {
            prop_assert_eq!(cache.get(&q), fresh(q));
        }
    }
}
