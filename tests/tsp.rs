use std::error::Error;

use assignment::tsp::subtours;
use assignment::{CostMatrix, DefaultSolver, SubtourElimination};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

// (file, tour cost, subproblems solved)
const TESTS: &[(&str, f64, usize)] = &[
    ("data/tsp_1.csv", 62.0, 3),
    ("data/tsp_2.csv", 20.0, 1),
    ("data/tsp_3.csv", 31.0, 1),
    ("data/tsp_4.csv", 30.0, 17),
    ("data/tsp_5.csv", 14.0, 1),
    ("data/tsp_6.csv", 25.0, 13),
    ("data/tsp_7.csv", 24.0, 1),
    ("data/tsp_8.csv", 32.0, 16),
    ("data/tsp_9.csv", 27.0, 1),
    ("data/tsp_10.csv", 26.0, 4),
];

fn read_from_file(path: &str) -> Result<CostMatrix<f64>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let rows: Vec<Vec<f64>> = rdr.deserialize().collect::<Result<_, _>>()?;
    Ok(CostMatrix::new(rows).map_err(|e| e.to_string())?)
}

fn brute_force(distances: &CostMatrix<i32>) -> i32 {
    let n = distances.dim();
    (1..n)
        .permutations(n - 1)
        .map(|rest| {
            let tour: Vec<_> = std::iter::once(0).chain(rest).collect();
            (0..n)
                .map(|i| distances.get(tour[i], tour[(i + 1) % n]))
                .sum()
        })
        .min()
        .unwrap_or(0)
}

#[test]
fn test_subtour_elimination() -> Result<(), Box<dyn Error>> {
    for &(file, expected, subproblems) in TESTS {
        let distances = read_from_file(file)?;
        let tour = SubtourElimination::new(DefaultSolver::new())
            .solve(&distances)
            .map_err(|e| e.to_string())?;

        assert_eq!(tour.cost(), expected, "{file}");
        assert_eq!(tour.subproblems(), subproblems, "{file}");

        let cities: Vec<_> = tour.cities().sorted().collect();
        assert_eq!(cities, (0..distances.dim()).collect::<Vec<_>>(), "{file}");
        assert_eq!(subtours(tour.arcs()).len(), 1, "{file}");
    }

    Ok(())
}

#[test]
fn test_tour_order() -> Result<(), Box<dyn Error>> {
    let distances = read_from_file("data/tsp_1.csv")?;
    let tour = SubtourElimination::new(DefaultSolver::new())
        .solve(&distances)
        .map_err(|e| e.to_string())?;

    assert_eq!(tour.arcs(), &[(0, 4), (4, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(tour.cities().collect::<Vec<_>>(), [0, 4, 1, 2, 3]);
    Ok(())
}

#[test]
fn test_against_brute_force() {
    let mut rng = Pcg64::seed_from_u64(0);
    for _ in 0..100 {
        let n = rng.gen_range(2..=7);
        let rows = (0..n)
            .map(|_| (0..n).map(|_| rng.gen_range(0..20)).collect())
            .collect();
        let distances = CostMatrix::new(rows).unwrap();

        let tour = SubtourElimination::new(DefaultSolver::new())
            .solve(&distances)
            .unwrap();
        assert_eq!(tour.cost(), brute_force(&distances), "{distances:?}");
        assert_eq!(tour.arcs().len(), n);
    }
}
